#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Copy a fixture into `dir` under `target` and return the new path.
pub fn copy_fixture(dir: &Path, name: &str, target: &str) -> PathBuf {
    let dest = dir.join(target);
    std::fs::copy(fixture(name), &dest).unwrap();
    dest
}

/// Parse a question file into its JSON array of records.
pub fn read_records(path: &Path) -> Vec<Value> {
    let text = std::fs::read_to_string(path).unwrap();
    match serde_json::from_str(&text).unwrap() {
        Value::Array(items) => items,
        other => panic!("expected array, got {other}"),
    }
}

/// Keys of a record in document order.
pub fn keys_of(record: &Value) -> Vec<String> {
    record.as_object().unwrap().keys().cloned().collect()
}
