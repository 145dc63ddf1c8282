use serde_json::{Map, Value};

use crate::fields::{
    CANONICAL_ORDER, DEFAULT_MATERIA, EXTENDED_FIELDS, TEMA_MAX_CHARS, TEMA_TRUNCATED_CHARS,
    TEMA_WORDS,
};

/// One question, keys kept in document order.
pub type Record = Map<String, Value>;

/// Returns true when every extended field is already present.
pub fn has_extended_fields(record: &Record) -> bool {
    EXTENDED_FIELDS.iter().all(|field| record.contains_key(*field))
}

/// Build a short label from the subject and the first words of the prompt.
///
/// The prompt fragment is the first five whitespace-separated tokens of
/// `enunciado`. Fragments over 40 characters are cut to 37 plus `...`.
/// Without prompt text the label is the subject alone.
pub fn extract_tema(record: &Record) -> String {
    let materia = match record.get("materia") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => DEFAULT_MATERIA.to_string(),
    };
    let enunciado = record
        .get("enunciado")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let tema_base = enunciado
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .take(TEMA_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    let tema_base = shorten(tema_base);

    if tema_base.is_empty() {
        materia
    } else {
        format!("{materia}: {tema_base}")
    }
}

// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn shorten(fragment: String) -> String {
    if fragment.chars().count() <= TEMA_MAX_CHARS {
        return fragment;
    }
    let mut cut: String = fragment.chars().take(TEMA_TRUNCATED_CHARS).collect();
    cut.push_str("...");
    cut
}

fn default_value(field: &str, record: &Record) -> Value {
    match field {
        "grupo_id" => record.get("id").cloned().unwrap_or_else(|| Value::from(0)),
        "tema" => Value::String(extract_tema(record)),
        _ => Value::String(String::new()),
    }
}

/// Defaults for every extended field the record lacks, in field order.
///
/// Defaults are derived from the record as given; existing keys never get an
/// entry here.
pub fn missing_defaults(record: &Record) -> Vec<(String, Value)> {
    EXTENDED_FIELDS
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(|field| (field.to_string(), default_value(field, record)))
        .collect()
}

/// Build a record from `entries` with canonical keys first and every other
/// key after them in the order encountered.
///
/// The first occurrence of a key wins; later duplicates are dropped.
pub fn reorder(entries: Vec<(String, Value)>) -> Record {
    let mut slots: Vec<Option<(String, Value)>> = entries.into_iter().map(Some).collect();
    let mut ordered = Record::with_capacity(slots.len());

    for name in CANONICAL_ORDER {
        let slot = slots
            .iter_mut()
            .find(|slot| matches!(slot, Some((key, _)) if key == name));
        if let Some((key, value)) = slot.and_then(Option::take) {
            ordered.insert(key, value);
        }
    }

    for (key, value) in slots.into_iter().flatten() {
        ordered.entry(key).or_insert(value);
    }

    ordered
}

/// Reorder an existing record into canonical key order.
pub fn reorder_record(record: Record) -> Record {
    reorder(record.into_iter().collect())
}

/// Fill missing extended fields and rewrite the record in canonical order.
///
/// A record that already has all extended fields is left exactly as it was,
/// key order included. Returns whether the record changed.
pub fn standardize(record: &mut Record) -> bool {
    if has_extended_fields(record) {
        return false;
    }

    let defaults = missing_defaults(record);
    tracing::debug!(
        id = ?record.get("id"),
        added = ?defaults.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        "filling missing fields"
    );

    let mut entries: Vec<(String, Value)> = std::mem::take(record).into_iter().collect();
    entries.extend(defaults);
    *record = reorder(entries);
    true
}

/// Give the record an empty `image_id` placed right after `texto_referencia`.
///
/// Records without `texto_referencia` get `image_id` as their last key.
/// Returns false when `image_id` was already present.
pub fn insert_image_id(record: &mut Record) -> bool {
    if record.contains_key("image_id") {
        return false;
    }

    let mut entries: Vec<(String, Value)> = Vec::with_capacity(record.len() + 1);
    let mut placed = false;
    for (key, value) in std::mem::take(record) {
        let anchor = key == "texto_referencia";
        entries.push((key, value));
        if anchor {
            entries.push(("image_id".to_string(), Value::String(String::new())));
            placed = true;
        }
    }
    if !placed {
        entries.push(("image_id".to_string(), Value::String(String::new())));
    }

    *record = entries.into_iter().collect();
    true
}
