pub mod collection;
pub mod driver;
pub mod error;
pub mod fields;
pub mod record;

pub use collection::{FileOutcome, ImageIdReport, add_image_id_file, standardize_file};
pub use driver::{RunSummary, find_question_files};
pub use error::StandardizeError;
pub use record::Record;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber used by the command-line tools.
///
/// Honors `RUST_LOG`; defaults to warnings only so standard output carries
/// just the operator report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
