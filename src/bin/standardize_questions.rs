use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use questfix::fields::{QUESTION_EXTENSION, QUESTIONS_DIR};
use questfix::{FileOutcome, RunSummary, StandardizeError};

/// Add grupo_id, tema, texto_referencia and image_id to every question file
/// in a directory.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the question files.
    #[arg(default_value = QUESTIONS_DIR, value_name = "DIR")]
    dir: PathBuf,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_outcome(result: &Result<FileOutcome, StandardizeError>) {
    match result {
        Ok(FileOutcome::Standardized { modified, total }) => {
            println!("  {modified}/{total} questions modified");
        }
        Ok(FileOutcome::AlreadyStandard { total }) => {
            println!("  already standardized ({total} questions)");
        }
        Err(StandardizeError::NotAnArray) => {
            println!("  warning: file is not a JSON list, skipping");
        }
        Err(e) if e.is_parse_error() => {
            println!("  error: failed to read JSON: {e}");
        }
        Err(e) => {
            println!("  error: unexpected failure: {e}");
        }
    }
}

fn run(cli: Cli) -> ExitCode {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("QUESTION FILE STANDARDIZER");
    println!("{rule}");

    let files = questfix::find_question_files(&cli.dir, QUESTION_EXTENSION);
    if files.is_empty() {
        println!(
            "\nno .{QUESTION_EXTENSION} files found in {}",
            cli.dir.display()
        );
        return ExitCode::from(1);
    }

    println!("\nfound {} files to process", files.len());

    let mut summary = RunSummary::default();
    for path in &files {
        println!("\nprocessing: {}", file_name(path));
        let result = questfix::standardize_file(path);
        if let Err(e) = &result {
            tracing::warn!(path = %path.display(), error = %e, "skipped question file");
        }
        print_outcome(&result);
        summary.record(&result);
    }

    println!("\n{rule}");
    println!("SUMMARY");
    println!("{rule}");
    println!("files processed: {}", summary.processed);
    println!("files modified: {}", summary.modified);
    println!("files already standardized: {}", summary.already_standard());
    println!("questions checked: {}", summary.questions);
    println!("\nstandardization complete");

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    questfix::init_tracing();
    run(Cli::parse())
}
