use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use questfix::fields::PADRAO_FILE;

/// Add an empty image_id field to every question of one file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Question file to rewrite.
    #[arg(default_value = PADRAO_FILE, value_name = "FILE")]
    file: PathBuf,
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let name = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());
    println!("processing {name}...");

    let report = questfix::add_image_id_file(&cli.file).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(1)
    })?;

    println!("  total questions: {}", report.total);
    println!("  {} questions modified", report.modified);
    println!("  field 'image_id' added");

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    questfix::init_tracing();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(code) => code,
    }
}
