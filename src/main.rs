//! scanweave - Interleave two-pass duplex scans into a single ordered PDF.

use chrono::Local;
use clap::Parser;
use std::process;

use scanweave::cli::Cli;
use scanweave::error::ScanWeaveError;
use scanweave::merge;
use scanweave::output::OutputFormatter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), ScanWeaveError> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::new();

    match merge::merge_scan_pair(&config, Local::now()).await? {
        Some(outcome) => {
            formatter.success(&format!(
                "Interleaved {} and {} into {} page(s)",
                outcome.sources[0].display(),
                outcome.sources[1].display(),
                outcome.page_count
            ));
            // The output path is the tool's one machine-readable result.
            println!("{}", outcome.output_path.display());
        }
        None => {
            formatter.info("Fewer than two scan documents found; nothing to merge");
        }
    }

    Ok(())
}
