//! CLI argument parsing.
//!
//! The interface is deliberately tiny: two positional directory arguments
//! and no flags. Everything else (file selection, naming) is derived.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, ScanWeaveError};

/// Interleave a two-pass duplex scan into a single ordered PDF.
///
/// scanweave picks the first two PDF documents in SCAN_DIR (natural
/// file-name order), assumes the first holds the front pages in forward
/// order and the second the back pages in reverse order, and writes the
/// interleaved document into RESULT_DIR under a timestamp-derived name.
/// With fewer than two PDF documents in SCAN_DIR there is nothing to merge
/// and scanweave exits normally without writing anything.
#[derive(Parser, Debug)]
#[command(name = "scanweave")]
#[command(version)]
#[command(about = "Interleave two-pass duplex scans into a single PDF", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory containing the scanned input documents
    #[arg(value_name = "SCAN_DIR")]
    pub scan_dir: PathBuf,

    /// Directory that receives the merged output document
    #[arg(value_name = "RESULT_DIR")]
    pub result_dir: PathBuf,
}

impl Cli {
    /// Convert CLI arguments into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if either directory does not exist.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config::new(self.scan_dir.clone(), self.result_dir.clone());

        config
            .validate()
            .map_err(|e| ScanWeaveError::invalid_config(e.to_string()))?;

        Ok(config)
    }
}
