//! The duplex merge pipeline.
//!
//! Ties the pieces together: candidate selection, loading, page
//! interleaving, output naming and writing. The pipeline is linear and
//! non-resumable; each invocation is independent and touches only the two
//! input files and one output file.

pub mod interleaver;

pub use interleaver::{InterleaveResult, Interleaver};

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::io::{PdfReader, PdfWriter};
use crate::naming;
use crate::select::Selector;

/// Summary of a completed merge invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    /// Path of the written output document.
    pub output_path: PathBuf,

    /// The two input documents, front-pages file first.
    pub sources: Vec<PathBuf>,

    /// Page count of the output document.
    pub page_count: usize,

    /// Size of the output file in bytes.
    pub file_size: u64,
}

/// Run one duplex merge: select a pair, interleave it, write the result.
///
/// `now` names the output file; pass [`Local::now`] outside of tests.
///
/// Returns `Ok(None)` when the scan directory holds fewer than two
/// candidate documents. That is the "nothing to merge" signal, not an
/// error, and nothing is written.
///
/// # Errors
///
/// Returns an error when the directory cannot be listed, either document
/// fails to load, the page counts differ, or the output cannot be written.
/// A failure leaves the result directory untouched.
///
/// # Examples
///
/// ```no_run
/// use chrono::Local;
/// use scanweave::{Config, merge_scan_pair};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::new(PathBuf::from("scans"), PathBuf::from("merged"));
///
/// match merge_scan_pair(&config, Local::now()).await? {
///     Some(outcome) => println!("{}", outcome.output_path.display()),
///     None => println!("nothing to merge"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn merge_scan_pair(
    config: &Config,
    now: DateTime<Local>,
) -> Result<Option<MergeOutcome>> {
    let selector = Selector::new()?;
    let pair = selector.select_pair(&config.scan_dir).await?;

    let [front_path, back_path] = pair.as_slice() else {
        return Ok(None);
    };

    let reader = PdfReader::new();
    let (front, back) = reader.load_pair(front_path, back_path).await?;

    let interleaved = Interleaver::new().interleave(&front, &back)?;

    let output_path = naming::output_path(&config.result_dir, now);
    let writer = PdfWriter::new();
    let stats = writer
        .save_with_stats(&interleaved.document, &output_path)
        .await?;

    Ok(Some(MergeOutcome {
        output_path: stats.output_path,
        sources: vec![front.path, back.path],
        page_count: interleaved.page_count,
        file_size: stats.file_size,
    }))
}
