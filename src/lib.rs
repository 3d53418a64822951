//! scanweave - Interleave two-pass duplex scans into a single ordered PDF.
//!
//! A scanner with an automatic document feeder handles double-sided
//! originals in two passes: one run over the front pages in forward order,
//! then one run over the back pages, which come out of the feeder in
//! reverse order. The result is two PDF files whose pages have to be woven
//! back together:
//!
//! ```text
//! front: F1 F2 F3      back: B3 B2 B1      output: F1 B1 F2 B2 F3 B3
//! ```
//!
//! scanweave picks the two pass documents out of a scan directory
//! (first two in natural file-name order), checks that their page counts
//! match, interleaves the pages and writes the result under a
//! timestamp-derived name.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::Local;
//! use scanweave::{Config, merge_scan_pair};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(PathBuf::from("scans"), PathBuf::from("merged"));
//!
//! match merge_scan_pair(&config, Local::now()).await? {
//!     Some(outcome) => println!("Wrote {}", outcome.output_path.display()),
//!     None => println!("Fewer than two scan documents; nothing to merge"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using individual components
//!
//! ```no_run
//! use scanweave::io::load_pdf;
//! use scanweave::merge::Interleaver;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let front = load_pdf(Path::new("Scan32.pdf")).await?;
//! let back = load_pdf(Path::new("Scan50.pdf")).await?;
//!
//! let result = Interleaver::new().interleave(&front, &back)?;
//! println!("Assembled {} pages", result.page_count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod naming;
pub mod output;
pub mod select;
pub mod sort;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ScanWeaveError};
pub use merge::{MergeOutcome, merge_scan_pair};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
