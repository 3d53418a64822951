//! PDF reading and writing.
//!
//! The PDF container format itself is [`lopdf`]'s business; this module
//! wraps loading and saving with the error mapping and blocking-task
//! plumbing the rest of the crate expects.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};

use std::path::Path;

use crate::error::Result;

/// Load a single PDF with default reader settings.
pub async fn load_pdf(path: &Path) -> Result<LoadedPdf> {
    PdfReader::new().load(path).await
}
