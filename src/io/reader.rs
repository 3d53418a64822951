//! PDF loading.

use lopdf::Document;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{Result, ScanWeaveError};

/// A loaded PDF document with its source metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to reject documents without pages after loading.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips the page-count verification.
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// Parsing runs on a blocking task so the async runtime is not stalled
    /// by large documents.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or is not a valid PDF
    /// - The PDF is encrypted
    /// - The PDF has no pages (unless verification is disabled)
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let load_path = path_buf.clone();
        let loaded = task::spawn_blocking(move || Document::load(&load_path))
            .await
            .map_err(|e| ScanWeaveError::Io {
                source: io::Error::other(e),
            })?;

        let document = loaded.map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                ScanWeaveError::encrypted_pdf(path_buf.clone())
            } else {
                ScanWeaveError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        let page_count = document.get_pages().len();
        if self.verify && page_count == 0 {
            return Err(ScanWeaveError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        let file_size = tokio::fs::metadata(&path_buf)
            .await
            .map(|m| m.len())
            .unwrap_or(0);

        Ok(LoadedPdf {
            document,
            path: path_buf,
            page_count,
            file_size,
        })
    }

    /// Load the two documents of a scan pair, in order.
    ///
    /// Loads are sequential; the first failure aborts.
    pub async fn load_pair(&self, first: &Path, second: &Path) -> Result<(LoadedPdf, LoadedPdf)> {
        let front = self.load(first).await?;
        let back = self.load(second).await?;
        Ok((front, back))
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
