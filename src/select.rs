//! Candidate selection for a duplex scan pair.
//!
//! A two-pass ADF scan leaves exactly two fresh PDF files in the scan
//! directory: first the front pages in forward order, then the back pages in
//! reverse order. The selector lists the directory (non-recursive), keeps
//! entries whose name matches the scan glob, sorts the full paths in natural
//! order and picks the first two.

use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Result, ScanWeaveError};
use crate::sort::natural_cmp;

/// Glob pattern a scan document's file name must match.
///
/// The match is case-sensitive: `Scan51.PDF` is not a candidate.
pub const SCAN_PATTERN: &str = "*.pdf";

/// Selects the two scan documents to interleave from a directory listing.
#[derive(Debug, Clone)]
pub struct Selector {
    matcher: GlobMatcher,
}

impl Selector {
    /// Create a selector for the default [`SCAN_PATTERN`].
    pub fn new() -> Result<Self> {
        let matcher = Glob::new(SCAN_PATTERN)
            .map_err(|e| {
                ScanWeaveError::invalid_config(format!("Invalid scan pattern: {e}"))
            })?
            .compile_matcher();
        Ok(Self { matcher })
    }

    /// List all candidate documents in `scan_dir`, naturally sorted.
    ///
    /// Returns full paths. The listing is non-recursive and read-only;
    /// entries are filtered by file name against [`SCAN_PATTERN`].
    ///
    /// # Errors
    ///
    /// Returns [`ScanWeaveError::ScanDirUnreadable`] when the directory
    /// cannot be listed.
    pub async fn scan_candidates(&self, scan_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries =
            fs::read_dir(scan_dir)
                .await
                .map_err(|e| ScanWeaveError::ScanDirUnreadable {
                    path: scan_dir.to_path_buf(),
                    source: e,
                })?;

        let mut candidates = Vec::new();
        while let Some(entry) =
            entries
                .next_entry()
                .await
                .map_err(|e| ScanWeaveError::ScanDirUnreadable {
                    path: scan_dir.to_path_buf(),
                    source: e,
                })?
        {
            let name = entry.file_name();
            if self.matcher.is_match(Path::new(&name)) {
                candidates.push(entry.path());
            }
        }

        candidates.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
        Ok(candidates)
    }

    /// Select the two documents to merge.
    ///
    /// Returns the first two candidates in natural order, or an empty vector
    /// when fewer than two candidates exist. Fewer than two candidates is
    /// "nothing to merge", not an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scanweave::select::Selector;
    /// use std::path::Path;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let selector = Selector::new()?;
    /// let pair = selector.select_pair(Path::new("scans")).await?;
    /// if pair.is_empty() {
    ///     println!("nothing to merge");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn select_pair(&self, scan_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut candidates = self.scan_candidates(scan_dir).await?;
        if candidates.len() < 2 {
            return Ok(Vec::new());
        }
        candidates.truncate(2);
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[tokio::test]
    async fn test_filters_to_pdf_entries() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "Scan000032.pdf");
        touch(&temp_dir, "Scan000050.pdf");
        touch(&temp_dir, "Scan000051.jpg");

        let selector = Selector::new().unwrap();
        let candidates = selector.scan_candidates(temp_dir.path()).await.unwrap();

        assert_eq!(
            candidates,
            vec![
                temp_dir.path().join("Scan000032.pdf"),
                temp_dir.path().join("Scan000050.pdf"),
            ]
        );
    }

    #[tokio::test]
    async fn test_extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "Scan1.pdf");
        touch(&temp_dir, "Scan2.PDF");

        let selector = Selector::new().unwrap();
        let candidates = selector.scan_candidates(temp_dir.path()).await.unwrap();

        assert_eq!(candidates, vec![temp_dir.path().join("Scan1.pdf")]);
    }

    #[tokio::test]
    async fn test_select_pair_single_candidate_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "Scan000032.pdf");

        let selector = Selector::new().unwrap();
        let pair = selector.select_pair(temp_dir.path()).await.unwrap();

        assert!(pair.is_empty());
    }

    #[tokio::test]
    async fn test_select_pair_empty_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();

        let selector = Selector::new().unwrap();
        let pair = selector.select_pair(temp_dir.path()).await.unwrap();

        assert!(pair.is_empty());
    }

    #[tokio::test]
    async fn test_select_pair_takes_first_two_in_natural_order() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "Scan0000150.pdf");
        touch(&temp_dir, "Scan000050.pdf");
        touch(&temp_dir, "Scan000032.pdf");

        let selector = Selector::new().unwrap();
        let pair = selector.select_pair(temp_dir.path()).await.unwrap();

        assert_eq!(
            pair,
            vec![
                temp_dir.path().join("Scan000032.pdf"),
                temp_dir.path().join("Scan000050.pdf"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_scan_dir_is_an_error() {
        let selector = Selector::new().unwrap();
        let result = selector.scan_candidates(Path::new("/nonexistent/scans")).await;

        assert!(matches!(
            result,
            Err(ScanWeaveError::ScanDirUnreadable { .. })
        ));
    }

    #[tokio::test]
    async fn test_listing_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        File::create(nested.join("Scan1.pdf")).unwrap();
        touch(&temp_dir, "Scan2.pdf");

        let selector = Selector::new().unwrap();
        let candidates = selector.scan_candidates(temp_dir.path()).await.unwrap();

        assert_eq!(candidates, vec![temp_dir.path().join("Scan2.pdf")]);
    }
}
