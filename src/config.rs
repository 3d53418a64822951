//! Configuration for a merge invocation.
//!
//! There is no mutable state worth encapsulating beyond the two configured
//! directories, so the configuration is a plain struct validated once after
//! CLI parsing.

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Complete configuration for one duplex merge invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the scanned input documents.
    pub scan_dir: PathBuf,

    /// Directory that receives the merged output document.
    pub result_dir: PathBuf,
}

impl Config {
    /// Create a configuration from the two directory paths.
    pub fn new(scan_dir: PathBuf, result_dir: PathBuf) -> Self {
        Self {
            scan_dir,
            result_dir,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either configured path does not exist or is not
    /// a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.scan_dir.is_dir() {
            bail!(
                "Scan directory does not exist or is not a directory: {}",
                self.scan_dir.display()
            );
        }

        if !self.result_dir.is_dir() {
            bail!(
                "Result directory does not exist or is not a directory: {}",
                self.result_dir.display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_directories() {
        let scan_dir = TempDir::new().unwrap();
        let result_dir = TempDir::new().unwrap();

        let config = Config::new(
            scan_dir.path().to_path_buf(),
            result_dir.path().to_path_buf(),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_scan_dir() {
        let result_dir = TempDir::new().unwrap();

        let config = Config::new(
            PathBuf::from("/nonexistent/scans"),
            result_dir.path().to_path_buf(),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Scan directory"));
    }

    #[test]
    fn test_result_dir_must_be_a_directory() {
        let scan_dir = TempDir::new().unwrap();
        let file_path = scan_dir.path().join("not_a_dir");
        std::fs::File::create(&file_path).unwrap();

        let config = Config::new(scan_dir.path().to_path_buf(), file_path);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Result directory"));
    }
}
