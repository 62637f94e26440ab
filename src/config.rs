//! Scan configuration, read from `routescan.toml`.
//!
//! ```toml
//! root = "src/main/java"
//! output = "api-list.txt"
//! threads = 8
//! respect_ignore_files = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "routescan.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory whose source files are scanned.
    pub root: PathBuf,
    /// Report file. Overwritten on every run.
    pub output: PathBuf,
    /// Worker pool size. `None` lets rayon pick (one per CPU).
    pub threads: Option<usize>,
    /// Honour `.gitignore` and skip hidden entries while walking.
    pub respect_ignore_files: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src/main/java"),
            output: PathBuf::from("api-list.txt"),
            threads: None,
            respect_ignore_files: false,
        }
    }
}

impl ScanConfig {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(path, &text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ScanError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve relative `root` and `output` against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.root.is_relative() {
            self.root = base.join(&self.root);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScanConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ScanConfig::default());
        assert_eq!(config.output, PathBuf::from("api-list.txt"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "root = \"controllers\"\nthreads = 2").unwrap();

        let config = ScanConfig::load(file.path()).unwrap();
        assert_eq!(config.root, PathBuf::from("controllers"));
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.output, PathBuf::from("api-list.txt"));
        assert!(!config.respect_ignore_files);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "threads = \"many\"").unwrap();

        let err = ScanConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));
    }

    #[test]
    fn test_resolve_paths() {
        let config = ScanConfig {
            output: PathBuf::from("/tmp/out.txt"),
            ..Default::default()
        }
        .resolve_paths(Path::new("/work"));

        assert_eq!(config.root, PathBuf::from("/work/src/main/java"));
        assert_eq!(config.output, PathBuf::from("/tmp/out.txt"));
    }
}
