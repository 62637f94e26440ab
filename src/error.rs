//! Error types for routescan.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the scanner can report.
///
/// Parse failures are recovered per file by the directory scan; the rest
/// abort the run.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("parse error at {}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ScanError>;
