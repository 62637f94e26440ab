//! Directory scanner — walks a source tree and collects every route.
//!
//! Files are independent units of work: each worker parses one file and
//! returns its own records, and the calling thread merges them into the
//! report once all workers are done. A file that fails to parse is logged
//! and contributes nothing.

use ignore::WalkBuilder;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::extractor::extract_class_routes;
use super::types::RouteRecord;
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::parser::{parse_source, SourceLanguage};
use crate::report::Report;

/// Result of scanning a directory.
#[derive(Debug, Clone)]
pub struct Scan {
    pub report: Report,
    pub summary: ScanSummary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub routes: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scanned {} source files ({} failed), found {} routes",
            self.files_scanned, self.files_failed, self.routes
        )
    }
}

/// Lazily list the scannable source files under `root`.
///
/// Walk errors are yielded, not skipped.
pub fn source_files(
    root: &Path,
    respect_ignore_files: bool,
) -> impl Iterator<Item = Result<PathBuf>> {
    WalkBuilder::new(root)
        .standard_filters(respect_ignore_files)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                (is_file && SourceLanguage::from_path(entry.path()).is_some())
                    .then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(ScanError::from(e))),
        })
}

/// Routes declared in `source`, the content of `path`.
pub fn extract_source(path: &Path, source: &str) -> Result<Vec<RouteRecord>> {
    let parsed = parse_source(path, source)?;
    Ok(parsed.classes.iter().flat_map(extract_class_routes).collect())
}

/// Read and extract the routes of one file.
pub fn extract_file(path: &Path) -> Result<Vec<RouteRecord>> {
    let source = fs::read_to_string(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    extract_source(path, &source)
}

/// Scan `config.root` on a pool of `config.threads` workers.
///
/// A missing root or a failing walk aborts the scan; per-file failures
/// only show up in the summary and the log.
pub fn scan_directory(config: &ScanConfig) -> Result<Scan> {
    if !config.root.exists() {
        return Err(ScanError::RootNotFound(config.root.clone()));
    }

    let files = source_files(&config.root, config.respect_ignore_files)
        .collect::<Result<Vec<_>>>()?;
    debug!(root = %config.root.display(), files = files.len(), "walk complete");

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()?;

    let per_file: Vec<Result<Vec<RouteRecord>>> =
        pool.install(|| files.par_iter().map(|path| extract_file(path)).collect());

    let mut report = Report::new();
    let mut summary = ScanSummary {
        files_scanned: files.len(),
        ..Default::default()
    };

    for (path, outcome) in files.iter().zip(per_file) {
        match outcome {
            Ok(routes) => {
                debug!(file = %path.display(), routes = routes.len(), "processed");
                report.extend(routes);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping file");
                summary.files_failed += 1;
            }
        }
    }

    summary.routes = report.len();
    info!(%summary, "scan complete");

    Ok(Scan { report, summary })
}
