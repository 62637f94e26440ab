//! # routescan
//!
//! Inventory of the HTTP endpoints a Java code base exposes.
//!
//! routescan walks a source tree, parses each `.java` file with tree-sitter,
//! finds the request-handling controllers among its classes and lists every
//! mapped method as a route: class, method, HTTP verb, path and description.
//!
//! ## Key Features
//!
//! - **Annotation-driven**: `@RestController` / `@Controller` classes,
//!   `@RequestMapping` prefixes, `@GetMapping`-style and generic mappings
//! - **Documented**: descriptions come from the method's doc comment
//! - **Parallel**: files are parsed on a bounded worker pool
//! - **Forgiving**: a file that fails to parse is logged and skipped
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use routescan::{scan_directory, ScanConfig};
//!
//! let config = ScanConfig::default();
//! let scan = scan_directory(&config).unwrap();
//! scan.report.write_to(&config.output).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod routes;

// Re-exports for convenience
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use parser::{parse_source, ParsedSource, SourceLanguage};
pub use report::{Report, HEADER};
pub use routes::{
    extract_file, extract_source, scan_directory, HttpVerb, RouteRecord, Scan, ScanSummary,
};
