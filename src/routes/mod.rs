//! Route extraction — the annotation-resolution core.
//!
//! Classifies controller classes, resolves verbs and paths from their
//! mapping annotations, and scans whole source trees.

pub mod annotation;
pub mod builder;
pub mod classifier;
pub mod describe;
pub mod extractor;
pub mod types;

pub use annotation::{extract_value, named_argument};
pub use builder::{extract_file, extract_source, scan_directory, source_files, Scan, ScanSummary};
pub use classifier::{base_url, is_controller};
pub use describe::{describe, doc_description};
pub use extractor::{compose_path, extract_class_routes, extract_routes, infer_verb};
pub use types::{
    Annotation, AnnotationValue, ClassDeclaration, HttpVerb, MethodDeclaration, RouteRecord,
};
