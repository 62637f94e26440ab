//! Controller detection and class-level base URL.

use super::annotation::extract_value;
use super::types::ClassDeclaration;

/// Class annotations that mark a request-handling controller.
pub const CONTROLLER_ANNOTATIONS: [&str; 2] = ["RestController", "Controller"];

/// Annotation carrying a class-level path prefix (also the generic
/// method-level mapping).
pub const REQUEST_MAPPING: &str = "RequestMapping";

pub fn is_controller(class: &ClassDeclaration) -> bool {
    class
        .annotations
        .iter()
        .any(|ann| CONTROLLER_ANNOTATIONS.contains(&ann.name.as_str()))
}

/// Path prefix declared by the class's first `@RequestMapping`.
///
/// Later mappings on the same class are ignored, not merged.
pub fn base_url(class: &ClassDeclaration) -> String {
    class
        .annotations
        .iter()
        .find(|ann| ann.name == REQUEST_MAPPING)
        .map(|ann| extract_value(ann, "value"))
        .unwrap_or_default()
}
