//! Core types for route extraction.
//!
//! The declaration types are the parser's view of a source file: owned,
//! read-only snapshots built once per file and dropped after its routes
//! are extracted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The argument payload of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// `@Controller` — no arguments.
    Marker,
    /// `@GetMapping("/x")` — one unnamed value, raw source text.
    Single(String),
    /// `@RequestMapping(value = "/x", method = RequestMethod.GET)` —
    /// name/raw-text pairs in declaration order.
    Pairs(Vec<(String, String)>),
}

/// An annotation attached to a class or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name as written (`GetMapping`, or a qualified name if written so).
    pub name: String,
    pub value: AnnotationValue,
}

impl Annotation {
    pub fn marker(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: AnnotationValue::Marker,
        }
    }

    pub fn single(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: AnnotationValue::Single(value.to_string()),
        }
    }

    pub fn pairs(name: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            value: AnnotationValue::Pairs(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

/// A method declared directly inside a class body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub annotations: Vec<Annotation>,
    /// Raw `/** ... */` comment preceding the method, delimiters included.
    pub doc_comment: Option<String>,
    /// Simple name of the nearest enclosing class or interface.
    pub enclosing_class: Option<String>,
    /// Line of the declaration (1-indexed).
    pub line: usize,
}

/// A class or interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub methods: Vec<MethodDeclaration>,
    pub line: usize,
}

/// HTTP verb of an extracted route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    /// A generic mapping with no recognisable verb matches every verb.
    All,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::All => "ALL",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the endpoint inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteRecord {
    pub class_name: String,
    pub method_name: String,
    pub verb: HttpVerb,
    /// Always starts with a single `/` added at emit time.
    pub path: String,
    /// Possibly empty.
    pub description: String,
}

impl RouteRecord {
    /// Fields in report column order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.class_name,
            &self.method_name,
            self.verb.as_str(),
            &self.path,
            &self.description,
        ]
    }
}
