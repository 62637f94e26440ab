//! Language detection and tree-sitter grammar loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tree_sitter::Language;

/// Languages whose controllers can be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    Java,
}

impl SourceLanguage {
    /// Detect language from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "java" => Some(SourceLanguage::Java),
            _ => None,
        }
    }

    /// Get the tree-sitter Language for this language.
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            SourceLanguage::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_java() {
        assert_eq!(
            SourceLanguage::from_path(Path::new("src/MemberController.java")),
            Some(SourceLanguage::Java)
        );
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(SourceLanguage::from_path(Path::new("MemberController.kt")), None);
        assert_eq!(SourceLanguage::from_path(Path::new("Makefile")), None);
    }
}
