//! Source parsing: turns a file's text into class declarations.
//!
//! Uses tree-sitter for parsing. Unlike most tree-sitter consumers, a tree
//! with syntax errors is rejected as a whole so that a broken file
//! contributes nothing rather than half-read declarations.

pub mod java;
pub mod language;

pub use language::SourceLanguage;

use std::path::{Path, PathBuf};
use tree_sitter::Parser;

use crate::error::{Result, ScanError};
use crate::routes::types::ClassDeclaration;

/// Declarations read from a single source file.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub path: PathBuf,
    pub language: SourceLanguage,
    pub classes: Vec<ClassDeclaration>,
}

/// Parse `source` (the content of `path`) into its class declarations.
pub fn parse_source(path: &Path, source: &str) -> Result<ParsedSource> {
    let language = SourceLanguage::from_path(path)
        .ok_or_else(|| ScanError::UnsupportedLanguage(path.display().to_string()))?;

    let parse_error = |line: usize, message: String| ScanError::Parse {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&language.tree_sitter_language())
        .map_err(|e| parse_error(0, e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| parse_error(0, "parser returned no tree".to_string()))?;
    let root = tree.root_node();

    if let Some(node) = java::first_error(&root) {
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_string()
        };
        return Err(parse_error(node.start_position().row + 1, message));
    }

    Ok(ParsedSource {
        path: path.to_path_buf(),
        language,
        classes: java::extract_classes(&root, source.as_bytes()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::types::{Annotation, AnnotationValue};

    fn parse(source: &str) -> ParsedSource {
        parse_source(Path::new("Test.java"), source).unwrap()
    }

    #[test]
    fn test_annotation_shapes() {
        let parsed = parse(
            r#"
@RestController
@RequestMapping("/members")
public class MemberController {
    @RequestMapping(value = "/x", method = RequestMethod.GET)
    public String pairs() { return ""; }

    @GetMapping()
    public String empty() { return ""; }
}
"#,
        );

        assert_eq!(parsed.language, SourceLanguage::Java);
        assert_eq!(parsed.classes.len(), 1);
        let class = &parsed.classes[0];
        assert_eq!(class.name, "MemberController");
        assert_eq!(
            class.annotations,
            vec![
                Annotation::marker("RestController"),
                Annotation::single("RequestMapping", "\"/members\""),
            ]
        );

        assert_eq!(
            class.methods[0].annotations,
            vec![Annotation::pairs(
                "RequestMapping",
                &[("value", "\"/x\""), ("method", "RequestMethod.GET")],
            )]
        );
        assert_eq!(class.methods[1].annotations[0].value, AnnotationValue::Pairs(vec![]));
    }

    #[test]
    fn test_array_value_is_single() {
        let parsed = parse(
            r#"
class A {
    @GetMapping({"/a", "/b"})
    void m() {}
}
"#,
        );
        assert_eq!(
            parsed.classes[0].methods[0].annotations,
            vec![Annotation::single("GetMapping", "{\"/a\", \"/b\"}")]
        );
    }

    #[test]
    fn test_doc_comment_and_enclosing_class() {
        let parsed = parse(
            r#"
@Controller
public class MemberController {
    /**
     * Fetch member profile.
     */
    @GetMapping("/profile")
    public String profile() { return ""; }

    /* not a doc comment */
    public void plain() {}

    public void undocumented() {}
}
"#,
        );

        let methods = &parsed.classes[0].methods;
        assert_eq!(methods.len(), 3);
        assert!(methods[0].doc_comment.as_deref().unwrap().contains("Fetch member profile."));
        assert_eq!(methods[0].enclosing_class.as_deref(), Some("MemberController"));
        assert_eq!(methods[1].doc_comment, None);
        assert_eq!(methods[2].doc_comment, None);
    }

    #[test]
    fn test_nested_classes_listed_separately() {
        let parsed = parse(
            r#"
public class Outer {
    public void outerMethod() {}

    @RestController
    static class Inner {
        @GetMapping("/inner")
        public void innerMethod() {}
    }
}
"#,
        );

        let names: Vec<&str> = parsed.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner"]);
        assert_eq!(parsed.classes[0].methods.len(), 1);
        assert_eq!(parsed.classes[1].methods[0].name, "innerMethod");
        assert_eq!(parsed.classes[1].methods[0].enclosing_class.as_deref(), Some("Inner"));
    }

    #[test]
    fn test_interface_declaration() {
        let parsed = parse(
            r#"
@RestController
public interface MemberApi {
    @GetMapping("/members")
    List<String> list();
}
"#,
        );
        assert_eq!(parsed.classes[0].name, "MemberApi");
        assert_eq!(parsed.classes[0].methods[0].name, "list");
    }

    #[test]
    fn test_syntax_error_rejected() {
        let result = parse_source(Path::new("Broken.java"), "public class Broken { void m( { }");
        assert!(matches!(result, Err(ScanError::Parse { .. })));
    }

    #[test]
    fn test_unsupported_language() {
        let result = parse_source(Path::new("main.kt"), "class A");
        assert!(matches!(result, Err(ScanError::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").classes.is_empty());
    }
}
