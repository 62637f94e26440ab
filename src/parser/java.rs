//! Java declaration extraction via AST traversal.
//!
//! Builds the class/method/annotation view the route extractor works on:
//!   @RestController                      -> Annotation { Marker }
//!   @RequestMapping("/members")          -> Annotation { Single("\"/members\"") }
//!   @GetMapping(value = "/p", ...)       -> Annotation { Pairs([("value", "\"/p\""), ..]) }

use tree_sitter::Node;

use crate::routes::types::{Annotation, AnnotationValue, ClassDeclaration, MethodDeclaration};

/// Node kinds treated as class declarations.
const CLASS_KINDS: [&str; 2] = ["class_declaration", "interface_declaration"];

/// Extract every class and interface declaration, nested ones included,
/// in source order.
pub fn extract_classes(root: &Node, source: &[u8]) -> Vec<ClassDeclaration> {
    let mut classes = Vec::new();
    collect_classes(root, source, &mut classes);
    classes
}

fn collect_classes(node: &Node, source: &[u8], classes: &mut Vec<ClassDeclaration>) {
    if CLASS_KINDS.contains(&node.kind()) {
        if let Some(class) = extract_class(node, source) {
            classes.push(class);
        }
    }

    let count = node.child_count();
    for i in 0..count {
        if let Some(child) = node.child(i) {
            collect_classes(&child, source, classes);
        }
    }
}

fn extract_class(node: &Node, source: &[u8]) -> Option<ClassDeclaration> {
    let name = node_text(&node.child_by_field_name("name")?, source)?;

    // Only methods declared directly in this body; nested classes are
    // visited on their own.
    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let count = body.child_count();
        for i in 0..count {
            if let Some(child) = body.child(i) {
                if child.kind() == "method_declaration" {
                    if let Some(method) = extract_method(&child, source) {
                        methods.push(method);
                    }
                }
            }
        }
    }

    Some(ClassDeclaration {
        name,
        annotations: extract_annotations(node, source),
        methods,
        line: node.start_position().row + 1,
    })
}

fn extract_method(node: &Node, source: &[u8]) -> Option<MethodDeclaration> {
    let name = node_text(&node.child_by_field_name("name")?, source)?;

    Some(MethodDeclaration {
        name,
        annotations: extract_annotations(node, source),
        doc_comment: doc_comment(node, source),
        enclosing_class: enclosing_class(node, source),
        line: node.start_position().row + 1,
    })
}

/// Annotations from the declaration's `modifiers` child.
fn extract_annotations(node: &Node, source: &[u8]) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    let count = node.child_count();
    for i in 0..count {
        let Some(child) = node.child(i) else { continue };
        if child.kind() != "modifiers" {
            continue;
        }

        let modifier_count = child.child_count();
        for j in 0..modifier_count {
            if let Some(modifier) = child.child(j) {
                if let Some(annotation) = extract_annotation(&modifier, source) {
                    annotations.push(annotation);
                }
            }
        }
    }

    annotations
}

fn extract_annotation(node: &Node, source: &[u8]) -> Option<Annotation> {
    let value = match node.kind() {
        "marker_annotation" => AnnotationValue::Marker,
        "annotation" => annotation_value(&node.child_by_field_name("arguments")?, source)?,
        _ => return None,
    };
    let name = node_text(&node.child_by_field_name("name")?, source)?;

    Some(Annotation { name, value })
}

/// Classify an `annotation_argument_list`.
///
/// `()` and any list holding `key = value` pairs are the named form; a
/// lone element value is the single-value form.
fn annotation_value(args: &Node, source: &[u8]) -> Option<AnnotationValue> {
    let mut pairs = Vec::new();
    let mut single = None;

    let count = args.child_count();
    for i in 0..count {
        let Some(child) = args.child(i) else { continue };
        if !child.is_named() || child.is_extra() {
            continue;
        }

        if child.kind() == "element_value_pair" {
            let key = node_text(&child.child_by_field_name("key")?, source)?;
            let value = node_text(&child.child_by_field_name("value")?, source)?;
            pairs.push((key, value));
        } else if single.is_none() {
            single = node_text(&child, source);
        }
    }

    match single {
        Some(value) if pairs.is_empty() => Some(AnnotationValue::Single(value)),
        _ => Some(AnnotationValue::Pairs(pairs)),
    }
}

/// The `/** ... */` comment directly preceding a declaration.
fn doc_comment(node: &Node, source: &[u8]) -> Option<String> {
    let prev = node.prev_sibling()?;
    if prev.kind() != "block_comment" {
        return None;
    }

    let text = node_text(&prev, source)?;
    text.starts_with("/**").then_some(text)
}

/// Name of the nearest class or interface declaration above `node`.
fn enclosing_class(node: &Node, source: &[u8]) -> Option<String> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if CLASS_KINDS.contains(&ancestor.kind()) {
            return node_text(&ancestor.child_by_field_name("name")?, source);
        }
        current = ancestor.parent();
    }
    None
}

/// First error or missing node under `node`, if the tree has one.
pub fn first_error<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }

    let count = node.child_count();
    for i in 0..count {
        if let Some(child) = node.child(i) {
            if let Some(found) = first_error(&child) {
                return Some(found);
            }
        }
    }
    None
}

fn node_text(node: &Node, source: &[u8]) -> Option<String> {
    node.utf8_text(source).ok().map(|s| s.to_string())
}
