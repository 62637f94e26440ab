//! One-line descriptions from method doc comments.

use super::types::MethodDeclaration;

/// Description text of the method's doc comment, or empty if it has none.
pub fn describe(method: &MethodDeclaration) -> String {
    method
        .doc_comment
        .as_deref()
        .map(doc_description)
        .unwrap_or_default()
}

/// Free text of a `/** ... */` comment up to its first block tag.
///
/// Inline tags such as `{@link Foo}` stay in the text. Lines are joined
/// with `\n`.
pub fn doc_description(comment: &str) -> String {
    let lines = clean_lines(strip_delimiters(comment));
    let end = lines
        .iter()
        .position(|line| line.trim_start().starts_with('@'))
        .unwrap_or(lines.len());

    lines[..end].join("\n").trim_end().to_string()
}

fn strip_delimiters(comment: &str) -> &str {
    let body = comment.trim();
    let body = body.strip_prefix("/**").unwrap_or(body);
    body.strip_suffix("*/").unwrap_or(body)
}

fn clean_lines(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = body
        .lines()
        .map(strip_line_prefix)
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line.to_string()
            }
        })
        .collect();

    if let Some(first) = lines.first_mut() {
        if first.starts_with(|c: char| c == ' ' || c == '\t') {
            first.remove(0);
        }
    }

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines.drain(end..);
    lines.drain(..start);
    lines
}

/// `   * text` -> `text`. Lines without a leading `*` are kept as is.
fn strip_line_prefix(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest
            .strip_prefix(' ')
            .or_else(|| rest.strip_prefix('\t'))
            .unwrap_or(rest),
        None => line,
    }
}
