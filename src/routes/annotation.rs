//! Reading annotation arguments.
//!
//! Absence is never an error here: a missing argument, or a marker
//! annotation, reads as the empty string.

use super::types::{Annotation, AnnotationValue};

/// Read argument `name` from `annotation` with quotes removed.
///
/// A single unnamed value is returned whatever `name` is asked for, since
/// the shorthand form always stands for `value`.
pub fn extract_value(annotation: &Annotation, name: &str) -> String {
    match &annotation.value {
        AnnotationValue::Single(raw) => strip_quotes(raw),
        AnnotationValue::Pairs(pairs) => pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, raw)| strip_quotes(raw))
            .unwrap_or_default(),
        AnnotationValue::Marker => String::new(),
    }
}

/// Raw text of named argument `name`, only for the key/value form.
pub fn named_argument<'a>(annotation: &'a Annotation, name: &str) -> Option<&'a str> {
    match &annotation.value {
        AnnotationValue::Pairs(pairs) => pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, raw)| raw.as_str()),
        AnnotationValue::Single(_) | AnnotationValue::Marker => None,
    }
}

/// Remove every `"` from a literal. Array values like `{"/a", "/b"}`
/// therefore read as `{/a, /b}`.
fn strip_quotes(raw: &str) -> String {
    raw.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_ignores_argument_name() {
        let ann = Annotation::single("GetMapping", "\"/x\"");
        assert_eq!(extract_value(&ann, "value"), "/x");
        assert_eq!(extract_value(&ann, "produces"), "/x");
    }

    #[test]
    fn test_single_and_pairs_agree_on_value() {
        let single = Annotation::single("RequestMapping", "\"/x\"");
        let pairs = Annotation::pairs("RequestMapping", &[("value", "\"/x\"")]);
        assert_eq!(extract_value(&single, "value"), "/x");
        assert_eq!(extract_value(&pairs, "value"), "/x");
    }

    #[test]
    fn test_missing_pair_is_empty() {
        let ann = Annotation::pairs("RequestMapping", &[("path", "\"/x\"")]);
        assert_eq!(extract_value(&ann, "value"), "");
    }

    #[test]
    fn test_first_matching_pair_wins() {
        let ann = Annotation::pairs(
            "RequestMapping",
            &[("value", "\"/first\""), ("value", "\"/second\"")],
        );
        assert_eq!(extract_value(&ann, "value"), "/first");
    }

    #[test]
    fn test_marker_is_empty() {
        let ann = Annotation::marker("GetMapping");
        assert_eq!(extract_value(&ann, "value"), "");
    }

    #[test]
    fn test_all_quotes_removed() {
        let ann = Annotation::single("GetMapping", "{\"/a\", \"/b\"}");
        assert_eq!(extract_value(&ann, "value"), "{/a, /b}");
    }

    #[test]
    fn test_named_argument_is_raw() {
        let ann = Annotation::pairs(
            "RequestMapping",
            &[("value", "\"/x\""), ("method", "RequestMethod.POST")],
        );
        assert_eq!(named_argument(&ann, "method"), Some("RequestMethod.POST"));
        assert_eq!(named_argument(&ann, "value"), Some("\"/x\""));
        assert_eq!(named_argument(&ann, "consumes"), None);

        let single = Annotation::single("RequestMapping", "\"/GET\"");
        assert_eq!(named_argument(&single, "method"), None);
    }
}
