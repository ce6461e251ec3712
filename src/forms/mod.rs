//! Submitted HTML form handling
//!
//! Browsers post `application/x-www-form-urlencoded` bodies in which a
//! field can be missing, appear once, or repeat (multi-selects and
//! checkbox groups). [`SubmittedForm`] keeps the raw pairs so that every
//! handler sees the same view of the body, and hands out sanitized values.

pub mod validation;

use serde::Deserialize;

pub use validation::{sanitize, validate, CatalogForm, FieldError, FormErrors};

/// Raw value of one field as it appeared in the request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Single(String),
    List(Vec<String>),
}

/// Coerce a possibly missing or scalar multi-value field into a list.
pub fn normalize(value: FieldValue) -> Vec<String> {
    match value {
        FieldValue::Absent => Vec::new(),
        FieldValue::Single(value) => vec![value],
        FieldValue::List(values) => values,
    }
}

/// URL-encoded form body, in submission order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct SubmittedForm {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for SubmittedForm {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl SubmittedForm {
    /// The field exactly as submitted, before any sanitizing
    pub fn raw(&self, name: &str) -> FieldValue {
        let mut values: Vec<String> = self
            .pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect();

        match values.len() {
            0 => FieldValue::Absent,
            1 => FieldValue::Single(values.remove(0)),
            _ => FieldValue::List(values),
        }
    }

    /// Sanitized single value; the first one wins when a scalar field repeats.
    pub fn text(&self, name: &str) -> String {
        match self.raw(name) {
            FieldValue::Absent => String::new(),
            FieldValue::Single(value) => sanitize(&value),
            FieldValue::List(values) => values.first().map(|v| sanitize(v)).unwrap_or_default(),
        }
    }

    /// Sanitized multi-value field, always a list
    pub fn list(&self, name: &str) -> Vec<String> {
        normalize(self.raw(name))
            .iter()
            .map(|value| sanitize(value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> SubmittedForm {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn normalize_absent_is_empty() {
        assert!(normalize(FieldValue::Absent).is_empty());
    }

    #[test]
    fn normalize_scalar_is_single_element() {
        assert_eq!(normalize(FieldValue::Single("x".into())), vec!["x".to_string()]);
    }

    #[test]
    fn normalize_list_is_unchanged() {
        let values = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(normalize(FieldValue::List(values.clone())), values);
    }

    #[test]
    fn raw_distinguishes_absent_single_and_repeated_fields() {
        let submitted = form(&[("genre", "1"), ("title", "Dune"), ("genre", "2")]);
        assert_eq!(submitted.raw("missing"), FieldValue::Absent);
        assert_eq!(submitted.raw("title"), FieldValue::Single("Dune".into()));
        assert_eq!(
            submitted.raw("genre"),
            FieldValue::List(vec!["1".into(), "2".into()])
        );
    }

    #[test]
    fn list_sanitizes_every_value() {
        let submitted = form(&[("genre", " <b> ")]);
        assert_eq!(submitted.list("genre"), vec!["&lt;b&gt;".to_string()]);
        assert!(submitted.list("other").is_empty());
    }

    #[test]
    fn text_trims_and_defaults_to_empty() {
        let submitted = form(&[("title", "  Dune  ")]);
        assert_eq!(submitted.text("title"), "Dune");
        assert_eq!(submitted.text("summary"), "");
    }
}
