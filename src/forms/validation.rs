//! Form sanitizing and validation
//!
//! Each catalog form is a plain struct built from a [`SubmittedForm`] with
//! every value already trimmed and HTML-escaped. Required fields are declared
//! with `validator` attributes; [`validate`] flattens the result into
//! [`FormErrors`], ordered the way the form declares its fields.

use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use super::SubmittedForm;

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of failed rules; empty means the form is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Whether any rule failed for `field`
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl<'a> IntoIterator for &'a FormErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A form posted to one of the create/update handlers
pub trait CatalogForm: Validate + Sized {
    /// Field names in declaration order; errors are reported in this order.
    const FIELDS: &'static [&'static str];

    /// Build the form from the request body, sanitizing every value.
    fn from_submitted(form: &SubmittedForm) -> Self;

    /// Rules beyond "must not be empty" (ids, dates, enumerations)
    fn check_values(&self, _errors: &mut FormErrors) {}
}

/// Run every declared rule against an already sanitized form.
pub fn validate<F: CatalogForm>(form: &F) -> FormErrors {
    let mut collected: Vec<FieldError> = Vec::new();

    if let Err(failed) = form.validate() {
        let by_field = failed.field_errors();
        for field in F::FIELDS {
            if let Some(errors) = by_field.get(*field) {
                collected.extend(errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                }));
            }
        }
    }

    let mut extra = FormErrors::new();
    form.check_values(&mut extra);
    collected.extend(extra.0);

    // Stable: rules on the same field keep their relative order.
    collected.sort_by_key(|e| {
        F::FIELDS
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(F::FIELDS.len())
    });

    FormErrors(collected)
}

/// Trim surrounding whitespace and HTML-escape the rest.
pub fn sanitize(value: &str) -> String {
    escape(value.trim())
}

/// Replace the characters that are significant in HTML with entities.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Empty input means "no date"; anything else must be `YYYY-MM-DD`.
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct PersonForm {
        #[validate(length(min = 1, message = "Name must not be empty."))]
        name: String,
        #[validate(length(min = 1, message = "City must not be empty."))]
        city: String,
        born: String,
    }

    impl CatalogForm for PersonForm {
        const FIELDS: &'static [&'static str] = &["name", "born", "city"];

        fn from_submitted(form: &SubmittedForm) -> Self {
            Self {
                name: form.text("name"),
                city: form.text("city"),
                born: form.text("born"),
            }
        }

        fn check_values(&self, errors: &mut FormErrors) {
            if parse_optional_date(&self.born).is_err() {
                errors.push("born", "Invalid date.");
            }
        }
    }

    fn submitted(pairs: &[(&str, &str)]) -> SubmittedForm {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn escape_replaces_html_significant_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;&#x2F;a&gt;"
        );
        assert_eq!(escape(r"C:\dir `cmd`"), "C:&#x5C;dir &#96;cmd&#96;");
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn sanitize_trims_before_escaping() {
        assert_eq!(sanitize("  <i>  "), "&lt;i&gt;");
        assert_eq!(sanitize(" \t\n "), "");
    }

    #[test]
    fn whitespace_only_required_fields_fail() {
        let form = PersonForm::from_submitted(&submitted(&[("name", "   "), ("city", "Paris")]));
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors.has("name"));
        assert_eq!(errors.iter().next().unwrap().message, "Name must not be empty.");
    }

    #[test]
    fn errors_follow_declared_field_order() {
        let form = PersonForm::from_submitted(&submitted(&[("born", "yesterday")]));
        let fields: Vec<_> = validate(&form).iter().map(|e| e.field.clone()).collect();
        assert_eq!(fields, vec!["name", "born", "city"]);
    }

    #[test]
    fn valid_form_has_no_errors() {
        let form = PersonForm::from_submitted(&submitted(&[
            ("name", "Ada"),
            ("city", "London"),
            ("born", "1815-12-10"),
        ]));
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn optional_date_accepts_empty_and_iso() {
        assert_eq!(parse_optional_date("").unwrap(), None);
        assert_eq!(
            parse_optional_date("1920-01-02").unwrap(),
            NaiveDate::from_ymd_opt(1920, 1, 2)
        );
        assert!(parse_optional_date("02/01/1920").is_err());
    }
}
