//! Field and form validation.
//!
//! Rules run in a fixed order and the first failure wins: required, email
//! shape, phone shape, minimum length.

use nas_types::FieldKind;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

pub const ERROR_CLASS: &str = "error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const ERROR_MESSAGE_STYLE: [(&str, &str); 3] = [
    ("color", "#e74c3c"),
    ("font-size", "0.875rem"),
    ("margin-top", "0.25rem"),
];

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+\-()]+$").expect("phone pattern"));

const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Minimum {min} characters required")]
    TooShort { min: usize },
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_CHARS.is_match(value)
        && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// A form control as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Trimmed value.
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
}

impl FieldSpec {
    /// Builds a spec from raw attribute values. An unparsable `minlength`
    /// is treated as absent.
    pub fn from_attributes(value: &str, required: bool, input_type: &str, minlength: Option<&str>) -> Self {
        Self {
            value: value.trim().to_owned(),
            required,
            kind: FieldKind::from_input_type(input_type),
            min_length: minlength.and_then(|raw| raw.trim().parse().ok()),
        }
    }
}

pub fn validate_field(field: &FieldSpec) -> Result<(), ValidationError> {
    let value = field.value.as_str();
    if field.required && value.is_empty() {
        return Err(ValidationError::Required);
    }
    if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }
    if field.kind == FieldKind::Tel && !value.is_empty() && !is_valid_phone(value) {
        return Err(ValidationError::InvalidPhone);
    }
    if let Some(min) = field.min_length {
        if value.chars().count() < min {
            return Err(ValidationError::TooShort { min });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValidity {
    #[default]
    Unvalidated,
    Valid,
    Invalid(ValidationError),
}

impl FieldValidity {
    pub fn of(field: &FieldSpec) -> FieldValidity {
        match validate_field(field) {
            Ok(()) => FieldValidity::Valid,
            Err(err) => FieldValidity::Invalid(err),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValidity::Invalid(_))
    }

    /// Value for the control's `aria-invalid` attribute.
    pub fn aria_invalid(&self) -> Option<&'static str> {
        match self {
            FieldValidity::Unvalidated => None,
            FieldValidity::Valid => Some("false"),
            FieldValidity::Invalid(_) => Some("true"),
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldValidity::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub name: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub valid: bool,
    pub fields: Vec<FieldReport>,
}

/// Submit-time validation: every required field is checked, none is
/// skipped after the first failure.
pub fn validate_form<'a, I>(fields: I) -> FormReport
where
    I: IntoIterator<Item = (&'a str, &'a FieldSpec)>,
{
    let fields: Vec<FieldReport> = fields
        .into_iter()
        .filter(|(_, spec)| spec.required)
        .map(|(name, spec)| FieldReport {
            name: name.to_owned(),
            error: validate_field(spec).err().map(|err| err.to_string()),
        })
        .collect();
    FormReport {
        valid: fields.iter().all(|field| field.error.is_none()),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: &str, required: bool, input_type: &str, minlength: Option<&str>) -> FieldSpec {
        FieldSpec::from_attributes(value, required, input_type, minlength)
    }

    #[test]
    fn empty_required_field_is_required() {
        let err = validate_field(&field("", true, "text", None)).unwrap_err();
        assert_eq!(err, ValidationError::Required);
        assert_eq!(err.to_string(), "This field is required");

        let blank = validate_field(&field("   ", true, "email", Some("3"))).unwrap_err();
        assert_eq!(blank, ValidationError::Required);
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert_eq!(
            validate_field(&field("a@b", true, "email", None)),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_field(&field("a@b.com", true, "email", None)), Ok(()));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn phone_needs_ten_digits_and_clean_characters() {
        assert_eq!(
            validate_field(&field("123", true, "tel", None)),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(validate_field(&field("(555) 123-4567", true, "tel", None)), Ok(()));
        assert_eq!(validate_field(&field("+1 555 123 4567", false, "tel", None)), Ok(()));
        assert!(!is_valid_phone("555-123-4567 ext"));
    }

    #[test]
    fn optional_empty_email_skips_the_format_check() {
        assert_eq!(validate_field(&field("", false, "email", None)), Ok(()));
        assert_eq!(validate_field(&field("", false, "tel", None)), Ok(()));
    }

    #[test]
    fn min_length_substitutes_the_count() {
        let err = validate_field(&field("hi", true, "text", Some("10"))).unwrap_err();
        assert_eq!(err, ValidationError::TooShort { min: 10 });
        assert_eq!(err.to_string(), "Minimum 10 characters required");
        assert_eq!(validate_field(&field("long enough", true, "text", Some("10"))), Ok(()));
    }

    #[test]
    fn format_errors_win_over_length() {
        let err = validate_field(&field("x@y", true, "email", Some("20"))).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn garbage_minlength_is_ignored() {
        assert_eq!(validate_field(&field("a", true, "text", Some("lots"))), Ok(()));
    }

    #[test]
    fn validity_maps_to_aria_invalid() {
        assert_eq!(FieldValidity::Unvalidated.aria_invalid(), None);
        assert_eq!(FieldValidity::Valid.aria_invalid(), Some("false"));
        let invalid = FieldValidity::of(&field("", true, "text", None));
        assert!(invalid.is_invalid());
        assert_eq!(invalid.aria_invalid(), Some("true"));
        assert_eq!(invalid.error(), Some(&ValidationError::Required));
    }

    #[test]
    fn form_report_checks_every_required_field() -> anyhow::Result<()> {
        let name = field("", true, "text", None);
        let email = field("nope", true, "email", None);
        let notes = field("", false, "textarea", None);
        let report = validate_form([("name", &name), ("email", &email), ("notes", &notes)]);

        assert!(!report.valid);
        assert_eq!(report.fields.len(), 2);
        assert_eq!(report.fields[0].error.as_deref(), Some("This field is required"));
        assert_eq!(
            report.fields[1].error.as_deref(),
            Some("Please enter a valid email address")
        );

        let json = serde_json::to_value(&report)?;
        assert_eq!(json["valid"], false);
        assert_eq!(json["fields"][0]["name"], "name");
        Ok(())
    }

    #[test]
    fn form_with_valid_required_fields_passes() {
        let name = field("Ada", true, "text", Some("2"));
        let phone = field("(555) 123-4567", true, "tel", None);
        assert!(validate_form([("name", &name), ("phone", &phone)]).valid);
    }
}
