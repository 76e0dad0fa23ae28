//! Required-field and pattern validation for contact forms.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fields that take part in validation, on blur and on submit.
pub const REQUIRED_FIELD_SELECTOR: &str =
    "input[required], textarea[required], select[required]";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+()\-]+$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Telephone,
    Other,
}

impl FieldKind {
    /// Maps an `<input type=...>` value; textareas and selects are `Other`.
    pub fn from_input_type(ty: &str) -> Self {
        match ty.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Telephone,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSnapshot<'a> {
    pub required: bool,
    pub kind: FieldKind,
    pub value: &'a str,
}

impl FieldSnapshot<'static> {
    /// An element that is not a form control: no value, no type, never required.
    pub fn valueless() -> Self {
        FieldSnapshot {
            required: false,
            kind: FieldKind::Other,
            value: "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMarker {
    Valid,
    Error,
}

impl FieldMarker {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            FieldMarker::Valid
        } else {
            FieldMarker::Error
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FieldMarker::Valid => "input-valid",
            FieldMarker::Error => "input-error",
        }
    }

    /// The marker that must be removed when this one is applied.
    pub fn opposite(self) -> Self {
        match self {
            FieldMarker::Valid => FieldMarker::Error,
            FieldMarker::Error => FieldMarker::Valid,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Required-and-blank wins over any pattern check; pattern checks only apply
/// to non-empty values, so an optional empty email is valid.
pub fn validate(field: &FieldSnapshot<'_>) -> bool {
    if field.required && field.value.trim().is_empty() {
        return false;
    }
    if field.value.is_empty() {
        return true;
    }
    match field.kind {
        FieldKind::Email => is_valid_email(field.value),
        FieldKind::Telephone => is_valid_phone(field.value),
        FieldKind::Other => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(required: bool, kind: FieldKind, value: &str) -> FieldSnapshot<'_> {
        FieldSnapshot {
            required,
            kind,
            value,
        }
    }

    #[test]
    fn blank_required_fields_fail() {
        for v in ["", "   ", "\t\n"] {
            assert!(!validate(&field(true, FieldKind::Other, v)));
            assert!(!validate(&field(true, FieldKind::Email, v)));
        }
        assert!(validate(&field(false, FieldKind::Other, "")));
    }

    #[test]
    fn email_shape() {
        assert!(validate(&field(true, FieldKind::Email, "user@example.com")));
        assert!(!validate(&field(true, FieldKind::Email, "user@@bad")));
        assert!(!validate(&field(true, FieldKind::Email, "user@")));
        assert!(!validate(&field(true, FieldKind::Email, "user@example")));
        assert!(!validate(&field(true, FieldKind::Email, "us er@example.com")));
        assert!(validate(&field(false, FieldKind::Email, "")));
    }

    #[test]
    fn phone_charset() {
        assert!(validate(&field(true, FieldKind::Telephone, "+1 (555) 123-4567")));
        assert!(!validate(&field(true, FieldKind::Telephone, "abc-123")));
        assert!(!validate(&field(false, FieldKind::Telephone, "555 ext. 4")));
    }

    #[test]
    fn input_types_map_to_kinds() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("TEL"), FieldKind::Telephone);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Other);
    }

    #[test]
    fn markers_are_mutually_exclusive() {
        let m = FieldMarker::from_valid(false);
        assert_eq!(m.class(), "input-error");
        assert_eq!(m.opposite().class(), "input-valid");
        assert_ne!(m.class(), m.opposite().class());
    }

    #[test]
    fn non_controls_validate_as_valid() {
        let ok = validate(&FieldSnapshot::valueless());
        assert!(ok);
        assert_eq!(FieldMarker::from_valid(ok).class(), "input-valid");
    }
}
