use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldIssue, ValidationErrors};

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+\d{1,3}-\d{3}-\d{3}-\d{4}$").expect("phone pattern should compile")
});

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile"));

pub(crate) fn issue(field: &str, message: impl Into<String>) -> FieldIssue {
    FieldIssue {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Record a required-field issue when the value is blank. Returns whether
/// the value was present, so format checks can be skipped on absence.
pub(crate) fn require_text(
    issues: &mut Vec<FieldIssue>,
    field: &str,
    value: &str,
    message: &str,
) -> bool {
    if value.trim().is_empty() {
        issues.push(issue(field, message));
        return false;
    }
    true
}

/// Required presence plus the `+1-123-456-7890` shape, shared by the
/// personal-info and emergency-contact schemas.
pub(crate) fn check_phone(issues: &mut Vec<FieldIssue>, field: &str, value: &str) {
    if require_text(issues, field, value, "Phone number is required") && !PHONE_PATTERN.is_match(value)
    {
        issues.push(issue(
            field,
            "Phone number must be in format +1-123-456-7890",
        ));
    }
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub(crate) fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub(crate) fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Re-root a step's issues under its slot key for the combined schema.
pub(crate) fn collect_prefixed(
    issues: &mut Vec<FieldIssue>,
    slot_key: &str,
    errors: ValidationErrors,
) {
    issues.extend(errors.issues.into_iter().map(|entry| FieldIssue {
        field: format!("{slot_key}.{}", entry.field),
        message: entry.message,
    }));
}
