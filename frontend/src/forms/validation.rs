use once_cell::sync::Lazy;
use regex::Regex;

/// Something before an `@`, something after it, and a dot in the domain part.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Optional leading `+`, then at least 10 of digits, spaces, hyphens or parentheses.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()-]{10,}$").expect("phone pattern compiles"));

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_PHONE: &str = "Please enter a valid phone number";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Phone,
}

impl FieldKind {
    /// Blur-time check for a single input. Blank values are left alone.
    pub fn check(self, raw: &str) -> Option<&'static str> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        match self {
            FieldKind::Email if !is_valid_email(value) => Some(INVALID_EMAIL),
            FieldKind::Phone if !is_valid_phone(value) => Some(INVALID_PHONE),
            _ => None,
        }
    }
}
