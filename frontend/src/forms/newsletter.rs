use thiserror::Error;

use crate::components::notification::Notice;
use crate::forms::validation::is_valid_email;

pub const SUBSCRIBED: &str = "Thank you for subscribing to our health newsletter!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("Please enter your email address")]
    Blank,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Returns the trimmed address when it is acceptable.
pub fn subscribe(raw: &str) -> Result<String, NewsletterError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(NewsletterError::Blank);
    }
    if !is_valid_email(email) {
        return Err(NewsletterError::InvalidEmail);
    }
    Ok(email.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionOutcome {
    pub notice: Notice,
    pub clear_input: bool,
    pub email: Option<String>,
}

pub fn handle(raw: &str) -> SubscriptionOutcome {
    match subscribe(raw) {
        Ok(email) => SubscriptionOutcome {
            notice: Notice::success(SUBSCRIBED),
            clear_input: true,
            email: Some(email),
        },
        Err(e) => SubscriptionOutcome {
            notice: Notice::error(e.to_string()),
            clear_input: false,
            email: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::INVALID_EMAIL;

    #[test]
    fn blank_input_asks_for_address() {
        assert_eq!(subscribe("  "), Err(NewsletterError::Blank));
        let outcome = handle("");
        assert_eq!(outcome.notice, Notice::error("Please enter your email address"));
        assert!(!outcome.clear_input);
    }

    #[test]
    fn malformed_address_rejected() {
        assert_eq!(subscribe("reader@clinic"), Err(NewsletterError::InvalidEmail));
        assert_eq!(handle("reader@").notice.message, INVALID_EMAIL);
    }

    #[test]
    fn valid_address_is_trimmed_and_clears_input() {
        let outcome = handle("  reader@clinic.org ");
        assert_eq!(outcome.notice, Notice::success(SUBSCRIBED));
        assert!(outcome.clear_input);
        assert_eq!(outcome.email.as_deref(), Some("reader@clinic.org"));
    }
}
