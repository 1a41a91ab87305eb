use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please enter your email address.")]
    Empty,
    #[error("{0} doesn't look like a valid email address.")]
    InvalidFormat(String),
}

/// Canonical form used for both storage and duplicate checks.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized address that passed the basic format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupEmail(String);

impl SignupEmail {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let email = normalize(raw);
        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        if !email.validate_email() {
            return Err(EmailError::InvalidFormat(email));
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignupEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, EmailError, SignupEmail};
    use claims::{assert_err, assert_ok};

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  User@Example.COM \n"), "user@example.com");
    }

    #[test]
    fn mixed_case_email_is_parsed_into_lowercase() {
        let email = assert_ok!(SignupEmail::parse("User@Example.COM"));
        assert_eq!(email.as_ref(), "user@example.com");
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert_eq!(SignupEmail::parse("   "), Err(EmailError::Empty));
        assert_eq!(SignupEmail::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn missing_at_symbol_is_rejected() {
        assert_err!(SignupEmail::parse("athlete.example.com"));
    }

    #[test]
    fn missing_domain_is_rejected() {
        assert_err!(SignupEmail::parse("athlete@"));
    }

    #[test]
    fn missing_local_part_is_rejected() {
        assert_err!(SignupEmail::parse("@example.com"));
    }

    #[test]
    fn invalid_format_error_carries_the_normalized_input() {
        assert_eq!(
            SignupEmail::parse(" NOT-AN-EMAIL "),
            Err(EmailError::InvalidFormat("not-an-email".to_string()))
        );
    }
}
