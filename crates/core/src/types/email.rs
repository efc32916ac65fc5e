//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input contains whitespace.
    #[error("email cannot contain whitespace")]
    ContainsWhitespace,
    /// The input does not contain exactly one @ symbol.
    #[error("email must contain exactly one @ symbol")]
    InvalidAtSymbol,
    /// The local part (before @) is empty.
    #[error("email local part cannot be empty")]
    EmptyLocalPart,
    /// The domain part (after @) has no dot-separated label.
    #[error("email domain must contain a dot-separated label")]
    InvalidDomain,
}

/// An email address.
///
/// Accepts the `local@domain.tld` shape: a non-empty local part, then a
/// domain with at least one interior dot. No whitespace anywhere.
///
/// ## Examples
///
/// ```
/// use dandiya_store_core::Email;
///
/// assert!(Email::parse("abc@xyz.com").is_ok());
/// assert!(Email::parse("abc@xyz").is_err()); // no dotted label
/// assert!(Email::parse("@xyz.com").is_err()); // empty local part
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains whitespace, does
    /// not have exactly one @ symbol, has an empty local part, or has a
    /// domain without an interior dot.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if s.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }

        let mut parts = s.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EmailError::InvalidAtSymbol);
        };

        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }

        // The domain needs a dot that is neither its first nor last byte,
        // so "xyz", ".com", and "xyz." are all rejected.
        let has_interior_dot = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1);
        if !has_interior_dot {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("abc@xyz.com").is_ok());
        assert!(Email::parse("user.name@example.com").is_ok());
        assert!(Email::parse("user+tag@example.co.uk").is_ok());
        assert!(Email::parse("a@b.c").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Email::parse(""), Err(EmailError::Empty)));
    }

    #[test]
    fn test_parse_whitespace() {
        assert!(matches!(
            Email::parse("a b@xyz.com"),
            Err(EmailError::ContainsWhitespace)
        ));
    }

    #[test]
    fn test_parse_missing_at() {
        assert!(matches!(
            Email::parse("no-at-symbol.com"),
            Err(EmailError::InvalidAtSymbol)
        ));
    }

    #[test]
    fn test_parse_multiple_at() {
        assert!(matches!(
            Email::parse("a@b@c.com"),
            Err(EmailError::InvalidAtSymbol)
        ));
    }

    #[test]
    fn test_parse_empty_local_part() {
        assert!(matches!(
            Email::parse("@xyz.com"),
            Err(EmailError::EmptyLocalPart)
        ));
    }

    #[test]
    fn test_parse_undotted_domain() {
        assert!(matches!(
            Email::parse("abc@xyz"),
            Err(EmailError::InvalidDomain)
        ));
    }

    #[test]
    fn test_parse_dot_at_domain_edge() {
        assert!(Email::parse("abc@.com").is_err());
        assert!(Email::parse("abc@xyz.").is_err());
    }

    #[test]
    fn test_display() {
        let email = Email::parse("abc@xyz.com").unwrap();
        assert_eq!(format!("{email}"), "abc@xyz.com");
    }

    #[test]
    fn test_serde_roundtrip() {
        let email = Email::parse("abc@xyz.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"abc@xyz.com\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_from_str() {
        let email: Email = "abc@xyz.com".parse().unwrap();
        assert_eq!(email.as_str(), "abc@xyz.com");
    }
}
