//! Indian mobile phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input starts with a country code other than +91.
    #[error("only the +91 country code is supported")]
    InvalidCountryCode,
    /// The input contains characters other than digits.
    #[error("phone number must contain only digits")]
    NonNumeric,
    /// The subscriber number is not 10 digits starting with 7, 8, or 9.
    #[error("subscriber number must be 10 digits starting with 7, 8, or 9")]
    InvalidSubscriber,
}

/// An Indian mobile phone number.
///
/// Internal whitespace is stripped before matching. The number may carry an
/// optional `+91` country code (with an optional dash after it), an
/// optional `0` trunk prefix, and an optional bare `91` prefix; what
/// remains must be a 10-digit subscriber number starting with 7, 8, or 9.
///
/// ## Examples
///
/// ```
/// use dandiya_store_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("9876543210").is_ok());
/// assert!(PhoneNumber::parse("+91-98765 43210").is_ok());
/// assert!(PhoneNumber::parse("09876543210").is_ok());
/// assert!(PhoneNumber::parse("1234567890").is_err()); // leading digit not 7/8/9
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input (after stripping whitespace) is empty,
    /// carries a country code other than +91, contains non-digit
    /// characters, or does not end in a valid 10-digit subscriber number.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let rest = match stripped.strip_prefix("+91") {
            Some(r) => r.strip_prefix('-').unwrap_or(r),
            None if stripped.starts_with('+') => {
                return Err(PhoneNumberError::InvalidCountryCode);
            }
            None => stripped.as_str(),
        };

        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneNumberError::NonNumeric);
        }

        // A leading "91" can be either a prefix or the start of the
        // subscriber number itself ("9198765432"), so both readings are
        // tried. The trunk "0" comes before a "91" prefix when present.
        let mut candidates = vec![rest];
        if let Some(r) = rest.strip_prefix('0') {
            candidates.push(r);
            if let Some(r) = r.strip_prefix("91") {
                candidates.push(r);
            }
        }
        if let Some(r) = rest.strip_prefix("91") {
            candidates.push(r);
        }

        if candidates.into_iter().any(is_subscriber_number) {
            Ok(Self(stripped))
        } else {
            Err(PhoneNumberError::InvalidSubscriber)
        }
    }

    /// Returns the phone number as entered, minus whitespace.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 10-digit subscriber number without any prefix.
    #[must_use]
    pub fn subscriber_number(&self) -> &str {
        // The subscriber number is always the last 10 characters and the
        // stored string is pure ASCII.
        self.0.get(self.0.len() - 10..).unwrap_or(&self.0)
    }
}

/// Whether `s` is exactly 10 digits starting with 7, 8, or 9.
fn is_subscriber_number(s: &str) -> bool {
    s.len() == 10
        && s.bytes().all(|b| b.is_ascii_digit())
        && matches!(s.bytes().next(), Some(b'7' | b'8' | b'9'))
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_subscriber() {
        assert!(PhoneNumber::parse("9876543210").is_ok());
        assert!(PhoneNumber::parse("7000000001").is_ok());
        assert!(PhoneNumber::parse("8123456789").is_ok());
    }

    #[test]
    fn test_parse_with_prefixes() {
        assert!(PhoneNumber::parse("+919876543210").is_ok());
        assert!(PhoneNumber::parse("+91-9876543210").is_ok());
        assert!(PhoneNumber::parse("09876543210").is_ok());
        assert!(PhoneNumber::parse("919876543210").is_ok());
        assert!(PhoneNumber::parse("0919876543210").is_ok());
    }

    #[test]
    fn test_parse_strips_whitespace() {
        assert!(PhoneNumber::parse("+91 98765 43210").is_ok());
        assert!(PhoneNumber::parse("98765 43210").is_ok());
    }

    #[test]
    fn test_parse_leading_91_subscriber() {
        // 10 digits starting with 9 where the next digit is 1 - the "91"
        // here is part of the subscriber number, not a prefix.
        assert!(PhoneNumber::parse("9198765432").is_ok());
    }

    #[test]
    fn test_parse_bad_leading_digit() {
        assert!(matches!(
            PhoneNumber::parse("1234567890"),
            Err(PhoneNumberError::InvalidSubscriber)
        ));
        assert!(matches!(
            PhoneNumber::parse("6876543210"),
            Err(PhoneNumberError::InvalidSubscriber)
        ));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(PhoneNumber::parse("987654321").is_err());
        assert!(PhoneNumber::parse("98765432101").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty)));
        assert!(matches!(PhoneNumber::parse("   "), Err(PhoneNumberError::Empty)));
    }

    #[test]
    fn test_parse_bad_country_code() {
        assert!(matches!(
            PhoneNumber::parse("+449876543210"),
            Err(PhoneNumberError::InvalidCountryCode)
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            PhoneNumber::parse("98765abcde"),
            Err(PhoneNumberError::NonNumeric)
        ));
    }

    #[test]
    fn test_subscriber_number() {
        let phone = PhoneNumber::parse("+91-98765 43210").unwrap();
        assert_eq!(phone.subscriber_number(), "9876543210");

        let phone = PhoneNumber::parse("09876543210").unwrap();
        assert_eq!(phone.subscriber_number(), "9876543210");
    }

    #[test]
    fn test_display_strips_whitespace_only() {
        let phone = PhoneNumber::parse("+91 9876543210").unwrap();
        assert_eq!(format!("{phone}"), "+919876543210");
    }
}
