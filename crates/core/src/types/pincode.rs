//! Indian postal code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Pincode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PincodeError {
    /// The input is not exactly 6 characters.
    #[error("pincode must be exactly 6 digits")]
    WrongLength,
    /// The input contains characters other than digits.
    #[error("pincode must contain only digits")]
    NonNumeric,
    /// The first digit is 0, which no postal zone uses.
    #[error("pincode cannot start with 0")]
    LeadingZero,
}

/// An Indian postal index number: exactly 6 digits, first digit 1-9.
///
/// ## Examples
///
/// ```
/// use dandiya_store_core::Pincode;
///
/// assert!(Pincode::parse("400001").is_ok());
/// assert!(Pincode::parse("012345").is_err()); // leading zero
/// assert!(Pincode::parse("4000").is_err()); // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    /// Parse a `Pincode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 6 digits or starts
    /// with 0.
    pub fn parse(s: &str) -> Result<Self, PincodeError> {
        if s.len() != 6 {
            return Err(PincodeError::WrongLength);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PincodeError::NonNumeric);
        }
        if s.starts_with('0') {
            return Err(PincodeError::LeadingZero);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the pincode as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Pincode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Pincode::parse("400001").is_ok());
        assert!(Pincode::parse("110001").is_ok());
        assert!(Pincode::parse("999999").is_ok());
    }

    #[test]
    fn test_parse_leading_zero() {
        assert!(matches!(
            Pincode::parse("012345"),
            Err(PincodeError::LeadingZero)
        ));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(Pincode::parse("4000"), Err(PincodeError::WrongLength)));
        assert!(matches!(
            Pincode::parse("4000011"),
            Err(PincodeError::WrongLength)
        ));
        assert!(matches!(Pincode::parse(""), Err(PincodeError::WrongLength)));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            Pincode::parse("40000a"),
            Err(PincodeError::NonNumeric)
        ));
    }

    #[test]
    fn test_from_str() {
        let pincode: Pincode = "400001".parse().unwrap();
        assert_eq!(pincode.as_str(), "400001");
    }
}
