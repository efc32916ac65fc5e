//! Customer identity types.
//!
//! These cover the lightweight login flow: a name plus a 10-digit mobile
//! number, cached locally to personalize the greeting. Nothing here is
//! checked against any identity authority.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`MobileNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum MobileNumberError {
    /// The input is not exactly 10 characters.
    #[error("mobile number must be exactly 10 digits")]
    WrongLength,
    /// The input contains characters other than digits.
    #[error("mobile number must contain only digits")]
    NonNumeric,
}

/// A bare 10-digit mobile number, as captured by the login form.
///
/// Unlike [`PhoneNumber`](crate::PhoneNumber) this accepts no country code
/// or trunk prefix and places no constraint on the leading digit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Parse a `MobileNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 10 digits.
    pub fn parse(s: &str) -> Result<Self, MobileNumberError> {
        if s.len() != 10 {
            return Err(MobileNumberError::WrongLength);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MobileNumberError::NonNumeric);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the mobile number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MobileNumber {
    type Err = MobileNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Locally cached customer identity.
///
/// Persisted independently of the cart and survives cart clears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Customer display name.
    pub name: String,
    /// 10-digit mobile number.
    pub mobile: MobileNumber,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(MobileNumber::parse("9876543210").is_ok());
        // No leading-digit rule here, unlike the checkout phone field.
        assert!(MobileNumber::parse("1234567890").is_ok());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            MobileNumber::parse("987654321"),
            Err(MobileNumberError::WrongLength)
        ));
        assert!(matches!(
            MobileNumber::parse("98765432101"),
            Err(MobileNumberError::WrongLength)
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            MobileNumber::parse("98765abcde"),
            Err(MobileNumberError::NonNumeric)
        ));
        assert!(matches!(
            MobileNumber::parse("+919876543"),
            Err(MobileNumberError::NonNumeric)
        ));
    }

    #[test]
    fn test_customer_info_serde_roundtrip() {
        let info = CustomerInfo {
            name: "Asha".to_string(),
            mobile: MobileNumber::parse("9876543210").unwrap(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"name":"Asha","mobile":"9876543210"}"#);

        let parsed: CustomerInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
