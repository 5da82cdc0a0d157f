//! Customer phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input is not exactly ten ASCII digits.
    #[error("phone number must be exactly 10 digits")]
    NotTenDigits,
}

/// A customer phone number: exactly ten ASCII digits, no separators.
///
/// ## Examples
///
/// ```
/// use shopdesk_core::Phone;
///
/// assert!(Phone::parse("0123456789").is_ok());
/// assert!(Phone::parse("012345678").is_err());   // too short
/// assert!(Phone::parse("01234567890").is_err()); // too long
/// assert!(Phone::parse("012-345-678").is_err()); // separators
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Number of digits in a valid phone number.
    pub const LENGTH: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::NotTenDigits`] unless the input is exactly ten
    /// ASCII digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.len() != Self::LENGTH || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NotTenDigits);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let phone = Phone::parse("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(Phone::parse("123456789"), Err(PhoneError::NotTenDigits));
        assert_eq!(Phone::parse("12345678901"), Err(PhoneError::NotTenDigits));
        assert_eq!(Phone::parse(""), Err(PhoneError::NotTenDigits));
    }

    #[test]
    fn test_parse_non_digits() {
        assert_eq!(Phone::parse("12345abcde"), Err(PhoneError::NotTenDigits));
        assert_eq!(Phone::parse("123-456-78"), Err(PhoneError::NotTenDigits));
        // Unicode digits outside ASCII are rejected
        assert_eq!(Phone::parse("١٢٣٤٥٦٧٨٩٠"), Err(PhoneError::NotTenDigits));
    }
}
