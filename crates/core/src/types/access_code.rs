//! Admin access code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`AccessCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessCodeError {
    /// The input is empty or does not begin with an ASCII digit.
    #[error("access code must start with a number")]
    MustStartWithDigit,
}

/// An organization access code. Must begin with an ASCII digit.
///
/// ## Examples
///
/// ```
/// use shopdesk_core::AccessCode;
///
/// assert!(AccessCode::parse("7-ACME").is_ok());
/// assert!(AccessCode::parse("ACME-7").is_err());
/// assert!(AccessCode::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AccessCode(String);

impl AccessCode {
    /// Parse an `AccessCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`AccessCodeError::MustStartWithDigit`] if the input is empty
    /// or its first character is not an ASCII digit.
    pub fn parse(s: &str) -> Result<Self, AccessCodeError> {
        if !s.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(AccessCodeError::MustStartWithDigit);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the access code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccessCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(AccessCode::parse("1234").is_ok());
        assert!(AccessCode::parse("9org").is_ok());
    }

    #[test]
    fn test_parse_rejects_leading_letter() {
        assert_eq!(
            AccessCode::parse("org9"),
            Err(AccessCodeError::MustStartWithDigit)
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(
            AccessCode::parse(""),
            Err(AccessCodeError::MustStartWithDigit)
        );
    }
}
