//! Admin and user registration models.
//!
//! Passwords are stored and compared in plaintext for parity with the
//! system this replaces. See DESIGN.md - this is a known defect, not a
//! feature.

use serde::Deserialize;

use crate::validate::{self, Fields, ValidationError};

/// Raw admin registration request (JSON body, camelCase keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegistration {
    pub full_name: Option<String>,
    pub organization_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub access_code: Option<String>,
}

impl Fields for AdminRegistration {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "full_name" => self.full_name.as_deref(),
            "organization_name" => self.organization_name.as_deref(),
            "email" => self.email.as_deref(),
            "password" => self.password.as_deref(),
            "confirm_password" => self.confirm_password.as_deref(),
            "access_code" => self.access_code.as_deref(),
            _ => None,
        }
    }
}

impl AdminRegistration {
    /// Validate the submission and normalize to insert values.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule from the admin rule table.
    pub fn validate(&self) -> Result<NewAdmin, ValidationError> {
        validate::check(validate::ADMIN_RULES, self)?;

        Ok(NewAdmin {
            full_name: self.full_name.clone().unwrap_or_default(),
            organization_name: self.organization_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            confirm_password: self.confirm_password.clone().unwrap_or_default(),
            access_code: self.access_code.clone().unwrap_or_default(),
        })
    }
}

/// Validated admin registration, ready to persist.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub full_name: String,
    pub organization_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub access_code: String,
}

/// Raw user registration request (JSON body, camelCase keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl Fields for UserRegistration {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "full_name" => self.full_name.as_deref(),
            "email" => self.email.as_deref(),
            "password" => self.password.as_deref(),
            "confirm_password" => self.confirm_password.as_deref(),
            _ => None,
        }
    }
}

impl UserRegistration {
    /// Validate the submission and normalize to insert values.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule from the user rule table.
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        validate::check(validate::USER_RULES, self)?;

        Ok(NewUser {
            full_name: self.full_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            confirm_password: self.confirm_password.clone().unwrap_or_default(),
        })
    }
}

/// Validated user registration, ready to persist.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminRegistration {
        AdminRegistration {
            full_name: Some("Ada Lovelace".to_owned()),
            organization_name: Some("Acme".to_owned()),
            email: Some("ada@acme.com".to_owned()),
            password: Some("hunter22".to_owned()),
            confirm_password: Some("hunter22".to_owned()),
            access_code: Some("42-acme".to_owned()),
        }
    }

    #[test]
    fn test_admin_validate_normalizes() {
        let new_admin = admin().validate().unwrap();
        assert_eq!(new_admin.email, "ada@acme.com");
        assert_eq!(new_admin.confirm_password, "hunter22");
    }

    #[test]
    fn test_admin_password_mismatch_rejected() {
        let mut raw = admin();
        raw.confirm_password = Some("different".to_owned());
        let err = raw.validate().unwrap_err();
        assert_eq!(err.reason, "Passwords do not match");
    }

    #[test]
    fn test_admin_json_uses_camel_case_keys() {
        let raw: AdminRegistration = serde_json::from_str(
            r#"{
                "fullName": "Ada Lovelace",
                "organizationName": "Acme",
                "email": "ada@acme.com",
                "password": "hunter22",
                "confirmPassword": "hunter22",
                "accessCode": "42-acme"
            }"#,
        )
        .unwrap();
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_admin_missing_fields_tolerated_by_deserializer() {
        // Absent keys become None and fail validation, not deserialization.
        let raw: AdminRegistration = serde_json::from_str("{}").unwrap();
        let err = raw.validate().unwrap_err();
        assert_eq!(err.reason, "Invalid email format");
    }

    #[test]
    fn test_user_validate() {
        let raw = UserRegistration {
            full_name: Some("Sam".to_owned()),
            email: Some("sam@example.com".to_owned()),
            password: Some("secret1".to_owned()),
            confirm_password: Some("secret1".to_owned()),
        };
        let new_user = raw.validate().unwrap();
        assert_eq!(new_user.full_name, "Sam");
    }

    #[test]
    fn test_user_short_password_rejected() {
        let raw = UserRegistration {
            full_name: Some("Sam".to_owned()),
            email: Some("sam@example.com".to_owned()),
            password: Some("five5".to_owned()),
            confirm_password: Some("five5".to_owned()),
        };
        let err = raw.validate().unwrap_err();
        assert_eq!(err.reason, "Password must be at least 6 characters long");
    }
}
