//! Database operations for admin and user registrations.

use sqlx::PgPool;

use super::{RepositoryError, map_unique_violation};
use crate::models::registration::{NewAdmin, NewUser};

/// Repository for registration database operations.
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    /// Create a new registration repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an admin registration.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` with a field-specific message when
    /// the email, organization name, or access code is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert_admin(&self, admin: &NewAdmin) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO register_admin (
                full_name, organization_name, email,
                password, confirm_password, access_code
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&admin.full_name)
        .bind(&admin.organization_name)
        .bind(&admin.email)
        .bind(&admin.password)
        .bind(&admin.confirm_password)
        .bind(&admin.access_code)
        .execute(self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    /// Insert a user registration.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` when the email is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert_user(&self, user: &NewUser) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO register_user (full_name, email, password, confirm_password)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.confirm_password)
        .execute(self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }
}
