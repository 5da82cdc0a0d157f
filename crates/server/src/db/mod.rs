//! Database operations for the Shopdesk `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `inventory` - Stocked items
//! - `orders` - Placed orders and their statuses
//! - `register_admin` - Admin registrations
//! - `register_user` - User registrations
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p shopdesk-cli -- migrate
//! ```

pub mod inventory;
pub mod orders;
pub mod registrations;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use inventory::InventoryRepository;
pub use orders::OrderRepository;
pub use registrations::RegistrationRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unique-constraint violation, already mapped to a client-facing
    /// field-specific message.
    #[error("{0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a unique-constraint violation to a field-specific conflict error;
/// everything else passes through as a database error.
pub(crate) fn map_unique_violation(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_unique_violation()
    {
        let message = conflict_message(db_err.constraint(), db_err.message());
        return RepositoryError::Conflict(message);
    }
    RepositoryError::Database(err)
}

/// Resolve the violated column to a client-facing conflict message.
///
/// The constraint name is authoritative when the store reports one
/// (Postgres default names embed the column, e.g. `register_admin_email_key`).
/// Falling back to substring-matching the raw error message is a best-effort
/// heuristic kept for stores that omit the constraint name.
fn conflict_message(constraint: Option<&str>, message: &str) -> String {
    const KNOWN_COLUMNS: &[(&str, &str)] = &[
        ("organization_name", "Organization name already exists"),
        ("access_code", "Access code already exists"),
        ("email", "Email already exists"),
    ];

    for haystack in [constraint.unwrap_or_default(), message] {
        for (column, reply) in KNOWN_COLUMNS {
            if haystack.contains(column) {
                return (*reply).to_owned();
            }
        }
    }
    "Record already exists".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_from_constraint_name() {
        assert_eq!(
            conflict_message(Some("register_admin_email_key"), "duplicate key"),
            "Email already exists"
        );
        assert_eq!(
            conflict_message(Some("register_admin_organization_name_key"), ""),
            "Organization name already exists"
        );
        assert_eq!(
            conflict_message(Some("register_admin_access_code_key"), ""),
            "Access code already exists"
        );
    }

    #[test]
    fn test_conflict_message_falls_back_to_message_text() {
        assert_eq!(
            conflict_message(
                None,
                "duplicate key value violates unique constraint on column email"
            ),
            "Email already exists"
        );
        assert_eq!(
            conflict_message(None, "unique violation: organization_name taken"),
            "Organization name already exists"
        );
        assert_eq!(
            conflict_message(None, "unique violation: access_code taken"),
            "Access code already exists"
        );
    }

    #[test]
    fn test_conflict_message_generic_when_column_unknown() {
        assert_eq!(
            conflict_message(Some("some_other_constraint"), "duplicate key"),
            "Record already exists"
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Conflict("Email already exists".to_owned());
        assert_eq!(err.to_string(), "Email already exists");
    }
}
