//! Admin and user registration handlers.

use axum::{Json, Router, extract::State, routing::post};

use crate::db::RegistrationRepository;
use crate::error::AppError;
use crate::models::registration::{AdminRegistration, UserRegistration};
use crate::state::AppState;

use super::MessageResponse;

/// Create the registration routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/register", post(register_admin))
        .route("/api/user/register", post(register_user))
}

/// Register a new admin.
///
/// Validation runs before any store call; a failed rule means no row is
/// written.
///
/// # Errors
///
/// Returns 400 for validation failures and unique-field conflicts, 500 for
/// store failures.
async fn register_admin(
    State(state): State<AppState>,
    Json(body): Json<AdminRegistration>,
) -> Result<Json<MessageResponse>, AppError> {
    let admin = body.validate()?;
    RegistrationRepository::new(state.pool())
        .insert_admin(&admin)
        .await?;

    tracing::info!(email = %admin.email, "admin registered");
    Ok(Json(MessageResponse {
        message: "Admin registered successfully",
    }))
}

/// Register a new user.
///
/// # Errors
///
/// Returns 400 for validation failures and duplicate emails, 500 for store
/// failures.
async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<UserRegistration>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = body.validate()?;
    RegistrationRepository::new(state.pool())
        .insert_user(&user)
        .await?;

    tracing::info!(email = %user.email, "user registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully",
    }))
}
