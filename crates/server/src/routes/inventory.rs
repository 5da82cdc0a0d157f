//! Inventory handlers.

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use shopdesk_core::InventoryItemId;

use crate::db::InventoryRepository;
use crate::error::AppError;
use crate::models::inventory::{InventoryForm, InventoryItem, InventoryUpdateForm};
use crate::state::AppState;

use super::{DataResponse, MessageResponse};

/// Create the inventory routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/inventory/add", post(add_item))
        .route("/api/inventory/list", get(list_items))
        .route("/api/inventory/update/{id}", put(update_item))
        .route("/api/inventory/delete/{id}", delete(delete_item))
}

/// Add an inventory item.
///
/// # Errors
///
/// Returns 400 for validation failures, 500 for store failures.
async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<InventoryForm>,
) -> Result<Json<DataResponse<InventoryItem>>, AppError> {
    let item = form.validate()?;
    let stored = InventoryRepository::new(state.pool()).insert(&item).await?;

    tracing::info!(item_name = %stored.item_name, id = %stored.id, "inventory item added");
    Ok(Json(DataResponse {
        message: "Item added successfully",
        data: stored,
    }))
}

/// List all inventory items, newest first.
///
/// # Errors
///
/// Returns 500 if the store cannot be reached.
async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItem>>, AppError> {
    let items = InventoryRepository::new(state.pool()).list().await?;
    Ok(Json(items))
}

/// Partially update an inventory item.
///
/// The existence check runs before field validation, so an unknown ID is a
/// 404 even when the submitted fields are also invalid.
///
/// # Errors
///
/// Returns 404 for an unknown ID, 400 for validation failures, 500 for
/// store failures.
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<InventoryUpdateForm>,
) -> Result<Json<DataResponse<InventoryItem>>, AppError> {
    let id = InventoryItemId::new(id);
    let repo = InventoryRepository::new(state.pool());

    if repo.get(id).await?.is_none() {
        return Err(AppError::NotFound("Item not found".to_owned()));
    }

    let update = form.validate()?;
    let updated = repo
        .update(id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_owned()))?;

    Ok(Json(DataResponse {
        message: "Item updated successfully",
        data: updated,
    }))
}

/// Delete an inventory item.
///
/// # Errors
///
/// Returns 404 for an unknown ID, 500 for store failures.
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = InventoryRepository::new(state.pool())
        .delete(InventoryItemId::new(id))
        .await?;

    if deleted {
        Ok(Json(MessageResponse {
            message: "Item deleted successfully",
        }))
    } else {
        Err(AppError::NotFound("Item not found".to_owned()))
    }
}
