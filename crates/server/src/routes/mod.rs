//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                               - Liveness message
//!
//! # Registration (JSON bodies)
//! POST   /api/admin/register             - Register an admin
//! POST   /api/user/register              - Register a user
//!
//! # Inventory (form-encoded writes)
//! POST   /api/inventory/add              - Add an item
//! GET    /api/inventory/list             - List items, newest first
//! PUT    /api/inventory/update/{id}      - Partially update an item
//! DELETE /api/inventory/delete/{id}      - Delete an item
//!
//! # Orders (form-encoded writes)
//! POST   /api/orders/add                 - Place an order
//! GET    /api/orders/list                - List orders, newest first
//! PUT    /api/orders/update-status/{id}  - Set an order's status
//! DELETE /api/orders/delete/{id}         - Delete an order
//! GET    /api/orders/track/{id}          - Track one order
//! GET    /api/orders/track-by-phone/{phone} - Track all orders for a phone
//! ```

pub mod inventory;
pub mod orders;
pub mod registration;

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Success body carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Success body carrying a message and the affected row.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub message: &'static str,
    pub data: T,
}

/// Create the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(registration::routes())
        .merge(inventory::routes())
        .merge(orders::routes())
}

/// Liveness message for the root path.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Backend server is running",
    })
}
