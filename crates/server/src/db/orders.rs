//! Database operations for orders.

use sqlx::PgPool;

use shopdesk_core::{OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::order::{NewOrder, Order};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated order with status "pending" and return the stored
    /// row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (
                item_id, item_name, quantity, total_price,
                customer_name, customer_phone, delivery_address, user_id,
                order_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, item_id, item_name, quantity, total_price,
                      customer_name, customer_phone, delivery_address, user_id,
                      order_status, order_time, created_at, updated_at
            ",
        )
        .bind(&order.item_id)
        .bind(&order.item_name)
        .bind(order.quantity)
        .bind(order.total_price)
        .bind(&order.customer_name)
        .bind(&order.customer_phone)
        .bind(order.delivery_address.as_deref())
        .bind(order.user_id.as_deref())
        .bind(OrderStatus::Pending.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all orders, most recently placed first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r"
            SELECT id, item_id, item_name, quantity, total_price,
                   customer_name, customer_phone, delivery_address, user_id,
                   order_status, order_time, created_at, updated_at
            FROM orders
            ORDER BY order_time DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            r"
            SELECT id, item_id, item_name, quantity, total_price,
                   customer_name, customer_phone, delivery_address, user_id,
                   order_status, order_time, created_at, updated_at
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// List all orders for a customer phone number, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_phone(&self, phone: &str) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r"
            SELECT id, item_id, item_name, quantity, total_price,
                   customer_name, customer_phone, delivery_address, user_id,
                   order_status, order_time, created_at, updated_at
            FROM orders
            WHERE customer_phone = $1
            ORDER BY order_time DESC
            ",
        )
        .bind(phone)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Set an order's status and return the updated row, or `None` when no
    /// row matches the ID. Statuses are externally driven; any text is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: &str,
    ) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            r"
            UPDATE orders
            SET order_status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, item_id, item_name, quantity, total_price,
                      customer_name, customer_phone, delivery_address, user_id,
                      order_status, order_time, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an order and return the removed row, or `None` when no row
    /// matches the ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            r"
            DELETE FROM orders
            WHERE id = $1
            RETURNING id, item_id, item_name, quantity, total_price,
                      customer_name, customer_phone, delivery_address, user_id,
                      order_status, order_time, created_at, updated_at
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
