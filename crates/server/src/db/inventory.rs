//! Database operations for inventory items.

use sqlx::PgPool;

use shopdesk_core::InventoryItemId;

use super::RepositoryError;
use crate::models::inventory::{InventoryItem, InventoryUpdate, NewInventoryItem};

/// Repository for inventory database operations.
pub struct InventoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InventoryRepository<'a> {
    /// Create a new inventory repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated item and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(
        &self,
        item: &NewInventoryItem,
    ) -> Result<InventoryItem, RepositoryError> {
        let row = sqlx::query_as::<_, InventoryItem>(
            r"
            INSERT INTO inventory (item_name, price, stock, tags, discount)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, item_name, price, stock, tags, discount,
                      created_at, updated_at
            ",
        )
        .bind(&item.item_name)
        .bind(item.price)
        .bind(item.stock)
        .bind(&item.tags)
        .bind(item.discount)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, InventoryItem>(
            r"
            SELECT id, item_name, price, stock, tags, discount,
                   created_at, updated_at
            FROM inventory
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get an item by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        id: InventoryItemId,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        let row = sqlx::query_as::<_, InventoryItem>(
            r"
            SELECT id, item_name, price, stock, tags, discount,
                   created_at, updated_at
            FROM inventory
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Apply a partial update and stamp `updated_at`.
    ///
    /// Absent fields keep their stored values. Returns `None` when no row
    /// matches the ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: InventoryItemId,
        update: &InventoryUpdate,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        let row = sqlx::query_as::<_, InventoryItem>(
            r"
            UPDATE inventory
            SET item_name = COALESCE($2, item_name),
                price = COALESCE($3, price),
                stock = COALESCE($4, stock),
                tags = COALESCE($5, tags),
                discount = COALESCE($6, discount),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, item_name, price, stock, tags, discount,
                      created_at, updated_at
            ",
        )
        .bind(id)
        .bind(update.item_name.as_deref())
        .bind(update.price)
        .bind(update.stock)
        .bind(update.tags.as_deref())
        .bind(update.discount)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an item by ID. Returns `false` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: InventoryItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
