//! Inventory item models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopdesk_core::InventoryItemId;

use crate::validate::{self, Fields, ValidationError};

/// A persisted inventory row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InventoryItem {
    /// Unique item ID.
    pub id: InventoryItemId,
    /// Display name.
    pub item_name: String,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// Units on hand, non-negative.
    pub stock: i32,
    /// Free-form tags, empty string when none were given.
    pub tags: String,
    /// Discount percentage in [0, 100], zero when none was given.
    pub discount: Decimal,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Raw inventory submission, as received from the add form.
///
/// All fields arrive as strings; validation runs on the raw representation
/// so format errors are caught before any type conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryForm {
    #[serde(rename = "itemName")]
    pub item_name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub tags: Option<String>,
    pub discount: Option<String>,
}

impl Fields for InventoryForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "item_name" => self.item_name.as_deref(),
            "price" => self.price.as_deref(),
            "stock" => self.stock.as_deref(),
            "tags" => self.tags.as_deref(),
            "discount" => self.discount.as_deref(),
            _ => None,
        }
    }
}

impl InventoryForm {
    /// Validate the raw submission and normalize to typed insert values.
    ///
    /// Omitted `tags` normalize to an empty string; an omitted or empty
    /// `discount` normalizes to zero.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule from the inventory rule table.
    pub fn validate(&self) -> Result<NewInventoryItem, ValidationError> {
        validate::check(validate::INVENTORY_RULES, self)?;

        let price = validate::parse_decimal(
            "price",
            self.price.as_deref().unwrap_or_default(),
            "Invalid price format",
        )?;
        let stock = validate::parse_integer(
            "stock",
            self.stock.as_deref().unwrap_or_default(),
            "Invalid stock format",
        )?;
        let discount = match self.discount.as_deref() {
            Some(raw) if !raw.is_empty() => {
                validate::parse_decimal("discount", raw, "Invalid discount format")?
            }
            _ => Decimal::ZERO,
        };

        Ok(NewInventoryItem {
            item_name: self.item_name.clone().unwrap_or_default(),
            price,
            stock,
            tags: self.tags.clone().unwrap_or_default(),
            discount,
        })
    }
}

/// Typed insert values for a validated inventory item.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub item_name: String,
    pub price: Decimal,
    pub stock: i32,
    pub tags: String,
    pub discount: Decimal,
}

/// Raw partial-update submission for an existing item.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryUpdateForm {
    #[serde(rename = "itemName")]
    pub item_name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub tags: Option<String>,
    pub discount: Option<String>,
}

impl Fields for InventoryUpdateForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "item_name" => self.item_name.as_deref(),
            "price" => self.price.as_deref(),
            "stock" => self.stock.as_deref(),
            "tags" => self.tags.as_deref(),
            "discount" => self.discount.as_deref(),
            _ => None,
        }
    }
}

impl InventoryUpdateForm {
    /// Validate the fields present in the submission and normalize them.
    ///
    /// Empty `item_name`, `price`, `stock`, and `discount` values are
    /// treated as "leave unchanged". A present `tags` value is applied even
    /// when empty, which is how tags are cleared.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule from the update rule table.
    pub fn validate(&self) -> Result<InventoryUpdate, ValidationError> {
        validate::check(validate::INVENTORY_UPDATE_RULES, self)?;

        let price = self
            .price
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| validate::parse_decimal("price", raw, "Invalid price format"))
            .transpose()?;
        let stock = self
            .stock
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| validate::parse_integer("stock", raw, "Invalid stock format"))
            .transpose()?;
        let discount = self
            .discount
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| validate::parse_decimal("discount", raw, "Invalid discount format"))
            .transpose()?;

        Ok(InventoryUpdate {
            item_name: self.item_name.clone().filter(|name| !name.is_empty()),
            price,
            stock,
            tags: self.tags.clone(),
            discount,
        })
    }
}

/// Validated partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub item_name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub tags: Option<String>,
    pub discount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn form(price: &str, stock: &str) -> InventoryForm {
        InventoryForm {
            item_name: Some("Widget".to_owned()),
            price: Some(price.to_owned()),
            stock: Some(stock.to_owned()),
            tags: None,
            discount: None,
        }
    }

    #[test]
    fn test_validate_normalizes_defaults() {
        let item = form("19.99", "3").validate().unwrap();
        assert_eq!(item.item_name, "Widget");
        assert_eq!(item.price, dec("19.99"));
        assert_eq!(item.stock, 3);
        assert_eq!(item.tags, "");
        assert_eq!(item.discount, Decimal::ZERO);
    }

    #[test]
    fn test_validate_accepts_zero_price_and_stock() {
        let item = form("0", "0").validate().unwrap();
        assert_eq!(item.price, Decimal::ZERO);
        assert_eq!(item.stock, 0);
    }

    #[test]
    fn test_validate_keeps_explicit_discount() {
        let mut raw = form("5", "5");
        raw.discount = Some("12.5".to_owned());
        let item = raw.validate().unwrap();
        assert_eq!(item.discount, dec("12.5"));
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        let err = form("5", "-1").validate().unwrap_err();
        assert_eq!(err.reason, "Stock must be a positive number");
    }

    #[test]
    fn test_update_skips_empty_values_but_applies_tags() {
        let raw = InventoryUpdateForm {
            item_name: Some(String::new()),
            price: Some(String::new()),
            stock: None,
            tags: Some(String::new()),
            discount: None,
        };
        let update = raw.validate().unwrap();
        assert_eq!(update.item_name, None);
        assert_eq!(update.price, None);
        assert_eq!(update.stock, None);
        // Present-but-empty tags clear the stored tags.
        assert_eq!(update.tags, Some(String::new()));
    }

    #[test]
    fn test_update_validates_present_fields() {
        let raw = InventoryUpdateForm {
            item_name: None,
            price: Some("not-a-number".to_owned()),
            stock: None,
            tags: None,
            discount: None,
        };
        let err = raw.validate().unwrap_err();
        assert_eq!(err.reason, "Invalid price format");
    }
}
