//! Order models and delivery tracking annotations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopdesk_core::{OrderId, estimated_delivery};

use crate::validate::{self, Fields, ValidationError};

/// A persisted order row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Inventory item the order references.
    pub item_id: String,
    /// Item name at placement time.
    pub item_name: String,
    /// Units ordered, strictly positive.
    pub quantity: i32,
    /// Total charged, strictly positive.
    pub total_price: Decimal,
    /// Customer display name.
    pub customer_name: String,
    /// Customer phone, exactly ten digits.
    pub customer_phone: String,
    /// Optional delivery address.
    pub delivery_address: Option<String>,
    /// Optional ID of the registered user who placed the order.
    pub user_id: Option<String>,
    /// Current status. Externally driven free-form text; new orders start
    /// as "pending".
    pub order_status: String,
    /// When the order was placed.
    pub order_time: DateTime<Utc>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An order annotated with its delivery estimate.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Derived, read-only: "Delivered", a 12-hour clock time, or
    /// "Not available".
    pub estimated_delivery: String,
}

impl From<Order> for TrackedOrder {
    fn from(order: Order) -> Self {
        let estimated_delivery = estimated_delivery(&order.order_status, order.order_time);
        Self {
            order,
            estimated_delivery,
        }
    }
}

/// Raw order submission, as received from the order form.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderForm {
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<String>,
    pub total_price: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub user_id: Option<String>,
}

impl Fields for OrderForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "item_id" => self.item_id.as_deref(),
            "item_name" => self.item_name.as_deref(),
            "quantity" => self.quantity.as_deref(),
            "total_price" => self.total_price.as_deref(),
            "customer_name" => self.customer_name.as_deref(),
            "customer_phone" => self.customer_phone.as_deref(),
            "delivery_address" => self.delivery_address.as_deref(),
            "user_id" => self.user_id.as_deref(),
            _ => None,
        }
    }
}

impl OrderForm {
    /// Validate the raw submission and normalize to typed insert values.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule from the order rule table.
    pub fn validate(&self) -> Result<NewOrder, ValidationError> {
        validate::check(validate::ORDER_RULES, self)?;

        let quantity = validate::parse_integer(
            "quantity",
            self.quantity.as_deref().unwrap_or_default(),
            "Invalid quantity format",
        )?;
        let total_price = validate::parse_decimal(
            "total_price",
            self.total_price.as_deref().unwrap_or_default(),
            "Invalid price format",
        )?;

        Ok(NewOrder {
            item_id: self.item_id.clone().unwrap_or_default(),
            item_name: self.item_name.clone().unwrap_or_default(),
            quantity,
            total_price,
            customer_name: self.customer_name.clone().unwrap_or_default(),
            customer_phone: self.customer_phone.clone().unwrap_or_default(),
            delivery_address: self.delivery_address.clone(),
            user_id: self.user_id.clone(),
        })
    }
}

/// Typed insert values for a validated order. Persisted with status
/// "pending" and the placement timestamp assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub item_id: String,
    pub item_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: Option<String>,
    pub user_id: Option<String>,
}

/// Status-update form body.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusForm {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shopdesk_core::OrderStatus;
    use uuid::Uuid;

    fn form() -> OrderForm {
        OrderForm {
            item_id: Some("7f2c8d9e".to_owned()),
            item_name: Some("Widget".to_owned()),
            quantity: Some("2".to_owned()),
            total_price: Some("39.98".to_owned()),
            customer_name: Some("Jo".to_owned()),
            customer_phone: Some("0123456789".to_owned()),
            delivery_address: None,
            user_id: None,
        }
    }

    fn order(status: &str) -> Order {
        Order {
            id: OrderId::new(Uuid::new_v4()),
            item_id: "7f2c8d9e".to_owned(),
            item_name: "Widget".to_owned(),
            quantity: 2,
            total_price: "39.98".parse().unwrap(),
            customer_name: "Jo".to_owned(),
            customer_phone: "0123456789".to_owned(),
            delivery_address: None,
            user_id: None,
            order_status: status.to_owned(),
            order_time: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_normalizes_numeric_fields() {
        let new_order = form().validate().unwrap();
        assert_eq!(new_order.quantity, 2);
        assert_eq!(new_order.total_price, "39.98".parse().unwrap());
        assert_eq!(new_order.delivery_address, None);
    }

    #[test]
    fn test_validate_rejects_bad_phone_regardless_of_other_fields() {
        let mut raw = form();
        raw.customer_phone = Some("12345".to_owned());
        let err = raw.validate().unwrap_err();
        assert_eq!(err.field, "customer_phone");
        assert_eq!(err.reason, "Phone number must be exactly 10 digits");
    }

    #[test]
    fn test_tracked_order_annotates_estimate() {
        let tracked = TrackedOrder::from(order(OrderStatus::Pending.as_str()));
        assert_eq!(tracked.estimated_delivery, "01:00 PM");

        let tracked = TrackedOrder::from(order("cancelled"));
        assert_eq!(tracked.estimated_delivery, "Not available");
    }

    #[test]
    fn test_tracked_order_serializes_flattened() {
        let tracked = TrackedOrder::from(order("completed"));
        let value = serde_json::to_value(&tracked).unwrap();
        assert_eq!(value["estimated_delivery"], "Delivered");
        assert_eq!(value["item_name"], "Widget");
        assert_eq!(value["order_status"], "completed");
    }
}
