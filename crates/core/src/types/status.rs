//! Order status and estimated-delivery computation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The known order statuses.
///
/// Statuses are externally driven and stored as free-form text; anything
/// outside this set simply has no delivery estimate. There is no enforced
/// transition order between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Completed,
}

impl OrderStatus {
    /// Parse a status string, returning `None` for anything unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "shipped" => Some(Self::Shipped),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Get the status as the string persisted in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
        }
    }
}

/// Compute the estimated delivery annotation for an order.
///
/// - `completed` orders are already delivered
/// - `shipped` orders arrive within two hours of placement
/// - `pending` orders arrive within three hours of placement
/// - anything else has no estimate
///
/// Times are rendered on a 12-hour clock with AM/PM, in UTC.
#[must_use]
pub fn estimated_delivery(status: &str, order_time: DateTime<Utc>) -> String {
    match OrderStatus::parse(status) {
        Some(OrderStatus::Completed) => "Delivered".to_owned(),
        Some(OrderStatus::Shipped) => clock_time(order_time + Duration::hours(2)),
        Some(OrderStatus::Pending) => clock_time(order_time + Duration::hours(3)),
        None => "Not available".to_owned(),
    }
}

fn clock_time(t: DateTime<Utc>) -> String {
    t.format("%I:%M %p").to_string()
}
