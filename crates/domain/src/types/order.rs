//! Order records as persisted in the `orders` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_support::{
    lenient_amount, lenient_id, lenient_opt_string, lenient_status, lenient_timestamp,
};
use crate::constants::UNKNOWN_STATUS;

/// A single line item within an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub product_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub unit_price: f64,
}

impl OrderItem {
    /// Line total contributed by this item.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// An order placed through the storefront.
///
/// The status set is open-ended: checkout and the admin dashboard write
/// free-form labels ("Processing", "Completed", "Cancelled", ...), so it is
/// kept as a string rather than an enum. Every field is lenient on
/// deserialization; a malformed field degrades to its default instead of
/// failing the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_id")]
    pub order_number: String,

    /// Display name of the customer; `None` for guest checkouts.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub customer_name: Option<String>,

    #[serde(default = "default_status", deserialize_with = "lenient_status")]
    pub status: String,

    /// Total monetary amount for the whole order, as a plain number.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: f64,

    /// Creation time; drives recency ordering on the dashboard.
    #[serde(default = "default_created_at", deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            id: String::new(),
            order_number: String::new(),
            customer_name: None,
            status: default_status(),
            total: 0.0,
            created_at: default_created_at(),
            items: Vec::new(),
        }
    }
}

impl Order {
    /// Sum of all line totals. Used when placing an order; the persisted
    /// `total` field stays authoritative for existing records.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

fn default_status() -> String {
    UNKNOWN_STATUS.to_string()
}

fn default_created_at() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_round_trip() {
        let order = Order {
            id: "o-1".into(),
            order_number: "ORD-00000001".into(),
            customer_name: Some("Ada".into()),
            status: "Completed".into(),
            total: 350.0,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            items: vec![OrderItem {
                product_id: "p-1".into(),
                name: "Lamp".into(),
                quantity: 2,
                unit_price: 175.0,
            }],
        };

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "o-1");
        assert_eq!(back.total, 350.0);
        assert_eq!(back.created_at, order.created_at);
    }

    #[test]
    fn test_missing_total_defaults_to_zero() {
        let order: Order = serde_json::from_str(
            r#"{ "id": "o-2", "order_number": "ORD-2", "status": "Processing" }"#,
        )
        .unwrap();
        assert_eq!(order.total, 0.0);
        assert_eq!(order.status, "Processing");
    }

    #[test]
    fn test_missing_status_buckets_as_unknown() {
        let order: Order = serde_json::from_str(r#"{ "id": "o-3", "total": 10 }"#).unwrap();
        assert_eq!(order.status, UNKNOWN_STATUS);
    }

    #[test]
    fn test_empty_object_parses_with_defaults() {
        let order: Order = serde_json::from_str("{}").unwrap();
        assert_eq!(order.created_at, DateTime::UNIX_EPOCH);
        assert!(order.customer_name.is_none());
    }

    #[test]
    fn test_items_total() {
        let order = Order {
            items: vec![
                OrderItem { quantity: 2, unit_price: 10.0, ..Default::default() },
                OrderItem { quantity: 1, unit_price: 5.5, ..Default::default() },
            ],
            ..Default::default()
        };
        assert_eq!(order.items_total(), 25.5);
    }
}
