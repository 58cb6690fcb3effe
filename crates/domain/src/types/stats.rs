//! Admin dashboard statistics types.
//!
//! `StoreStats` is a transient read projection over the orders, products and
//! categories collections. It is rebuilt from scratch on every aggregation
//! call and never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::GUEST_CUSTOMER_NAME;
use crate::types::order::Order;

/// Store-wide statistics summary for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of products in the catalog
    pub product_count: u64,

    /// Number of product categories
    pub category_count: u64,

    /// Number of orders ever placed
    pub order_count: u64,

    /// Sum of every order's total, across the whole collection
    pub total_revenue: f64,

    /// Orders grouped by status label; only statuses that occur appear.
    /// Keys are sorted lexicographically, which is stable for a given input.
    pub status_counts: BTreeMap<String, u64>,

    /// Most recent orders, newest first, bounded by the configured limit
    pub recent_orders: Vec<RecentOrder>,
}

/// Display-ready projection of one order for the recent-orders list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub order_number: String,
    /// Customer display name, or the guest placeholder
    pub customer_name: String,
    pub status: String,
    pub total: f64,
}

impl From<&Order> for RecentOrder {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            customer_name: order
                .customer_name
                .clone()
                .unwrap_or_else(|| GUEST_CUSTOMER_NAME.to_string()),
            status: order.status.clone(),
            total: order.total,
        }
    }
}
