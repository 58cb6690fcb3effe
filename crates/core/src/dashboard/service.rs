//! Dashboard statistics aggregation - core business logic
//!
//! Recomputes the full `StoreStats` projection from the source collections
//! on every call. Nothing is cached or persisted; two calls may observe
//! different snapshots if writers are mutating the collections concurrently,
//! which is accepted (the collections are owned by checkout and the admin
//! CRUD screens, not by this service).

use std::collections::BTreeMap;
use std::sync::Arc;

use shopfront_domain::constants::DEFAULT_RECENT_ORDERS_LIMIT;
use shopfront_domain::{Order, RecentOrder, StoreStats};
use tracing::warn;

use crate::catalog::ports::{CategoryRepository, ProductRepository};
use crate::orders::ports::OrderRepository;

/// Admin dashboard statistics service.
///
/// This service never fails outward: a repository read error is logged and
/// degrades to an empty collection, so the dashboard renders zeros instead
/// of an error banner when underlying data is absent or corrupt.
pub struct DashboardService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
    orders: Arc<dyn OrderRepository>,
    recent_orders_limit: usize,
}

impl DashboardService {
    /// Create a new dashboard service with the default recent-orders bound
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self { products, categories, orders, recent_orders_limit: DEFAULT_RECENT_ORDERS_LIMIT }
    }

    /// Override the bound on the recent-orders list
    pub fn with_recent_orders_limit(mut self, limit: usize) -> Self {
        self.recent_orders_limit = limit;
        self
    }

    /// Compute the current statistics snapshot.
    ///
    /// The three collections are read independently; there is no
    /// transactional snapshot across them.
    pub async fn store_stats(&self) -> StoreStats {
        let products = self.products.list_products().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read products, degrading to empty");
            Vec::new()
        });
        let categories = self.categories.list_categories().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read categories, degrading to empty");
            Vec::new()
        });
        let orders = self.orders.list_orders().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read orders, degrading to empty");
            Vec::new()
        });

        let mut total_revenue = 0.0;
        let mut status_counts: BTreeMap<String, u64> = BTreeMap::new();
        for order in &orders {
            total_revenue += order.total;
            *status_counts.entry(order.status.clone()).or_insert(0) += 1;
        }

        StoreStats {
            product_count: products.len() as u64,
            category_count: categories.len() as u64,
            order_count: orders.len() as u64,
            total_revenue,
            status_counts,
            recent_orders: recent_orders(&orders, self.recent_orders_limit),
        }
    }
}

/// Project the most recent orders, newest first.
///
/// The sort is stable, so orders sharing a timestamp keep their stored
/// relative order.
fn recent_orders(orders: &[Order], limit: usize) -> Vec<RecentOrder> {
    let mut by_recency: Vec<&Order> = orders.iter().collect();
    by_recency.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    by_recency.into_iter().take(limit).map(RecentOrder::from).collect()
}
