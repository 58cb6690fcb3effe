//! End-to-end tests over the full wiring: config → store → services

use std::sync::Arc;

use shopfront_app::{commands, AppContext};
use shopfront_domain::{Config, DashboardConfig, OrderItem, Product, StorageConfig};
use tempfile::TempDir;

fn context(dir: &TempDir, recent_orders_limit: usize) -> Arc<AppContext> {
    let config = Config {
        storage: StorageConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
        },
        dashboard: DashboardConfig { recent_orders_limit },
    };
    AppContext::new(config)
}

fn item(quantity: u32, unit_price: f64) -> OrderItem {
    OrderItem {
        product_id: "p-1".into(),
        name: "Lamp".into(),
        quantity,
        unit_price,
    }
}

#[tokio::test]
async fn test_fresh_data_dir_yields_zeroed_stats() {
    let dir = TempDir::new().expect("tempdir created");
    let ctx = context(&dir, 5);

    let stats = commands::get_admin_stats(&ctx).await;

    assert_eq!(stats.product_count, 0);
    assert_eq!(stats.order_count, 0);
    assert_eq!(stats.total_revenue, 0.0);
    assert!(stats.status_counts.is_empty());
    assert!(stats.recent_orders.is_empty());

    // First access materialized the collection files
    assert!(dir.path().join("orders.json").exists());
    assert!(dir.path().join("products.json").exists());
    assert!(dir.path().join("categories.json").exists());
}

#[tokio::test]
async fn test_stats_reflect_placed_orders_and_catalog() {
    let dir = TempDir::new().expect("tempdir created");
    let ctx = context(&dir, 5);

    commands::create_product(
        &ctx,
        Product { name: "Lamp".into(), price: 30.0, ..Default::default() },
    )
    .await
    .expect("product created");

    let placed = commands::place_order(&ctx, Some("Ada".into()), vec![item(2, 100.0)])
        .await
        .expect("order placed");
    commands::place_order(&ctx, None, vec![item(1, 50.0)]).await.expect("order placed");

    commands::update_order_status(&ctx, &placed.id, "Completed")
        .await
        .expect("status updated");

    let stats = commands::get_admin_stats(&ctx).await;

    assert_eq!(stats.product_count, 1);
    assert_eq!(stats.order_count, 2);
    assert_eq!(stats.total_revenue, 250.0);
    assert_eq!(stats.status_counts["Completed"], 1);
    assert_eq!(stats.status_counts["Processing"], 1);
    assert_eq!(stats.recent_orders.len(), 2);

    // The guest order projects the placeholder name
    let guest = stats
        .recent_orders
        .iter()
        .find(|o| o.id != placed.id)
        .expect("guest order present");
    assert_eq!(guest.customer_name, "Guest");
}

#[tokio::test]
async fn test_malformed_records_degrade_instead_of_failing() {
    let dir = TempDir::new().expect("tempdir created");
    let ctx = context(&dir, 5);

    // Seed the orders collection with records another (buggier) writer left
    ctx.store
        .write(
            "orders",
            &[
                serde_json::json!({ "id": "o-1", "status": "Completed", "total": 100 }),
                serde_json::json!({ "id": "o-2", "status": "Completed", "total": "oops" }),
                serde_json::json!({ "id": "o-3" }),
            ],
        )
        .await
        .expect("seeded");

    let stats = commands::get_admin_stats(&ctx).await;

    assert_eq!(stats.order_count, 3);
    assert_eq!(stats.total_revenue, 100.0);
    let grouped: u64 = stats.status_counts.values().sum();
    assert_eq!(grouped, 3);
    assert_eq!(stats.status_counts["Unknown"], 1);
}

#[tokio::test]
async fn test_recent_orders_limit_flows_from_config() {
    let dir = TempDir::new().expect("tempdir created");
    let ctx = context(&dir, 2);

    for price in [10.0, 20.0, 30.0, 40.0] {
        commands::place_order(&ctx, None, vec![item(1, price)]).await.expect("order placed");
    }

    let stats = commands::get_admin_stats(&ctx).await;

    assert_eq!(stats.order_count, 4);
    assert_eq!(stats.recent_orders.len(), 2);
    assert_eq!(stats.total_revenue, 100.0);
}

#[tokio::test]
async fn test_corrupt_orders_file_shows_zeros_not_errors() {
    let dir = TempDir::new().expect("tempdir created");
    let ctx = context(&dir, 5);

    commands::place_order(&ctx, None, vec![item(1, 10.0)]).await.expect("order placed");
    std::fs::write(dir.path().join("orders.json"), "definitely not json").expect("corrupted");

    let stats = commands::get_admin_stats(&ctx).await;

    assert_eq!(stats.order_count, 0);
    assert_eq!(stats.total_revenue, 0.0);
}
