//! Shopfront entry point.
//!
//! Loads configuration, wires the service graph and prints the current admin
//! statistics snapshot. Doubles as an operational smoke check against a live
//! data directory.

use shopfront_app::{commands, AppContext};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = shopfront_infra::config::load();
    info!(data_dir = %config.storage.data_dir, "Starting shopfront");

    let ctx = AppContext::new(config);
    let stats = commands::get_admin_stats(&ctx).await;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
