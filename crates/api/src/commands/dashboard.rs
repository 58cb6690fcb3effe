//! Admin dashboard commands

use shopfront_domain::StoreStats;
use tracing::info;

use crate::context::AppContext;

/// Get the admin dashboard statistics snapshot.
///
/// Always succeeds: absent or corrupt collections show up as zeros and empty
/// sections, never as an error.
pub async fn get_admin_stats(ctx: &AppContext) -> StoreStats {
    info!(command = "dashboard::get_admin_stats", "Executing get_admin_stats");
    ctx.dashboard.store_stats().await
}
