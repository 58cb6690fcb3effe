//! Configuration structures
//!
//! All fields carry serde defaults so a partial config file (or none at all)
//! still yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_RECENT_ORDERS_LIMIT};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Storage layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

/// Admin dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Upper bound on the recent-orders list in the stats summary
    #[serde(default = "default_recent_orders_limit")]
    pub recent_orders_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { recent_orders_limit: default_recent_orders_limit() }
    }
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_recent_orders_limit() -> usize {
    DEFAULT_RECENT_ORDERS_LIMIT
}
