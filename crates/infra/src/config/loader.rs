//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found either, falls back to built-in defaults
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SHOPFRONT_DATA_DIR`: Directory holding the collection files
//! - `SHOPFRONT_RECENT_ORDERS_LIMIT`: Bound on the dashboard recent-orders
//!   list (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./shopfront.json` or `./shopfront.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use shopfront_domain::{Config, DashboardConfig, Result, ShopfrontError, StorageConfig};

/// Load configuration with automatic fallback strategy.
///
/// Environment variables win over config files; when neither is present the
/// built-in defaults apply, so startup never fails on configuration.
pub fn load() -> Config {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(env_err) => {
            tracing::debug!(error = ?env_err, "Failed to load from environment, trying file");
            match load_from_file(None) {
                Ok(config) => config,
                Err(file_err) => {
                    tracing::debug!(error = ?file_err, "No config file, using defaults");
                    Config::default()
                }
            }
        }
    }
}

/// Load configuration from environment variables.
///
/// `SHOPFRONT_DATA_DIR` is required for this source to be considered
/// configured; the remaining variables are optional.
///
/// # Errors
/// Returns `ShopfrontError::Config` if `SHOPFRONT_DATA_DIR` is missing or a
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let data_dir = env_var("SHOPFRONT_DATA_DIR")?;

    let recent_orders_limit = match std::env::var("SHOPFRONT_RECENT_ORDERS_LIMIT") {
        Ok(raw) => raw.parse::<usize>().map_err(|e| {
            ShopfrontError::Config(format!("Invalid recent orders limit: {e}"))
        })?,
        Err(_) => DashboardConfig::default().recent_orders_limit,
    };

    Ok(Config {
        storage: StorageConfig { data_dir },
        dashboard: DashboardConfig { recent_orders_limit },
    })
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ShopfrontError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopfrontError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopfrontError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShopfrontError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content.
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShopfrontError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShopfrontError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShopfrontError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory first
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("shopfront.json"),
            cwd.join("shopfront.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("shopfront.json"),
                exe_dir.join("shopfront.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ShopfrontError::Config(format!("Missing required environment variable: {key}"))
    })
}
