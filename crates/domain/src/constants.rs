//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Collection names (one JSON file per collection under the data directory)
pub const COLLECTION_PRODUCTS: &str = "products";
pub const COLLECTION_CATEGORIES: &str = "categories";
pub const COLLECTION_ORDERS: &str = "orders";

// Dashboard configuration
pub const DEFAULT_RECENT_ORDERS_LIMIT: usize = 5;

// Fallback labels for records with missing display fields
pub const UNKNOWN_STATUS: &str = "Unknown";
pub const GUEST_CUSTOMER_NAME: &str = "Guest";

// Order lifecycle
pub const INITIAL_ORDER_STATUS: &str = "Processing";
pub const ORDER_NUMBER_PREFIX: &str = "ORD";

// Storage defaults
pub const DEFAULT_DATA_DIR: &str = "data";
pub const COLLECTION_FILE_EXTENSION: &str = "json";
