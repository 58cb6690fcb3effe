//! Common data types used throughout the application

pub mod catalog;
pub mod order;
pub mod stats;

mod serde_support;

pub use catalog::{Category, Product};
pub use order::{Order, OrderItem};
pub use stats::{RecentOrder, StoreStats};
