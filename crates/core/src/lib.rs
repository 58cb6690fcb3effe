//! # Shopfront Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for storage and repositories
//! - The admin dashboard statistics aggregation
//! - Catalog and order services
//!
//! ## Architecture Principles
//! - Only depends on `shopfront-domain`
//! - No filesystem or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod catalog;
pub mod dashboard;
pub mod orders;

// Infrastructure ports
pub mod storage_ports;

// Re-export specific items to avoid ambiguity
pub use catalog::ports::{CategoryRepository, ProductRepository};
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use orders::ports::OrderRepository;
pub use orders::OrderService;
pub use storage_ports::CollectionStore;
