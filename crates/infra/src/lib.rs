//! # Shopfront Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The JSON file collection store (one file per collection)
//! - Typed repository adapters over the raw store
//! - Configuration loading (environment variables and config files)
//!
//! ## Architecture
//! - Implements traits defined in `shopfront-core`
//! - Depends on `shopfront-domain` and `shopfront-core`
//! - Contains all "impure" code (filesystem I/O)

pub mod config;
pub mod errors;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use storage::{
    JsonCategoryRepository, JsonCollectionStore, JsonOrderRepository, JsonProductRepository,
};
