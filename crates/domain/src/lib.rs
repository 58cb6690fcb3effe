//! # Shopfront Domain
//!
//! Business domain types and models for Shopfront.
//!
//! This crate contains:
//! - Record schemas for the persisted collections (Order, Product, Category)
//! - The admin dashboard statistics projection types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Shopfront crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
