//! # Shopfront App
//!
//! Composition root for the storefront data layer: wires configuration, the
//! JSON collection store, repositories and services together, and exposes
//! the command functions the presentation tier calls.

pub mod commands;
pub mod context;

pub use context::AppContext;
