//! Catalog domain - products and categories

pub mod ports;
pub mod service;

pub use service::CatalogService;
