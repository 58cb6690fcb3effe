//! Product and category records as persisted in their collections.
//!
//! The admin statistics view only counts these records, but the storefront
//! CRUD surface reads and writes the full shape.

use serde::{Deserialize, Serialize};

use super::serde_support::{lenient_amount, lenient_id, lenient_opt_string};

/// A product in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: f64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image_url: Option<String>,

    /// Units in stock; negative values never round-trip from this codebase
    /// but are tolerated from external writers.
    #[serde(default)]
    pub stock: i64,
}

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,
}
