//! Repository ports for the catalog collections.

use async_trait::async_trait;
use shopfront_domain::{Category, Product, Result};

/// Port for the `products` collection.
///
/// Mutations are whole-collection read-modify-write underneath; two
/// concurrent mutations can lose one of the updates (last-writer-wins).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in stored order.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Look up a product by id.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Append a product to the collection.
    async fn insert_product(&self, product: &Product) -> Result<()>;

    /// Replace the stored product with the same id.
    ///
    /// Returns `ShopfrontError::NotFound` when no product has that id.
    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Remove a product by id.
    ///
    /// Returns `ShopfrontError::NotFound` when no product has that id.
    async fn delete_product(&self, id: &str) -> Result<()>;
}

/// Port for the `categories` collection.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, in stored order.
    async fn list_categories(&self) -> Result<Vec<Category>>;
}
