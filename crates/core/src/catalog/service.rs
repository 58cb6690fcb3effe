//! Catalog service - product and category business logic

use std::sync::Arc;

use shopfront_domain::{Category, Product, Result, ShopfrontError};
use uuid::Uuid;

use super::ports::{CategoryRepository, ProductRepository};

/// Catalog service used by the storefront pages and the admin CRUD screens.
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { products, categories }
    }

    /// List the full catalog
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.products.list_products().await
    }

    /// Fetch a single product
    pub async fn get_product(&self, id: &str) -> Result<Product> {
        self.products
            .get_product(id)
            .await?
            .ok_or_else(|| ShopfrontError::NotFound(format!("product {id}")))
    }

    /// Products belonging to one category, in stored order
    pub async fn products_in_category(&self, category_id: &str) -> Result<Vec<Product>> {
        let products = self.products.list_products().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.category_id.as_deref() == Some(category_id))
            .collect())
    }

    /// Create a product, assigning it a fresh id.
    ///
    /// The incoming id is ignored; the stored record always gets a generated
    /// one so external callers cannot collide with existing records.
    pub async fn create_product(&self, mut product: Product) -> Result<Product> {
        validate_product(&product)?;
        product.id = Uuid::new_v4().to_string();
        self.products.insert_product(&product).await?;
        Ok(product)
    }

    /// Update an existing product in place
    pub async fn update_product(&self, product: Product) -> Result<Product> {
        validate_product(&product)?;
        if product.id.is_empty() {
            return Err(ShopfrontError::InvalidInput("product id is required".into()));
        }
        self.products.update_product(&product).await?;
        Ok(product)
    }

    /// Delete a product by id
    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.products.delete_product(id).await
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.categories.list_categories().await
    }
}

fn validate_product(product: &Product) -> Result<()> {
    if product.name.trim().is_empty() {
        return Err(ShopfrontError::InvalidInput("product name is required".into()));
    }
    if product.price < 0.0 {
        return Err(ShopfrontError::InvalidInput("product price cannot be negative".into()));
    }
    Ok(())
}
