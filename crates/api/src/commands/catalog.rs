//! Catalog commands - product and category browsing plus admin CRUD

use shopfront_domain::{Category, Product, Result};
use tracing::info;

use crate::context::AppContext;

/// List the full product catalog.
pub async fn list_products(ctx: &AppContext) -> Result<Vec<Product>> {
    ctx.catalog.list_products().await
}

/// Fetch one product by id.
pub async fn get_product(ctx: &AppContext, id: &str) -> Result<Product> {
    ctx.catalog.get_product(id).await
}

/// List products belonging to one category.
pub async fn products_in_category(ctx: &AppContext, category_id: &str) -> Result<Vec<Product>> {
    ctx.catalog.products_in_category(category_id).await
}

/// Create a product (admin).
pub async fn create_product(ctx: &AppContext, product: Product) -> Result<Product> {
    let created = ctx.catalog.create_product(product).await?;
    info!(product_id = %created.id, "Product created");
    Ok(created)
}

/// Update a product (admin).
pub async fn update_product(ctx: &AppContext, product: Product) -> Result<Product> {
    ctx.catalog.update_product(product).await
}

/// Delete a product (admin).
pub async fn delete_product(ctx: &AppContext, id: &str) -> Result<()> {
    let deleted = ctx.catalog.delete_product(id).await;
    if deleted.is_ok() {
        info!(product_id = %id, "Product deleted");
    }
    deleted
}

/// List all categories.
pub async fn list_categories(ctx: &AppContext) -> Result<Vec<Category>> {
    ctx.catalog.list_categories().await
}
