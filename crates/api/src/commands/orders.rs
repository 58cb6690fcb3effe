//! Order commands - checkout and admin order management

use shopfront_domain::{Order, OrderItem, Result};

use crate::context::AppContext;

/// List all orders (admin).
pub async fn list_orders(ctx: &AppContext) -> Result<Vec<Order>> {
    ctx.orders.list_orders().await
}

/// Fetch one order by id.
pub async fn get_order(ctx: &AppContext, id: &str) -> Result<Order> {
    ctx.orders.get_order(id).await
}

/// Place an order from the checkout flow.
pub async fn place_order(
    ctx: &AppContext,
    customer_name: Option<String>,
    items: Vec<OrderItem>,
) -> Result<Order> {
    ctx.orders.place_order(customer_name, items).await
}

/// Change an order's status label (admin).
pub async fn update_order_status(ctx: &AppContext, id: &str, status: &str) -> Result<()> {
    ctx.orders.update_status(id, status).await
}
