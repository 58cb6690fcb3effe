//! Command functions invoked by the presentation tier

pub mod catalog;
pub mod dashboard;
pub mod orders;

pub use catalog::{
    create_product, delete_product, get_product, list_categories, list_products,
    products_in_category, update_product,
};
pub use dashboard::get_admin_stats;
pub use orders::{get_order, list_orders, place_order, update_order_status};
