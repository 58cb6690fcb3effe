//! JSON file storage and repository adapters

pub mod category_repository;
pub mod json_store;
pub mod order_repository;
pub mod product_repository;

pub use category_repository::JsonCategoryRepository;
pub use json_store::JsonCollectionStore;
pub use order_repository::JsonOrderRepository;
pub use product_repository::JsonProductRepository;

use serde_json::Value;

/// Extract the `id` field of a raw record, stringifying numeric ids the same
/// way the lenient record schemas do.
pub(crate) fn record_id(value: &Value) -> Option<String> {
    match value.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
