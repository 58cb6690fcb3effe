//! Application context - dependency injection container

use std::sync::Arc;

use shopfront_core::{
    CatalogService, CategoryRepository, CollectionStore, DashboardService, OrderRepository,
    OrderService, ProductRepository,
};
use shopfront_domain::Config;
use shopfront_infra::{
    JsonCategoryRepository, JsonCollectionStore, JsonOrderRepository, JsonProductRepository,
};

/// Application context - holds all services and dependencies.
///
/// The storage root comes from the config, so tests construct a context over
/// a temporary directory instead of the process-wide data dir.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn CollectionStore>,
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrderService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppContext {
    /// Build the full service graph from a configuration.
    pub fn new(config: Config) -> Arc<Self> {
        let store: Arc<dyn CollectionStore> =
            Arc::new(JsonCollectionStore::new(&config.storage.data_dir));

        let products: Arc<dyn ProductRepository> =
            Arc::new(JsonProductRepository::new(Arc::clone(&store)));
        let categories: Arc<dyn CategoryRepository> =
            Arc::new(JsonCategoryRepository::new(Arc::clone(&store)));
        let orders: Arc<dyn OrderRepository> =
            Arc::new(JsonOrderRepository::new(Arc::clone(&store)));

        let catalog =
            Arc::new(CatalogService::new(Arc::clone(&products), Arc::clone(&categories)));
        let order_service = Arc::new(OrderService::new(Arc::clone(&orders)));
        let dashboard = Arc::new(
            DashboardService::new(products, categories, orders)
                .with_recent_orders_limit(config.dashboard.recent_orders_limit),
        );

        Arc::new(Self { config, store, catalog, orders: order_service, dashboard })
    }
}
