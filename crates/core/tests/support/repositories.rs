//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the repository ports, enabling deterministic
//! unit tests without touching the filesystem. Each mock can also be put
//! into a failing mode to exercise the degrade-to-empty policy.

use std::sync::Mutex;

use async_trait::async_trait;
use shopfront_core::catalog::ports::{CategoryRepository, ProductRepository};
use shopfront_core::orders::ports::OrderRepository;
use shopfront_domain::{Category, Order, Product, Result as DomainResult, ShopfrontError};

fn storage_down<T>() -> DomainResult<T> {
    Err(ShopfrontError::Storage("mock storage failure".into()))
}

/// In-memory mock for `ProductRepository`.
#[derive(Default)]
pub struct MockProductRepository {
    products: Mutex<Vec<Product>>,
    fail: bool,
}

impl MockProductRepository {
    /// Create a new mock seeded with the provided products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: Mutex::new(products), fail: false }
    }

    /// Create a mock whose every operation fails.
    pub fn failing() -> Self {
        Self { products: Mutex::new(Vec::new()), fail: true }
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn list_products(&self) -> DomainResult<Vec<Product>> {
        if self.fail {
            return storage_down();
        }
        Ok(self.products.lock().expect("mock poisoned").clone())
    }

    async fn get_product(&self, id: &str) -> DomainResult<Option<Product>> {
        if self.fail {
            return storage_down();
        }
        Ok(self.products.lock().expect("mock poisoned").iter().find(|p| p.id == id).cloned())
    }

    async fn insert_product(&self, product: &Product) -> DomainResult<()> {
        if self.fail {
            return storage_down();
        }
        self.products.lock().expect("mock poisoned").push(product.clone());
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> DomainResult<()> {
        if self.fail {
            return storage_down();
        }
        let mut products = self.products.lock().expect("mock poisoned");
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(())
            }
            None => Err(ShopfrontError::NotFound(format!("product {}", product.id))),
        }
    }

    async fn delete_product(&self, id: &str) -> DomainResult<()> {
        if self.fail {
            return storage_down();
        }
        let mut products = self.products.lock().expect("mock poisoned");
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(ShopfrontError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `CategoryRepository`.
#[derive(Default)]
pub struct MockCategoryRepository {
    categories: Mutex<Vec<Category>>,
    fail: bool,
}

impl MockCategoryRepository {
    /// Create a new mock seeded with the provided categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories: Mutex::new(categories), fail: false }
    }

    /// Create a mock whose every operation fails.
    pub fn failing() -> Self {
        Self { categories: Mutex::new(Vec::new()), fail: true }
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        if self.fail {
            return storage_down();
        }
        Ok(self.categories.lock().expect("mock poisoned").clone())
    }
}

/// In-memory mock for `OrderRepository`.
#[derive(Default)]
pub struct MockOrderRepository {
    orders: Mutex<Vec<Order>>,
    fail: bool,
}

impl MockOrderRepository {
    /// Create a new mock seeded with the provided orders.
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders: Mutex::new(orders), fail: false }
    }

    /// Create a mock whose every operation fails.
    pub fn failing() -> Self {
        Self { orders: Mutex::new(Vec::new()), fail: true }
    }

    /// Snapshot of the stored orders, for assertions.
    pub fn stored(&self) -> Vec<Order> {
        self.orders.lock().expect("mock poisoned").clone()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn list_orders(&self) -> DomainResult<Vec<Order>> {
        if self.fail {
            return storage_down();
        }
        Ok(self.orders.lock().expect("mock poisoned").clone())
    }

    async fn get_order(&self, id: &str) -> DomainResult<Option<Order>> {
        if self.fail {
            return storage_down();
        }
        Ok(self.orders.lock().expect("mock poisoned").iter().find(|o| o.id == id).cloned())
    }

    async fn insert_order(&self, order: &Order) -> DomainResult<()> {
        if self.fail {
            return storage_down();
        }
        self.orders.lock().expect("mock poisoned").push(order.clone());
        Ok(())
    }

    async fn update_status(&self, id: &str, status: &str) -> DomainResult<()> {
        if self.fail {
            return storage_down();
        }
        let mut orders = self.orders.lock().expect("mock poisoned");
        match orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status.to_string();
                Ok(())
            }
            None => Err(ShopfrontError::NotFound(format!("order {id}"))),
        }
    }
}
