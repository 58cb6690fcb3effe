//! Orders domain - checkout and admin order management

pub mod ports;
pub mod service;

pub use service::OrderService;
