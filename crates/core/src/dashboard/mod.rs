//! Admin dashboard - statistics aggregation

pub mod service;

pub use service::DashboardService;
