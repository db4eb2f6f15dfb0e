//! HTTP request handlers for the dashboard.

// Utility submodules
pub mod pagination;

// Handler modules
pub mod customers;
pub mod health;
pub mod seed;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use customers::{
    __path_customers_page, __path_list_customers, customers_page, list_customers,
};
pub use health::{__path_health_check, health_check, not_found};
pub use seed::{__path_seed_database, SeedResponse, seed_database};
