//! Product Catalog Domain Module
//!
//! This module contains the static storefront catalog, including:
//! - Domain models (Product, Review, Category)
//! - The seed data shipped with the storefront
//! - The catalog store with category and review lookups
//! - REST API handlers for browsing

pub mod data;
pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Category, Product, Review, CATEGORY_ALL};
pub use store::CatalogStore;
