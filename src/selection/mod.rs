//! Product Selection Domain Module
//!
//! This module tracks what one session is currently looking at: the active
//! category filter and the product detail view with its image gallery
//! position.

pub mod handlers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Selection, ViewState};
