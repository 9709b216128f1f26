//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One entry in a cart: a product snapshot plus a positive quantity.
///
/// The snapshot is captured on first add and never refreshed afterwards, so
/// a line keeps its price even if the catalog were ever to change. A line
/// with quantity 0 must not exist; it is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product data as of the first add for this id
    pub product: Product,

    /// Always positive for a line present in the cart
    pub quantity: u32,
}

/// Cart engine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Raised for quantities outside the accepted range (negative or
    /// beyond `u32::MAX`)
    #[error("invalid quantity {0}: must be a non-negative integer")]
    InvalidArgument(i64),
}

// =============================================================================
// Wire Inputs and Snapshots
// =============================================================================

/// Input for adding one unit of a product to the cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub product_id: u64,

    /// Optional session identifier; wins over the session cookie
    pub session_id: Option<String>,
}

/// Input for removing a cart line
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartInput {
    pub product_id: u64,
    pub session_id: Option<String>,
}

/// Input for setting the exact quantity of a cart line
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityInput {
    pub product_id: u64,

    /// Signed on the wire so that negative values can be rejected rather
    /// than failing to parse
    pub quantity: i64,
    pub session_id: Option<String>,
}

/// Input for checkout
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub session_id: Option<String>,
}

/// Query string carrying an optional explicit session id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

/// The cart as seen by the presentation layer after any operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub session_id: String,
    pub lines: Vec<CartLine>,

    /// Sum of price × quantity over all lines
    pub total: u64,

    /// Sum of quantities over all lines
    pub item_count: u64,
}

/// Response for checkout operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub status: String,
    pub session_id: String,
    pub total: u64,

    /// Human-readable one-line order summary
    pub summary: String,
}
