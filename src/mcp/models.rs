//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the catalog browsing tool
pub const BROWSE_TOOL_NAME: &str = "browse_catalog";
/// Name of the tool adding one unit of a product to the cart
pub const ADD_TO_CART_TOOL_NAME: &str = "add_to_cart";
/// Name of the tool setting the exact quantity of a cart line
pub const UPDATE_QUANTITY_TOOL_NAME: &str = "update_quantity";
/// Name of the checkout tool
pub const CHECKOUT_TOOL_NAME: &str = "checkout";
/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/storefront.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "storefront-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

// =============================================================================
// Tool Inputs
// =============================================================================

/// Arguments for the browse_catalog tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseCatalogArgs {
    /// Category filter; omitted means the whole catalog
    pub category: Option<String>,
    pub session_id: Option<String>,
}

/// Arguments for the add_to_cart tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartArgs {
    pub product_id: u64,
    pub session_id: Option<String>,
}

/// Arguments for the update_quantity tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityArgs {
    pub product_id: u64,
    pub quantity: i64,
    pub session_id: Option<String>,
}

/// Arguments for the checkout tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutArgs {
    pub session_id: Option<String>,
}
