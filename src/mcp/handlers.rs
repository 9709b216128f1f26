//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the
//! storefront. It exports `handle_tool_call` publicly to make it accessible
//! for tests.

use super::{helpers::*, models::*};
use crate::cart::{helpers::*, state::*};
use crate::catalog::CATEGORY_ALL;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "JSON parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = method_name, id = ?id, "MCP call");

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => rpc_success(id, handle_resources_read(&state).await),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg), // Invalid params or internal error
            }
        }
        "ping" => rpc_success(id, json!({})), // Optional but good for health checks
        _ => {
            tracing::warn!(method = method_name, "unknown MCP method");
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true, "subscribe": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": "0.1.0"
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": BROWSE_TOOL_NAME,
                "title": "Browse the catalog",
                "description": "Lists catalog products, optionally filtered to one category, and remembers the filter for the session.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "default": "all" },
                        "sessionId": { "type": "string" }
                    },
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": ADD_TO_CART_TOOL_NAME,
                "title": "Add a product to the cart",
                "description": "Adds one unit of the product to the active cart and returns its state. Call repeatedly for more units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "productId": { "type": "integer" },
                        "sessionId": { "type": "string" }
                    },
                    "required": ["productId"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": UPDATE_QUANTITY_TOOL_NAME,
                "title": "Set a cart line quantity",
                "description": "Sets the exact quantity of a cart line; 0 removes the line.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "productId": { "type": "integer" },
                        "quantity": { "type": "integer", "minimum": 0 },
                        "sessionId": { "type": "string" }
                    },
                    "required": ["productId", "quantity"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            },
            {
                "name": CHECKOUT_TOOL_NAME,
                "title": "Checkout",
                "description": "Checks out the current cart, clearing it and returning a receipt.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "sessionId": { "type": "string" }
                    },
                    "additionalProperties": false
                },
                "_meta": widget_meta(None)
            }
        ],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "name": "Open the storefront",
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `resources/read` request.
async fn handle_resources_read(state: &AppState) -> Value {
    let html = state.load_widget_html().await.unwrap_or_default();
    json!({
        "contents": [{
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "text": html,
            "_meta": widget_meta(None)
        }],
        "_meta": widget_meta(None)
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    match name {
        BROWSE_TOOL_NAME => handle_browse_catalog_tool(state, args),
        ADD_TO_CART_TOOL_NAME => handle_add_to_cart_tool(state, args),
        UPDATE_QUANTITY_TOOL_NAME => handle_update_quantity_tool(state, args),
        CHECKOUT_TOOL_NAME => handle_checkout_tool(state, args),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Handles the browse_catalog tool functionality
fn handle_browse_catalog_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: BrowseCatalogArgs =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let session_id = get_or_create_session_id(input.session_id);
    let category = input.category.unwrap_or_else(|| CATEGORY_ALL.to_string());

    // The filter is part of the session's selection state
    {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        session.selection.select_category(category.clone());
    }

    let products = state.catalog.products_by_category(&category);
    let message = format!(
        "Category {} lists {} product(s).",
        category,
        products.len()
    );

    Ok(json!({
        "content": [{ "type": "text", "text": message }],
        "structuredContent": {
            "sessionId": session_id,
            "category": category,
            "products": products
        },
        "_meta": widget_meta(Some(&session_id))
    }))
}

/// Handles the add_to_cart tool functionality
fn handle_add_to_cart_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: AddToCartArgs =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let session_id = get_or_create_session_id(input.session_id);

    let product = state
        .catalog
        .product(input.product_id)
        .cloned()
        .ok_or_else(|| format!("Unknown product id: {}", input.product_id))?;

    // Update or initialize the session cart
    let mut session = state.sessions.entry(session_id.clone()).or_default();
    add_to_cart(&mut session.cart, product);

    let snapshot = cart_snapshot(session_id.clone(), &session.cart);
    let message = format!(
        "Cart {} now has {} item(s).",
        session_id,
        snapshot.item_count
    );

    Ok(json!({
        "content": [{ "type": "text", "text": message }],
        "structuredContent": snapshot,
        "_meta": widget_meta(Some(&session_id))
    }))
}

/// Handles the update_quantity tool functionality
fn handle_update_quantity_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: UpdateQuantityArgs =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let session_id = get_or_create_session_id(input.session_id);

    let mut session = state.sessions.entry(session_id.clone()).or_default();
    update_quantity(&mut session.cart, input.product_id, input.quantity)
        .map_err(|e| e.to_string())?;

    let snapshot = cart_snapshot(session_id.clone(), &session.cart);
    let message = format!(
        "Cart {} now has {} item(s).",
        session_id,
        snapshot.item_count
    );

    Ok(json!({
        "content": [{ "type": "text", "text": message }],
        "structuredContent": snapshot,
        "_meta": widget_meta(Some(&session_id))
    }))
}

/// Handles the checkout tool functionality
fn handle_checkout_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: CheckoutArgs =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let session_id = get_or_create_session_id(input.session_id);

    let lines = state
        .sessions
        .get_mut(&session_id)
        .map(|mut session| std::mem::take(&mut session.cart))
        .unwrap_or_default();

    if !lines.is_empty() {
        let item_summary = format_item_summary(&lines);
        let message = format!("Checked out now: {}", item_summary);
        tracing::info!(session = %session_id, total = cart_total(&lines), "{}", message);

        Ok(json!({
            "content": [{ "type": "text", "text": message }],
            "structuredContent": {
                "sessionId": session_id,
                "lines": [],
                "total": 0,
                "itemCount": 0,
                "checkout": true
            },
            "_meta": widget_meta(Some(&session_id))
        }))
    } else {
        // Handle empty cart case
        Ok(json!({
            "content": [{ "type": "text", "text": "Cart is empty." }],
            "structuredContent": {
                "sessionId": session_id,
                "lines": [],
                "total": 0,
                "itemCount": 0,
                "checkout": true
            },
            "_meta": widget_meta(Some(&session_id))
        }))
    }
}
