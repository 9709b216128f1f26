//! REST API handlers for shopping cart operations
//!
//! Every mutation responds with the cart snapshot after the operation, so
//! the widget can re-render without a second round-trip.

use super::{helpers::*, models::*, state::SharedState};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(cart_view))
        .route("/cart/add", post(cart_add))
        .route("/cart/remove", post(cart_remove))
        .route("/cart/quantity", post(cart_quantity))
        .route("/checkout", post(checkout))
}

/// Endpoint: GET /cart
/// Returns the current cart snapshot without mutating anything.
async fn cart_view(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(query.session_id, &cookie_id);

    let snapshot = match state.sessions.get(&session_id) {
        Some(session) => cart_snapshot(session_id.clone(), &session.cart),
        None => cart_snapshot(session_id.clone(), &[]),
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/add
/// Adds one unit of the product to the session cart.
async fn cart_add(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddToCartInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let Some(product) = state.catalog.product(payload.product_id).cloned() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown product id {}", payload.product_id) })),
        )
            .into_response();
    };

    let snapshot = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        add_to_cart(&mut session.cart, product);
        cart_snapshot(session_id.clone(), &session.cart)
    };

    tracing::debug!(session = %session_id, total = snapshot.total, "cart add");
    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/remove
/// Deletes the line for the product. A missing line is not an error.
async fn cart_remove(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveFromCartInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let snapshot = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        remove_from_cart(&mut session.cart, payload.product_id);
        cart_snapshot(session_id.clone(), &session.cart)
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/quantity
/// Sets the exact quantity for a line; 0 removes it, negatives are rejected.
async fn cart_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateQuantityInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let result = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        update_quantity(&mut session.cart, payload.product_id, payload.quantity)
            .map(|()| cart_snapshot(session_id.clone(), &session.cart))
    };

    match result {
        Ok(snapshot) => {
            with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

/// Endpoint: POST /checkout
/// Clears the session cart and returns a receipt. Payment is out of scope;
/// the order is only logged.
async fn checkout(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let lines = state
        .sessions
        .get_mut(&session_id)
        .map(|mut session| std::mem::take(&mut session.cart))
        .unwrap_or_default();

    let total = cart_total(&lines);
    let summary = format_item_summary(&lines);
    if !lines.is_empty() {
        tracing::info!(session = %session_id, total, %summary, "checkout");
    }

    let receipt = CheckoutReceipt {
        status: "checked_out".to_string(),
        session_id: session_id.clone(),
        total,
        summary,
    };

    with_session_cookie(Json(receipt).into_response(), &session_id, is_new_session)
}
