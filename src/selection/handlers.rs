//! REST API handlers for selection state
//!
//! Every operation responds with the selection snapshot after the change,
//! with the open product resolved against the catalog.

use super::models::*;
use crate::cart::helpers::{
    get_or_default_session_id, resolve_session_id, with_session_cookie,
};
use crate::cart::models::SessionQuery;
use crate::cart::state::{AppState, SharedState};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

/// Creates routes for selection-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/selection", get(selection_view))
        .route("/selection/category", post(select_category))
        .route("/selection/open", post(open_product))
        .route("/selection/close", post(close_product))
        .route("/selection/image", post(select_image))
}

/// Builds the snapshot for a session's selection, resolving the open
/// product against the catalog.
fn selection_snapshot(state: &AppState, session_id: String, selection: &Selection) -> SelectionSnapshot {
    let viewing = selection
        .viewing()
        .and_then(|(product_id, image_index)| {
            state
                .catalog
                .product(product_id)
                .map(|product| (product.clone(), image_index))
        });

    match viewing {
        Some((product, image_index)) => SelectionSnapshot {
            session_id,
            selected_category: selection.selected_category.clone(),
            display_image: Some(product.display_image(image_index).to_string()),
            selected_image_index: Some(image_index),
            selected_product: Some(product),
        },
        None => SelectionSnapshot {
            session_id,
            selected_category: selection.selected_category.clone(),
            selected_product: None,
            selected_image_index: None,
            display_image: None,
        },
    }
}

/// Endpoint: GET /selection
/// Returns the current selection snapshot without mutating anything.
async fn selection_view(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(query.session_id, &cookie_id);

    let snapshot = match state.sessions.get(&session_id) {
        Some(session) => selection_snapshot(&state, session_id.clone(), &session.selection),
        None => selection_snapshot(&state, session_id.clone(), &Selection::default()),
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /selection/category
/// Switches the active category filter for the session.
async fn select_category(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<SelectCategoryInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let snapshot = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        session.selection.select_category(payload.category);
        selection_snapshot(&state, session_id.clone(), &session.selection)
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /selection/open
/// Opens a product in the detail view; the gallery position resets to 0.
async fn open_product(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<OpenProductInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    if state.catalog.product(payload.product_id).is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown product id {}", payload.product_id) })),
        )
            .into_response();
    }

    let snapshot = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        session.selection.open_product(payload.product_id);
        selection_snapshot(&state, session_id.clone(), &session.selection)
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /selection/close
/// Closes the detail view.
async fn close_product(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CloseProductInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let snapshot = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        session.selection.close_product();
        selection_snapshot(&state, session_id.clone(), &session.selection)
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /selection/image
/// Moves the gallery position. Ignored silently when no product is open.
async fn select_image(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<SelectImageInput>,
) -> Response {
    let (cookie_id, is_new_session) = resolve_session_id(&headers);
    let session_id = get_or_default_session_id(payload.session_id, &cookie_id);

    let snapshot = {
        let mut session = state.sessions.entry(session_id.clone()).or_default();
        session.selection.select_image(payload.index);
        selection_snapshot(&state, session_id.clone(), &session.selection)
    };

    with_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}
