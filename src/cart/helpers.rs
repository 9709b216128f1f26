//! Shopping Cart Business Logic Helpers
//!
//! The cart engine proper: every mutation is synchronous and immediately
//! visible to the next read. Lines are kept in first-insertion order, keyed
//! by product id, with at most one line per id.

use super::models::{CartError, CartLine, CartSnapshot};
use crate::catalog::Product;
use axum::http::{header, HeaderMap};
use axum::response::Response;
use uuid::Uuid;

// =============================================================================
// Cart Engine
// =============================================================================

/// Adds one unit of `product` to the cart.
///
/// If a line for `product.id` already exists its quantity is incremented by
/// one and the stored snapshot is kept as-is; otherwise a new line with
/// quantity 1 is appended at the end of iteration order. Always succeeds.
pub fn add_to_cart(lines: &mut Vec<CartLine>, product: Product) {
    if let Some(existing) = lines.iter_mut().find(|l| l.product.id == product.id) {
        existing.quantity += 1;
    } else {
        lines.push(CartLine {
            product,
            quantity: 1,
        });
    }
}

/// Deletes the line for `product_id`. Silent no-op when absent.
pub fn remove_from_cart(lines: &mut Vec<CartLine>, product_id: u64) {
    lines.retain(|l| l.product.id != product_id);
}

/// Sets the exact quantity of the line for `product_id`.
///
/// A quantity of 0 behaves exactly like [`remove_from_cart`]. Positive
/// quantities overwrite the line's quantity when the line exists and are a
/// no-op otherwise. Negative quantities (and values beyond `u32::MAX`) are
/// rejected with [`CartError::InvalidArgument`], leaving the cart unchanged.
pub fn update_quantity(
    lines: &mut Vec<CartLine>,
    product_id: u64,
    quantity: i64,
) -> Result<(), CartError> {
    let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidArgument(quantity))?;

    if quantity == 0 {
        remove_from_cart(lines, product_id);
        return Ok(());
    }

    if let Some(line) = lines.iter_mut().find(|l| l.product.id == product_id) {
        line.quantity = quantity;
    }
    Ok(())
}

/// Sum of price × quantity over all lines. 0 for an empty cart.
pub fn cart_total(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(|l| u64::from(l.product.price) * u64::from(l.quantity))
        .sum()
}

/// Sum of quantities over all lines. 0 for an empty cart.
pub fn cart_item_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity)).sum()
}

/// Builds the snapshot returned to the presentation layer after an
/// operation.
pub fn cart_snapshot(session_id: String, lines: &[CartLine]) -> CartSnapshot {
    CartSnapshot {
        session_id,
        total: cart_total(lines),
        item_count: cart_item_count(lines),
        lines: lines.to_vec(),
    }
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Плед, 1x Гриль"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Session Resolution
// =============================================================================

/// Cookie carrying the storefront session id
pub const SESSION_COOKIE: &str = "cart_session";

/// Resolves the session id from the `Cookie` header.
///
/// Returns the id plus a flag telling the caller whether a fresh id was
/// minted (and therefore needs a `Set-Cookie` on the way out).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for pair in cookies.split(';') {
            if let Some(value) = pair.trim().strip_prefix(SESSION_COOKIE) {
                if let Some(value) = value.strip_prefix('=') {
                    if !value.is_empty() {
                        return (value.to_string(), false);
                    }
                }
            }
        }
    }
    (Uuid::new_v4().simple().to_string(), true)
}

/// Returns the explicitly supplied session id when present, else the one
/// resolved from the cookie.
pub fn get_or_default_session_id(explicit: Option<String>, session_id: &str) -> String {
    explicit.unwrap_or_else(|| session_id.to_string())
}

/// Returns the provided session id or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty
/// identifier.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Attaches the session cookie to a response when the id was freshly minted.
pub fn with_session_cookie(mut response: Response, session_id: &str, is_new_session: bool) -> Response {
    if is_new_session {
        let cookie_val = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id);
        response
            .headers_mut()
            .insert(header::SET_COOKIE, cookie_val.parse().unwrap());
    }
    response
}
