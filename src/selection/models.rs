//! Selection State Models
//!
//! Transient per-session UI state. Nothing here is persisted; the state
//! lives exactly as long as the session does.

use crate::catalog::{Product, CATEGORY_ALL};
use serde::{Deserialize, Serialize};

// =============================================================================
// Selection State
// =============================================================================

/// The product detail view machine: either nothing is open, or one product
/// is being viewed at a gallery position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No product detail open
    Idle,

    /// One product open at a gallery position
    Viewing { product_id: u64, image_index: usize },
}

/// What one session is currently looking at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Active category filter; `"all"` selects the whole catalog
    pub selected_category: String,

    /// Product detail view state
    pub view: ViewState,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            selected_category: CATEGORY_ALL.to_string(),
            view: ViewState::Idle,
        }
    }
}

impl Selection {
    /// Switches the active category filter.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Opens a product in the detail view, resetting the gallery position.
    ///
    /// Re-opening while another product is shown replaces the subject and
    /// still resets the image index to 0.
    pub fn open_product(&mut self, product_id: u64) {
        self.view = ViewState::Viewing {
            product_id,
            image_index: 0,
        };
    }

    /// Closes the detail view. The old image index is dropped with it.
    pub fn close_product(&mut self) {
        self.view = ViewState::Idle;
    }

    /// Moves the gallery position while a product is open.
    ///
    /// The index is stored as given; image resolution falls back to the
    /// product's primary image for out-of-range positions. Returns false
    /// (and changes nothing) when no product is open.
    pub fn select_image(&mut self, index: usize) -> bool {
        match &mut self.view {
            ViewState::Viewing { image_index, .. } => {
                *image_index = index;
                true
            }
            ViewState::Idle => false,
        }
    }

    /// The open product and gallery position, if any.
    pub fn viewing(&self) -> Option<(u64, usize)> {
        match self.view {
            ViewState::Viewing {
                product_id,
                image_index,
            } => Some((product_id, image_index)),
            ViewState::Idle => None,
        }
    }
}

// =============================================================================
// Wire Inputs and Snapshots
// =============================================================================

/// Input for switching the category filter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCategoryInput {
    pub category: String,
    pub session_id: Option<String>,
}

/// Input for opening a product in the detail view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenProductInput {
    pub product_id: u64,
    pub session_id: Option<String>,
}

/// Input for closing the detail view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseProductInput {
    pub session_id: Option<String>,
}

/// Input for moving the gallery position
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectImageInput {
    pub index: usize,
    pub session_id: Option<String>,
}

/// The selection as seen by the presentation layer after any operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub session_id: String,
    pub selected_category: String,

    /// The open product, resolved against the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_product: Option<Product>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_image_index: Option<usize>,

    /// The image the detail view should show right now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_image: Option<String>,
}
