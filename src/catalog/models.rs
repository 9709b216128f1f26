//! Catalog Domain Models
//!
//! This module contains the data structures for the static storefront
//! catalog. All of them are seeded once at startup and never mutated.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Sentinel category id that selects the whole catalog
pub const CATEGORY_ALL: &str = "all";

// =============================================================================
// Catalog Models
// =============================================================================

/// A catalog entry. `id` values are unique and stable for the process
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identity key
    pub id: u64,

    /// Display name
    pub name: String,

    /// Price in minor-unit-free currency (whole rubles)
    pub price: u32,

    /// Category id; compared verbatim against filter arguments
    pub category: String,

    /// Primary image reference
    pub image: String,

    /// Optional ordered gallery for the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Average rating in [0, 5]
    pub rating: f64,

    /// Denormalized review count shown on the card; independent of the
    /// `Review` records actually present
    pub reviews: u32,

    /// Short card description
    pub description: String,

    /// Optional extended text for the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,

    /// Optional specification lines for the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Vec<String>>,
}

impl Product {
    /// Resolves the image to display for a gallery position.
    ///
    /// Falls back to the primary `image` whenever the gallery is absent,
    /// empty, or the index is out of range.
    pub fn display_image(&self, index: usize) -> &str {
        match &self.images {
            Some(images) => images.get(index).map(String::as_str).unwrap_or(&self.image),
            None => &self.image,
        }
    }
}

/// A customer review attached to a product by id.
///
/// `product_id` is not enforced as a foreign key; a dangling reference just
/// never shows up in lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub product_id: u64,
    pub author: String,

    /// Star rating, integer in [1, 5]
    pub rating: u8,
    pub comment: String,

    /// Calendar date in ISO text form
    pub date: String,
}

/// A filterable product category shown in the storefront chrome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,

    /// Icon name consumed by the widget
    pub icon: String,
}
