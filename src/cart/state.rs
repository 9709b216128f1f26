//! Storefront State Management
//!
//! This module manages the application state: the immutable catalog, the
//! per-session cart and selection state, and the widget asset directory.

use super::models::CartLine;
use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::selection::models::Selection;
use dashmap::DashMap;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Everything owned by one storefront session: the cart plus the transient
/// selection state. Sessions never share state with each other.
#[derive(Debug, Default)]
pub struct Session {
    pub cart: Vec<CartLine>,
    pub selection: Selection,
}

/// Core application state containing the catalog, sessions, and asset
/// information
pub struct AppState {
    /// The immutable storefront catalog, seeded at startup
    pub catalog: CatalogStore,

    /// Per-session state, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, Session>,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with no sessions and locates the assets
    /// directory
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let assets_dir = Self::locate_assets_directory(&current_dir);

        tracing::info!(assets_dir = %assets_dir.display(), "using assets directory");

        Self {
            catalog: CatalogStore::new(),
            sessions: DashMap::new(),
            assets_dir,
        }
    }

    /// Creates the state from runtime configuration, honoring an explicit
    /// assets directory when one is configured.
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.assets_dir {
            Some(dir) => Self {
                catalog: CatalogStore::new(),
                sessions: DashMap::new(),
                assets_dir: dir.clone(),
            },
            None => Self::new(),
        }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // Strategy to locate assets:
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets") // Fallback
    }

    /// Reads the storefront.html file or a fallback version
    pub async fn load_widget_html(&self) -> Result<String, axum::http::StatusCode> {
        // First try the primary HTML file
        let primary_html_path = self.assets_dir.join("storefront.html");
        if primary_html_path.exists() {
            return tokio::fs::read_to_string(primary_html_path)
                .await
                .map_err(|_| axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        }

        // Search for fallbacks (e.g., storefront-123.html)
        let fallback_path = self.find_fallback_html_file().await?;

        tokio::fs::read_to_string(fallback_path)
            .await
            .map_err(|_| axum::http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Finds a fallback HTML file when the primary one is not available
    async fn find_fallback_html_file(&self) -> Result<PathBuf, axum::http::StatusCode> {
        let mut entries = tokio::fs::read_dir(&self.assets_dir)
            .await
            .map_err(|_| axum::http::StatusCode::NOT_FOUND)?;

        let mut fallbacks = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with("storefront-") && name.ends_with(".html") {
                    fallbacks.push(path);
                }
            }
        }

        // Use the lexicographically last fallback (likely the latest build)
        fallbacks.sort();
        fallbacks
            .last()
            .cloned()
            .ok_or(axum::http::StatusCode::NOT_FOUND)
    }
}
