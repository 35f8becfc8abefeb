use std::sync::Arc;

use crate::config::Config;
use crate::models::seed_catalog;
use crate::services::providers::{GoogleImageProvider, ImageProvider};
use crate::services::CatalogStore;

/// Shared application state
///
/// Owns the catalog store and the image provider; cloned into every
/// handler via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub images: Arc<dyn ImageProvider>,
}

impl AppState {
    /// Builds the state for the demo catalog and the configured image
    /// provider.
    pub fn new(config: &Config) -> Self {
        Self::with_provider(Arc::new(GoogleImageProvider::new(config)))
    }

    /// Builds the state with a caller-supplied image provider.
    pub fn with_provider(images: Arc<dyn ImageProvider>) -> Self {
        Self {
            store: Arc::new(CatalogStore::new(seed_catalog())),
            images,
        }
    }
}
