/// Image lookup provider abstraction
///
/// Poster URLs that are not hardcoded in the catalog are resolved through
/// an external image-search API. The trait keeps the catalog listing path
/// independent of the concrete provider and mockable in tests.
pub mod google;

pub use google::GoogleImageProvider;

/// Fallback poster URL whenever the real lookup cannot complete.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/200x250?text=No+Image";

/// Trait for image search providers
///
/// `fetch_image_url` is total from the caller's perspective: every upstream
/// failure (missing credentials, transport error, non-2xx, empty result
/// set) resolves to the placeholder URL rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync {
    /// Resolve a free-text query to an image URL, or the placeholder.
    async fn fetch_image_url(&self, query: &str) -> String;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
