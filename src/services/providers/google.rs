/// Google Custom Search image provider
///
/// Issues a single GET per lookup with `searchType=image` and `num=1`, and
/// extracts the first result's link. Credentials come from configuration;
/// when either is absent the provider skips the network entirely and
/// reports the placeholder.
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::providers::{ImageProvider, PLACEHOLDER_IMAGE_URL};

#[derive(Clone)]
pub struct GoogleImageProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    search_cx: Option<String>,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

impl GoogleImageProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.google_api_key.clone(),
            search_cx: config.google_cx.clone(),
            api_url: config.image_search_url.clone(),
        }
    }

    /// The fallible lookup; the trait impl absorbs every error path.
    async fn try_fetch(&self, query: &str) -> AppResult<String> {
        let (key, cx) = match (self.api_key.as_deref(), self.search_cx.as_deref()) {
            (Some(key), Some(cx)) if !key.is_empty() && !cx.is_empty() => (key, cx),
            _ => return Err(AppError::MissingCredentials),
        };

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("q", query),
                ("searchType", "image"),
                ("num", "1"),
                ("key", key),
                ("cx", cx),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalApi(format!(
                "image search returned status {}",
                status
            )));
        }

        let search_response: SearchResponse = response.json().await?;

        search_response
            .items
            .into_iter()
            .next()
            .map(|item| item.link)
            .ok_or_else(|| AppError::ExternalApi("no image results".to_string()))
    }
}

#[async_trait::async_trait]
impl ImageProvider for GoogleImageProvider {
    async fn fetch_image_url(&self, query: &str) -> String {
        match self.try_fetch(query).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(
                    query = %query,
                    error = %e,
                    provider = self.name(),
                    "Image lookup failed, using placeholder"
                );
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
