use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Google Custom Search API key; absent means poster lookups degrade
    /// to the placeholder image
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Google Custom Search engine (context) id
    #[serde(default)]
    pub google_cx: Option<String>,

    /// Image search endpoint
    #[serde(default = "default_image_search_url")]
    pub image_search_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_image_search_url() -> String {
    "https://www.googleapis.com/customsearch/v1".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_cx: None,
            image_search_url: default_image_search_url(),
            host: default_host(),
            port: default_port(),
        }
    }
}
