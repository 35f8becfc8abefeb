use serde::{Deserialize, Serialize};

/// A catalog entry: a movie with a mock stock price.
///
/// An empty `poster` string means the poster URL is not hardcoded and must
/// be resolved through the configured image provider at listing time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// Unique identifier, assigned at catalog construction
    pub id: u32,
    /// Human-readable title, unique within the catalog
    pub title: String,
    /// Static mock price, never changes at runtime
    pub stock_price: u32,
    /// Hardcoded poster path, or empty to resolve via image lookup
    pub poster: String,
}

impl Movie {
    pub fn new(id: u32, title: &str, stock_price: u32, poster: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            stock_price,
            poster: poster.to_string(),
        }
    }
}

/// A catalog entry as served by `GET /api/movies`, with the poster URL
/// already resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieListing {
    pub id: u32,
    pub title: String,
    pub stock_price: u32,
    pub poster: String,
}

/// The fixed demo catalog, built once at startup.
pub fn seed_catalog() -> Vec<Movie> {
    vec![
        Movie::new(1, "Thangalaan", 150, "/static/posters/thangalaan.jpg"),
        Movie::new(2, "Lucky Baskhar", 220, ""),
        Movie::new(3, "Salaar", 180, "/static/posters/salaar.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_unique_ids_and_titles() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 3);
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn listing_serializes_to_expected_shape() {
        let listing = MovieListing {
            id: 3,
            title: "Salaar".to_string(),
            stock_price: 180,
            poster: "/static/posters/salaar.jpg".to_string(),
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Salaar",
                "stock_price": 180,
                "poster": "/static/posters/salaar.jpg"
            })
        );
    }
}
