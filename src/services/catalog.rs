use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::{Movie, MovieListing};
use crate::services::providers::ImageProvider;

/// In-memory movie catalog plus the per-movie purchased-share ledger.
///
/// The catalog itself is immutable after construction; the ledger is the
/// only mutable state in the process and sits behind a write lock so that
/// concurrent purchases never lose an increment.
pub struct CatalogStore {
    movies: Vec<Movie>,
    shares: RwLock<HashMap<u32, u64>>,
}

impl CatalogStore {
    /// Creates a store over the given catalog, with every share count at zero.
    pub fn new(movies: Vec<Movie>) -> Self {
        let shares = movies.iter().map(|movie| (movie.id, 0)).collect();
        Self {
            movies,
            shares: RwLock::new(shares),
        }
    }

    /// The catalog, in seed order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Builds one listing per catalog entry, in catalog order.
    ///
    /// Entries without a hardcoded poster path go through the image
    /// provider on every call; lookup results are not cached back into
    /// the catalog.
    pub async fn list(&self, images: &dyn ImageProvider) -> Vec<MovieListing> {
        let mut listings = Vec::with_capacity(self.movies.len());

        for movie in &self.movies {
            let poster = if movie.poster.is_empty() {
                let query = format!("{} movie poster", movie.title);
                images.fetch_image_url(&query).await
            } else {
                movie.poster.clone()
            };

            listings.push(MovieListing {
                id: movie.id,
                title: movie.title.clone(),
                stock_price: movie.stock_price,
                poster,
            });
        }

        listings
    }

    /// Increments the share count for `movie_id` and returns the new count,
    /// or `None` when the id is not in the catalog.
    pub async fn purchase(&self, movie_id: u32) -> Option<u64> {
        let mut shares = self.shares.write().await;
        let count = shares.get_mut(&movie_id)?;
        *count += 1;
        Some(*count)
    }

    /// Current share count for `movie_id`.
    pub async fn shares(&self, movie_id: u32) -> Option<u64> {
        self.shares.read().await.get(&movie_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_catalog;
    use crate::services::providers::MockImageProvider;

    #[test]
    fn ledger_starts_at_zero_for_every_movie() {
        let store = CatalogStore::new(seed_catalog());

        for movie in store.movies() {
            let count = tokio_test::block_on(store.shares(movie.id));
            assert_eq!(count, Some(0));
        }
    }

    #[tokio::test]
    async fn sequential_purchases_accumulate() {
        let store = CatalogStore::new(seed_catalog());

        for expected in 1..=5 {
            assert_eq!(store.purchase(1).await, Some(expected));
        }
        assert_eq!(store.shares(1).await, Some(5));
        // Other entries untouched
        assert_eq!(store.shares(2).await, Some(0));
        assert_eq!(store.shares(3).await, Some(0));
    }

    #[tokio::test]
    async fn purchase_unknown_id_leaves_ledger_unchanged() {
        let store = CatalogStore::new(seed_catalog());

        assert_eq!(store.purchase(999).await, None);
        assert_eq!(store.purchase(999).await, None);

        for movie in store.movies() {
            assert_eq!(store.shares(movie.id).await, Some(0));
        }
        assert_eq!(store.shares(999).await, None);
    }

    #[tokio::test]
    async fn concurrent_purchases_never_lose_updates() {
        let store = std::sync::Arc::new(CatalogStore::new(seed_catalog()));

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.purchase(3).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.shares(3).await, Some(50));
    }

    #[tokio::test]
    async fn list_preserves_catalog_order_and_resolves_missing_posters() {
        let store = CatalogStore::new(seed_catalog());

        let mut images = MockImageProvider::new();
        images
            .expect_fetch_image_url()
            .withf(|query| query == "Lucky Baskhar movie poster")
            .times(1)
            .returning(|_| "https://img.example/lucky-baskhar.jpg".to_string());

        let listings = store.list(&images).await;

        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Thangalaan", "Lucky Baskhar", "Salaar"]);

        assert_eq!(listings[0].poster, "/static/posters/thangalaan.jpg");
        assert_eq!(listings[1].poster, "https://img.example/lucky-baskhar.jpg");
        assert_eq!(listings[2].poster, "/static/posters/salaar.jpg");
    }

    #[tokio::test]
    async fn list_retriggers_lookup_on_every_call() {
        let store = CatalogStore::new(seed_catalog());

        let mut images = MockImageProvider::new();
        images
            .expect_fetch_image_url()
            .times(2)
            .returning(|_| "https://img.example/poster.jpg".to_string());

        store.list(&images).await;
        store.list(&images).await;
    }
}
