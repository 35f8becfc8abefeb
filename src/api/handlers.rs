use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::MovieListing;
use crate::services::resolver;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    title: String,
}

/// Landing page
pub async fn homepage() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Catalog listing with resolved poster URLs
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<MovieListing>> {
    let listings = state.store.list(state.images.as_ref()).await;
    Json(listings)
}

/// Purchase one share of a movie
///
/// Unknown ids report a JSON error payload with HTTP 200, matching the
/// behavior the front-end script expects.
pub async fn buy_stock(State(state): State<AppState>, Path(movie_id): Path<u32>) -> Json<Value> {
    match state.store.purchase(movie_id).await {
        Some(shares) => {
            tracing::info!(movie_id, shares, "Share purchased");
            Json(json!({ "message": "Stock purchased!", "shares": shares }))
        }
        None => Json(json!({ "error": "Movie not found" })),
    }
}

/// Resolve a free-text title to the closest catalog title
pub async fn predict_movie(
    State(state): State<AppState>,
    Query(params): Query<PredictQuery>,
) -> Json<Value> {
    match resolver::resolve(state.store.movies(), &params.title) {
        Some(found) => Json(json!({ "match": found.title, "exact": found.exact })),
        None => Json(json!({ "error": "No similar movie found" })),
    }
}
