use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Movie, MovieCard},
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    limit: Option<usize>,
}

/// Handler listing the whole catalog, in catalog order
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(state.recommender.catalog().movies().to_vec())
}

/// Handler for the demographic "top movies" list
pub async fn top(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopQuery>,
) -> AppResult<Json<Vec<MovieCard>>> {
    let limit = params.limit.unwrap_or(state.settings.top_movies_count);
    let cards = recommendations::top_movies(&state.recommender, state.posters.as_ref(), limit)
        .await?;
    Ok(Json(cards))
}
