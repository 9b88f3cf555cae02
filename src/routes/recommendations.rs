use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MovieCard, MovieId, MovieKey},
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub movie_id: Option<u64>,
    pub title: Option<String>,
    pub k: Option<usize>,
}

impl RecommendationQuery {
    /// Exactly one of `movie_id` or `title` must be given
    fn key(&self) -> AppResult<MovieKey> {
        match (self.movie_id, self.title.as_deref()) {
            (Some(id), None) => Ok(MovieKey::Id(MovieId(id))),
            (None, Some(title)) if !title.trim().is_empty() => {
                Ok(MovieKey::Title(title.to_string()))
            }
            (None, Some(_)) => Err(AppError::InvalidInput(
                "Title cannot be empty".to_string(),
            )),
            _ => Err(AppError::InvalidInput(
                "Provide exactly one of movie_id or title".to_string(),
            )),
        }
    }
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<MovieCard>>> {
    let key = params.key()?;
    let k = params.k.unwrap_or(state.settings.recommendation_count);

    tracing::info!(
        request_id = %request_id,
        movie = %key,
        k,
        "Processing recommendation request"
    );

    let cards =
        recommendations::recommend(&state.recommender, state.posters.as_ref(), &key, k).await?;

    tracing::info!(
        request_id = %request_id,
        results = cards.len(),
        "Recommendations completed"
    );

    Ok(Json(cards))
}
