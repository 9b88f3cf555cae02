use crate::{
    error::{AppError, AppResult},
    models::{MovieCard, MovieKey},
    services::{providers::PosterProvider, recommender::RecommenderContext},
};

/// Content-based recommendations for one selected movie
///
/// Runs the similarity lookup, then decorates each neighbour with its poster.
/// Lookup errors are returned unchanged; poster failures only blank the
/// affected card's `poster_url`.
pub async fn recommend(
    context: &RecommenderContext,
    posters: &dyn PosterProvider,
    key: &MovieKey,
    k: usize,
) -> AppResult<Vec<MovieCard>> {
    let neighbors = context.similar(key, k)?;

    let ids = neighbors.iter().map(|n| n.movie.movie_id).collect();
    let urls = posters.fetch_posters_batch(ids).await;

    let cards = neighbors
        .into_iter()
        .zip(urls)
        .map(|(neighbor, (_, poster_url))| MovieCard {
            movie_id: neighbor.movie.movie_id,
            title: neighbor.movie.title,
            score: Some(neighbor.score),
            poster_url,
        })
        .collect();

    Ok(cards)
}

/// The first `limit` movies of the demographic ranking, with posters
pub async fn top_movies(
    context: &RecommenderContext,
    posters: &dyn PosterProvider,
    limit: usize,
) -> AppResult<Vec<MovieCard>> {
    if limit == 0 {
        return Err(AppError::InvalidInput("Limit must be positive".to_string()));
    }

    let ranked = context.top_movies(limit);
    let ids = ranked.iter().map(|m| m.movie_id).collect();
    let urls = posters.fetch_posters_batch(ids).await;

    Ok(ranked
        .iter()
        .zip(urls)
        .map(|(movie, (_, poster_url))| MovieCard {
            movie_id: movie.movie_id,
            title: movie.title.clone(),
            score: movie.score,
            poster_url,
        })
        .collect())
}
