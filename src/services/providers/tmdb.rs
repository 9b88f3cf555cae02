//! TMDB (The Movie Database) poster provider
//!
//! Looks up `/movie/{id}` and joins the returned `poster_path` onto the
//! configured image base URL. Resolved posters are cached in Redis.

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{MovieId, Poster, TmdbMovieDetails},
    services::providers::PosterProvider,
};
use chrono::Utc;
use reqwest::{Client as HttpClient, StatusCode};

const POSTER_CACHE_TTL: u64 = 604800; // 1 week

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
    language: String,
    cache: Cache,
}

impl TmdbProvider {
    pub fn new(
        cache: Cache,
        api_key: String,
        api_url: String,
        image_base_url: String,
        language: String,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            image_base_url,
            language,
            cache,
        }
    }

    async fn request_poster(&self, movie_id: MovieId) -> AppResult<Poster> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "Movie {} not found on TMDB",
                movie_id
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        // Errors must not carry the URL: it holds the API key
        let details: TmdbMovieDetails = response
            .json()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;
        let poster = poster_from_details(&self.image_base_url, movie_id, details)?;

        tracing::info!(
            movie_id = %movie_id,
            provider = "tmdb",
            "Poster fetched"
        );

        Ok(poster)
    }
}

/// Joins a TMDB poster path (usually with a leading '/') onto the image base URL
fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base_url.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}

fn poster_from_details(
    image_base_url: &str,
    movie_id: MovieId,
    details: TmdbMovieDetails,
) -> AppResult<Poster> {
    let poster_path = details
        .poster_path
        .filter(|path| !path.trim().is_empty())
        .ok_or_else(|| AppError::NotFound(format!("No poster for movie {}", movie_id)))?;

    Ok(Poster {
        movie_id,
        url: poster_url(image_base_url, &poster_path),
        fetched_at: Utc::now(),
    })
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn fetch_poster(&self, movie_id: &MovieId) -> AppResult<Poster> {
        let movie_id = *movie_id;
        cached!(
            self.cache,
            CacheKey::Poster(movie_id),
            POSTER_CACHE_TTL,
            self.request_poster(movie_id)
        )
    }

    fn clone_for_task(&self) -> Box<dyn PosterProvider> {
        Box::new(self.clone())
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
