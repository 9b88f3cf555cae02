use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for a movie (the TMDB movie id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the movie catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
}

impl Movie {
    pub fn new(movie_id: u64, title: impl Into<String>) -> Self {
        Self {
            movie_id: MovieId(movie_id),
            title: title.into(),
        }
    }
}

/// How a caller names the movie it wants neighbours for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieKey {
    Id(MovieId),
    Title(String),
}

impl Display for MovieKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieKey::Id(id) => write!(f, "id {}", id),
            MovieKey::Title(title) => write!(f, "title '{}'", title),
        }
    }
}

/// A single similarity lookup hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub movie: Movie,
    pub score: f64,
}

/// A resolved poster image for a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    pub movie_id: MovieId,
    pub url: String,
    pub fetched_at: DateTime<Utc>,
}

/// A movie as rendered to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCard {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub poster_url: Option<String>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response of GET /movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}
