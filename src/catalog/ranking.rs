use serde::{Deserialize, Serialize};

use crate::models::MovieId;

/// Entry of the demographic ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMovie {
    pub movie_id: MovieId,
    pub title: String,
    /// Precomputed weighted rating, when the snapshot carries one
    #[serde(default)]
    pub score: Option<f64>,
}

/// Static "top movies" ordering, independent of catalog indexing
#[derive(Debug, Clone, Default)]
pub struct DemographicRanking {
    movies: Vec<RankedMovie>,
}

impl DemographicRanking {
    pub fn new(movies: Vec<RankedMovie>) -> Self {
        Self { movies }
    }

    /// Number of ranked movies
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The first `n` entries in stored order
    pub fn top(&self, n: usize) -> &[RankedMovie] {
        &self.movies[..n.min(self.movies.len())]
    }
}
