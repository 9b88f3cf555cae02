use std::collections::HashMap;

use crate::models::{Movie, MovieId, MovieKey};

/// Ordered movie catalog with prebuilt lookup maps
///
/// Duplicate ids or titles are kept in place (they still own their matrix
/// row), but only the first occurrence is reachable through the lookup maps.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<MovieId, usize>,
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog and its id/title lookup maps in one pass
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        let mut by_title = HashMap::with_capacity(movies.len());

        for (index, movie) in movies.iter().enumerate() {
            by_id.entry(movie.movie_id).or_insert(index);
            by_title.entry(movie.title.clone()).or_insert(index);
        }

        let shadowed_ids = movies.len() - by_id.len();
        if shadowed_ids > 0 {
            tracing::warn!(
                duplicate_ids = shadowed_ids,
                "Catalog contains duplicate movie ids; first occurrence wins"
            );
        }

        let shadowed_titles = movies.len() - by_title.len();
        if shadowed_titles > 0 {
            tracing::warn!(
                duplicate_titles = shadowed_titles,
                "Catalog contains duplicate titles; first occurrence wins"
            );
        }

        Self {
            movies,
            by_id,
            by_title,
        }
    }

    /// Number of movies, duplicates included
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movie at a catalog (and matrix) position
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Matrix row of the first movie with this id
    pub fn index_of(&self, movie_id: &MovieId) -> Option<usize> {
        self.by_id.get(movie_id).copied()
    }

    /// Exact, case-sensitive title match
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Matrix row for an id or title key, `None` if the catalog has no such movie
    pub fn resolve(&self, key: &MovieKey) -> Option<usize> {
        match key {
            MovieKey::Id(id) => self.index_of(id),
            MovieKey::Title(title) => self.index_of_title(title),
        }
    }
}
