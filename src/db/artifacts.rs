use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::{
    catalog::{Catalog, DemographicRanking, RankedMovie, SimilarityMatrix},
    error::{AppError, AppResult},
    models::Movie,
};

pub const CATALOG_FILE: &str = "movie_list.json";
pub const SIMILARITY_FILE: &str = "similarity.json";
pub const RANKING_FILE: &str = "movie_demographic.json";

/// The three precomputed snapshots, validated against each other
#[derive(Debug)]
pub struct ArtifactStore {
    pub catalog: Catalog,
    pub similarity: SimilarityMatrix,
    pub ranking: DemographicRanking,
}

impl ArtifactStore {
    /// Loads and validates all snapshots from `dir`
    pub fn load(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();

        let movies: Vec<Movie> = read_json(dir.join(CATALOG_FILE))?;
        let rows: Vec<Vec<f64>> = read_json(dir.join(SIMILARITY_FILE))?;
        let ranked: Vec<RankedMovie> = read_json(dir.join(RANKING_FILE))?;

        let mut store =
            Self::from_parts(Catalog::new(movies), SimilarityMatrix::from_rows(rows)?)?;
        store.ranking = DemographicRanking::new(ranked);

        tracing::info!(
            dir = %dir.display(),
            movies = store.catalog.len(),
            ranked = store.ranking.len(),
            "Loaded recommendation artifacts"
        );

        Ok(store)
    }

    /// Pairs an already built catalog and matrix, checking they share indexing
    pub fn from_parts(catalog: Catalog, similarity: SimilarityMatrix) -> AppResult<Self> {
        if similarity.dimension() != catalog.len() {
            return Err(AppError::InvalidInput(format!(
                "Similarity matrix dimension {} does not match catalog length {}",
                similarity.dimension(),
                catalog.len()
            )));
        }

        Ok(Self {
            catalog,
            similarity,
            ranking: DemographicRanking::default(),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: PathBuf) -> AppResult<T> {
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Artifact(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| AppError::Artifact(format!("Failed to parse {}: {}", path.display(), e)))
}
