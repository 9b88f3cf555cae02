use std::sync::Arc;

use crate::{
    catalog::{Catalog, DemographicRanking, RankedMovie, SimilarityMatrix},
    db::ArtifactStore,
    error::AppResult,
    models::{MovieKey, Neighbor},
    services::similarity::top_k_similar,
};

/// Read-only recommendation snapshot shared by every request
///
/// Cloning is cheap; all clones point at the same immutable data.
#[derive(Debug, Clone)]
pub struct RecommenderContext {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityMatrix>,
    ranking: Arc<DemographicRanking>,
}

impl RecommenderContext {
    pub fn new(store: ArtifactStore) -> Self {
        Self {
            catalog: Arc::new(store.catalog),
            similarity: Arc::new(store.similarity),
            ranking: Arc::new(store.ranking),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similar(&self, key: &MovieKey, k: usize) -> AppResult<Vec<Neighbor>> {
        top_k_similar(key, &self.catalog, &self.similarity, k)
    }

    pub fn top_movies(&self, n: usize) -> &[RankedMovie] {
        self.ranking.top(n)
    }
}
