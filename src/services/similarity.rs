use crate::{
    catalog::{Catalog, SimilarityMatrix},
    error::{AppError, AppResult},
    models::{MovieKey, Neighbor},
};

/// Returns the `k` movies most similar to `key`, best first.
///
/// The query movie itself is excluded by index, whatever its own score is.
/// Equal scores keep ascending column order. `k` is clamped to the number of
/// other movies in the catalog.
///
/// # Errors
/// - `InvalidInput` if `k` is zero or the matrix does not match the catalog.
/// - `NotFound` if `key` does not resolve in the catalog.
pub fn top_k_similar(
    key: &MovieKey,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    k: usize,
) -> AppResult<Vec<Neighbor>> {
    if k == 0 {
        return Err(AppError::InvalidInput(
            "Number of recommendations must be positive".to_string(),
        ));
    }

    if matrix.dimension() != catalog.len() {
        return Err(AppError::InvalidInput(format!(
            "Similarity matrix dimension {} does not match catalog length {}",
            matrix.dimension(),
            catalog.len()
        )));
    }

    let idx = catalog
        .resolve(key)
        .ok_or_else(|| AppError::NotFound(format!("Movie with {} not in catalog", key)))?;

    let row = matrix
        .row(idx)
        .ok_or_else(|| AppError::Internal(format!("Missing similarity row {}", idx)))?;

    let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    // sort_by is stable, so ties stay in column order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .filter(|(column, _)| *column != idx)
        .take(k)
        .map(|(column, score)| {
            catalog
                .get(column)
                .map(|movie| Neighbor {
                    movie: movie.clone(),
                    score,
                })
                .ok_or_else(|| AppError::Internal(format!("Missing catalog entry {}", column)))
        })
        .collect()
}
