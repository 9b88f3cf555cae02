use crate::error::{AppError, AppResult};

/// Square matrix of pairwise similarity scores, stored row-major
///
/// Symmetry is assumed but not checked.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    dimension: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows, and every
    /// score must be finite so rows can be ordered deterministically.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let dimension = rows.len();
        let mut scores = Vec::with_capacity(dimension * dimension);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(AppError::InvalidInput(format!(
                    "Similarity matrix is not square: row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    dimension
                )));
            }
            if let Some(column) = row.iter().position(|score| !score.is_finite()) {
                return Err(AppError::InvalidInput(format!(
                    "Similarity matrix has a non-finite score at ({}, {})",
                    index, column
                )));
            }
            scores.extend(row);
        }

        Ok(Self { dimension, scores })
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Scores of one movie against every catalog position, `None` when out of range
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.dimension {
            return None;
        }
        let start = index * self.dimension;
        Some(&self.scores[start..start + self.dimension])
    }
}
