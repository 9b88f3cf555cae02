//! Immutable, precomputed snapshots loaded once at startup.
//!
//! The catalog and the similarity matrix share indexing: catalog position `i`
//! is row and column `i` of the matrix. Neither can be mutated after
//! construction, so a snapshot can be shared freely between request handlers.

mod matrix;
mod movies;
mod ranking;

pub use matrix::SimilarityMatrix;
pub use movies::Catalog;
pub use ranking::{DemographicRanking, RankedMovie};
