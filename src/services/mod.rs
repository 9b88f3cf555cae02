pub mod providers;
pub mod recommendations;
pub mod recommender;
pub mod similarity;

pub use providers::PosterProvider;
pub use recommender::RecommenderContext;
pub use similarity::top_k_similar;
