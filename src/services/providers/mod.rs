//! Poster image providers
//!
//! The similarity lookup only returns catalog movies; display artwork comes from
//! an external metadata API. Each provider resolves a movie id to a poster URL.

use tracing::Instrument;

use crate::{
    error::AppResult,
    models::{MovieId, Poster},
};

pub mod tmdb;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Fetches the poster for a single movie
    async fn fetch_poster(&self, movie_id: &MovieId) -> AppResult<Poster>;

    /// Fetches posters for many movies in parallel, in input order.
    ///
    /// A failed fetch is logged and yields `None` for that movie; it never
    /// fails the batch.
    async fn fetch_posters_batch(&self, movie_ids: Vec<MovieId>) -> Vec<(MovieId, Option<String>)> {
        let mut tasks = Vec::with_capacity(movie_ids.len());

        for movie_id in movie_ids {
            let provider = self.clone_for_task();
            let span = tracing::debug_span!("fetch_poster", movie_id = %movie_id);
            let task = tokio::spawn(
                async move { provider.fetch_poster(&movie_id).await }.instrument(span),
            );
            tasks.push((movie_id, task));
        }

        let mut posters = Vec::with_capacity(tasks.len());
        let mut failures = 0usize;

        for (movie_id, task) in tasks {
            let url = match task.await {
                Ok(Ok(poster)) => Some(poster.url),
                Ok(Err(e)) => {
                    tracing::warn!(movie_id = %movie_id, error = %e, "Poster fetch failed");
                    failures += 1;
                    None
                }
                Err(e) => {
                    tracing::error!(movie_id = %movie_id, error = %e, "Poster task join error");
                    failures += 1;
                    None
                }
            };
            posters.push((movie_id, url));
        }

        if failures > 0 {
            tracing::warn!(
                provider = self.name(),
                requested = posters.len(),
                failed = failures,
                "Some posters could not be fetched"
            );
        }

        posters
    }

    /// Owned handle that can be moved into a spawned task
    fn clone_for_task(&self) -> Box<dyn PosterProvider>;

    fn name(&self) -> &'static str;
}
