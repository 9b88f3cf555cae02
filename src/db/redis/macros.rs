/// Read-through caching over a `Cache`.
///
/// Returns the cached value for `$key` when present. Otherwise awaits `$block`,
/// queues the result for a background write with the given TTL (seconds) and
/// returns it. A failed cache read is logged and treated as a miss, so an
/// unreachable Redis only costs the cache; errors from `$block` propagate with `?`.
///
/// ```rust,ignore
/// async fn fetch_poster(&self, id: &MovieId) -> AppResult<Poster> {
///     cached!(self.cache, CacheKey::Poster(*id), POSTER_CACHE_TTL, async move {
///         self.request_poster(id).await
///     })
/// }
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        let lookup = match $cache.get_from_cache(&key).await {
            Ok(lookup) => lookup,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed; treating as miss");
                None
            }
        };
        match lookup {
            Some(hit) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(hit)
            }
            None => {
                let value = $block.await?;
                $cache.set_in_background(&key, &value, $ttl);
                Ok(value)
            }
        }
    }};
}
