pub mod artifacts;
pub mod redis;

pub use artifacts::ArtifactStore;
pub use self::redis::{create_redis_client, Cache, CacheKey, CacheWriterHandle};
