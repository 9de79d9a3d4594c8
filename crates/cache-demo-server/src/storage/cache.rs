//! Cache adapter trait and backend selection

use super::{MemoryCache, RedisCache};
use crate::error::CacheError;
use async_trait::async_trait;
use std::sync::Arc;

/// `REDIS_URL` value selecting the process-local backend
pub const MEMORY_URL: &str = "memory://";

/// Network key-value cache holding plain-text values, without expiry.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Short description of the backend for logs
    fn describe(&self) -> String;
}

/// Build the cache backend named by `url`. Does not connect.
pub fn open_cache(url: &str) -> Result<Arc<dyn Cache>, CacheError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CacheError::InvalidUrl("empty URL".to_string()));
    }
    if url == MEMORY_URL {
        return Ok(Arc::new(MemoryCache::new()));
    }
    Ok(Arc::new(RedisCache::new(url)?))
}
