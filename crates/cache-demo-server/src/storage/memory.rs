//! In-memory cache using DashMap (stands in for Redis in local runs and tests)

use super::cache::Cache;
use crate::error::CacheError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Process-local cache backend. Never fails.
#[derive(Default)]
pub struct MemoryCache {
    data: DashMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_basic_operations() {
        let cache = MemoryCache::new();

        cache.set("item:1", "widget").await.unwrap();
        assert_eq!(cache.get("item:1").await.unwrap(), Some("widget".to_string()));

        // Non-existent key
        assert_eq!(cache.get("item:2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let cache = MemoryCache::new();

        cache.set("item:5", "a").await.unwrap();
        cache.set("item:5", "b").await.unwrap();
        assert_eq!(cache.get("item:5").await.unwrap(), Some("b".to_string()));
        assert_eq!(cache.data.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_value_is_a_hit() {
        let cache = MemoryCache::new();

        cache.set("item:3", "").await.unwrap();
        assert_eq!(cache.get("item:3").await.unwrap(), Some(String::new()));
    }
}
