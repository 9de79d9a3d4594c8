//! Item types

use serde::{Deserialize, Serialize};

/// Prefix of every cache key holding an item name
pub const CACHE_KEY_PREFIX: &str = "item:";

/// Item record, keyed by a caller-supplied id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Record returned for ids that were never stored
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }

    /// Cache key for this item's name
    pub fn cache_key(&self) -> String {
        cache_key(self.id)
    }
}

/// Cache key under which the name of item `id` is stored
pub fn cache_key(id: i64) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, id)
}
