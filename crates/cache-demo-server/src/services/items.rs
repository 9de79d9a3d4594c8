//! Item service: durable writes with a read-through cache in front

use crate::error::Result;
use crate::storage::{Cache, Database};
use cache_demo_types::{cache_key, Item};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ItemService {
    db: Arc<Database>,
    cache: Arc<dyn Cache>,
}

impl ItemService {
    pub fn new(db: Arc<Database>, cache: Arc<dyn Cache>) -> Self {
        Self { db, cache }
    }

    /// Store `item`, then refresh its cache entry.
    ///
    /// The database write must succeed first; on failure the cache is not
    /// touched. A cache failure after that is logged and swallowed since the
    /// durable copy is already correct.
    pub async fn create(&self, item: Item) -> Result<Item> {
        self.db.upsert_item(&item).await?;

        if let Err(e) = self.cache.set(&item.cache_key(), &item.name).await {
            warn!("Item {} stored but cache write failed: {}", item.id, e);
        }

        info!("Item stored with id={}", item.id);
        Ok(item)
    }

    /// Look `id` up in the cache, falling back to the database on a miss.
    ///
    /// Unknown ids yield `Item::placeholder(id)` rather than an error.
    pub async fn read(&self, id: i64) -> Result<Item> {
        let key = cache_key(id);

        if let Some(name) = self.cache.get(&key).await? {
            debug!("Cache hit for {}", key);
            return Ok(Item::new(id, name));
        }

        debug!("Cache miss for {}", key);
        match self.db.get_item(id).await? {
            Some(item) => {
                self.cache.set(&key, &item.name).await?;
                Ok(item)
            }
            None => {
                debug!("Item {} not found, returning placeholder", id);
                Ok(Item::placeholder(id))
            }
        }
    }
}
