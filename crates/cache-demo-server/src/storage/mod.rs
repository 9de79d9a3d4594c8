//! Storage layer
//!
//! SQLite (embedded) for durable items, Redis for the read-through cache.
//! DashMap (in-memory) can stand in for Redis.

pub mod cache;
pub mod db;
pub mod memory;
pub mod redis_cache;

pub use cache::{open_cache, Cache};
pub use db::Database;
pub use memory::MemoryCache;
pub use redis_cache::RedisCache;
