//! Cache Demo Types - Pure type definitions
//!
//! Shared by the server and its tests. No async runtime, no I/O.

pub mod item;

pub use item::*;

use serde::{Deserialize, Serialize};

/// Liveness payload returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
