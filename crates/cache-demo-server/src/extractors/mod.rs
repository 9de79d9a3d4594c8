//! Request extractors

pub mod validated;

pub use validated::{ItemId, ValidJson};
