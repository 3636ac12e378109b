//! urban-living/crates/ul-core/src/lib.rs
//!
//! The central store logic and interface definitions for Urban Living.

pub mod codec;
pub mod error;
pub mod memory;
pub mod models;
pub mod ranking;
pub mod search;
pub mod seed;
pub mod store;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use memory::MemoryKvStore;
pub use models::*;
pub use ranking::ScoredRecommendation;
pub use search::{RecommendationFilter, ServiceFilter};
pub use store::{RecommendationStore, StoreOptions, StorePhase};
pub use traits::*;
