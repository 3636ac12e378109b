//! # AppError
//!
//! Centralized error handling for the Urban Living store.
//! Maps store and backend failures to actionable error types.

use thiserror::Error;

/// The primary error type for all ul-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Recommendation, Comment)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., rating off the half-star grid, blank title)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// No signed-in viewer was supplied
    #[error("sign-in required")]
    Unauthenticated,

    /// The viewer is not allowed to touch the resource (e.g., editing someone else's post)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The store was used before `load` and `mark_ready` completed
    #[error("store accessed before initialization completed")]
    NotInitialized,

    /// Key-value backend failure (e.g., SQLite locked, disk full)
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    /// Encoding a collection for persistence failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for Urban Living store logic.
pub type Result<T> = std::result::Result<T, AppError>;
