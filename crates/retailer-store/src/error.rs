//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (validation)      simulated fetch failure                   │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in Tauri app) ← Serialized for frontend                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use retailer_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The product fetch failed.
    ///
    /// ## When This Occurs
    /// - The store was configured with a simulated failure
    ///
    /// The catalog keeps the message and reports status `failed` until the
    /// next fetch.
    #[error("{0}")]
    FetchFailed(String),

    /// Input rejected by the core rules.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<retailer_core::ValidationError> for StoreError {
    fn from(err: retailer_core::ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
