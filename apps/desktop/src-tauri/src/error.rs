//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Retailer Web                           │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_product')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ──── ValidationError ──────────────┐                 │  │
//! │  │         │                                      ▼                 │  │
//! │  │  Fetch failed? ── StoreError::FetchFailed ──► ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('add_product', { input })                               │
//! │  } catch (e) {                                                          │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │    // e.message = "price must be between 0 and ..."                     │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing ids are not errors: mutations on an unknown product return
//! `false` and leave the catalog alone.

use retailer_core::{CoreError, ValidationError};
use retailer_store::StoreError;
use serde::Serialize;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "FETCH_FAILED",
///   "message": "Failed to fetch products"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// The product fetch failed; the catalog is in the `failed` state
    FetchFailed,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::FetchFailed(message) => {
                tracing::warn!(%message, "Product fetch failed");
                ApiError::new(ErrorCode::FetchFailed, message)
            }
            StoreError::Core(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_code() {
        let err: ApiError = StoreError::FetchFailed("Failed to fetch products".to_string()).into();
        assert_eq!(err.code, ErrorCode::FetchFailed);
        assert_eq!(err.message, "Failed to fetch products");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "FETCH_FAILED");
    }

    #[test]
    fn test_validation_chain() {
        let err: ApiError = StoreError::from(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_unknown_key_is_validation_error() {
        let parse: Result<retailer_core::settings::ThemePreset, _> = "neon".parse();
        let err: ApiError = parse.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.to_string().starts_with("[ValidationError]"));
    }
}
