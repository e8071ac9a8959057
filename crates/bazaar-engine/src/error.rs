//! # Engine Error Types
//!
//! Coordinator-level errors. Business rule violations stay in
//! `bazaar_core::CoreError`; these cover configuration and subscription
//! bookkeeping.

use thiserror::Error;
use uuid::Uuid;

use bazaar_core::error::ValidationError;

/// Catalog engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine configuration failed validation (page size out of range,
    /// inverted price range, overlong search text).
    #[error("invalid engine input: {0}")]
    Validation(#[from] ValidationError),

    /// Engine configuration was not valid JSON.
    #[error("configuration deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Unsubscribe referenced a token that was never issued or was
    /// already released.
    #[error("unknown subscription: {0}")]
    UnknownSubscription(Uuid),
}

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
