//! # Feed Error Types
//!
//! Boundary errors: what can go wrong turning a payload into domain
//! records. Individual bad records do NOT produce errors — they degrade
//! with a logged warning (see [`crate::parse`]); errors here mean the
//! payload as a whole was unusable or a seed input was invalid.

use thiserror::Error;

use bazaar_core::error::ValidationError;

/// Data-source boundary errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The payload was not valid JSON / did not match the envelope shape.
    #[error("payload deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A seeded input failed core validation (e.g. overlong search text).
    #[error("invalid seed input: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with FeedError.
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_error_message() {
        let err = serde_json::from_str::<crate::dto::RawCatalog>("nope").unwrap_err();
        let feed_err = FeedError::from(err);
        assert!(feed_err.to_string().starts_with("payload deserialization failed"));
    }
}
