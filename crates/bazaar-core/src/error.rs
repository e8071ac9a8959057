//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bazaar-feed errors (separate crate)                                   │
//! │  └── FeedError        - Payload parse failures                         │
//! │                                                                         │
//! │  bazaar-engine errors (separate crate)                                 │
//! │  └── EngineError      - Coordinator failures                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → (engine/feed) → Presentation      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (variant id, limits, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. The presentation
/// layer translates them to toast messages ("Product is out of stock!").
#[derive(Debug, Error)]
pub enum CoreError {
    /// Variant has no stock available for cart addition.
    #[error("Variant {id} is out of stock")]
    OutOfStock { id: String },

    /// Variant is already in the cart (wishlist reconciliation refuses
    /// duplicates rather than silently merging).
    #[error("Variant {id} is already in the cart")]
    AlreadyInCart { id: String },

    /// Operation referenced a variant that is not in the cart.
    #[error("Variant {id} is not in the cart")]
    NotInCart { id: String },

    /// Operation referenced a variant that is not on the wishlist.
    #[error("Variant {id} is not on the wishlist")]
    NotInWishlist { id: String },

    /// Cart has exceeded maximum allowed distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Compare list is full (hard cap keeps the compare table renderable).
    #[error("Compare list cannot hold more than {max} items")]
    CompareListFull { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., inverted price range).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            id: "v-42".to_string(),
        };
        assert_eq!(err.to_string(), "Variant v-42 is out of stock");

        let err = CoreError::CompareListFull { max: 4 };
        assert_eq!(err.to_string(), "Compare list cannot hold more than 4 items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "query must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
