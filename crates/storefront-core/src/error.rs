//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  storefront-core errors (this file)                                 │
//! │  ├── CoreError        - Domain failures (stock, lookup, caps)       │
//! │  └── ValidationError  - Construction-time input failures            │
//! │                                                                     │
//! │  Non-errors (tracing::warn! events, state unchanged):               │
//! │  ├── duplicate promotion added / missing promotion removed          │
//! │  ├── duplicate store name registered                                │
//! │  └── rejected order line during settlement                          │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → caller-rendered message        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, available vs requested)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// Each carries enough context for the caller to render a precise message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product cannot be found in the store.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Store cannot be found in the registry.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Insufficient stock to complete a purchase.
    ///
    /// ## When This Occurs
    /// - A direct `Product::buy` for more than the available quantity
    /// - An order line requesting more than a standard product has in stock
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// An order line exceeded a capped product's per-order limit.
    ///
    /// Deliberately distinct from [`CoreError::InsufficientStock`]: the
    /// constraint is per-order, not stock-based, and the message must say so.
    #[error("{name} can only be ordered {maximum} time(s) per order (requested {requested})")]
    OrderCapExceeded {
        name: String,
        maximum: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur at construction time when input doesn't meet requirements.
/// A failed construction is fatal to that call; nothing is silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
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
        let err = CoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Google Pixel 7: available 3, requested 5"
        );

        let err = CoreError::OrderCapExceeded {
            name: "Shipping".to_string(),
            maximum: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "Shipping can only be ordered 1 time(s) per order (requested 2)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
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
