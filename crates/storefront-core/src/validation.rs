//! # Validation Module
//!
//! Input validation utilities for Storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Caller (CLI)                                              │
//! │  ├── parse failures, re-prompt loops                                │
//! │  └── immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── construction invariants (name, price, quantity)                │
//! │  └── mutation invariants (non-negative stock, positive buys)        │
//! │                                                                     │
//! │  The type system is layer 0: quantities are i64, flags are bool,    │
//! │  prices are Money. Whole classes of bad input cannot be expressed.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("MacBook Air M2").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive; free products are not sellable inventory
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial stock quantity at construction.
///
/// ## Rules
/// - Must be strictly positive; the base product variant rejects zero
///   (only unlimited-stock products carry a zero quantity, fixed internally)
pub fn validate_initial_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase quantity (direct buy or order line).
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_purchase_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level assignment.
///
/// ## Rules
/// - Must not be negative; zero is fine (sold out)
pub fn validate_stock_level(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-order unit cap for capped products.
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_order_cap(maximum: i64) -> ValidationResult<()> {
    if maximum <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "maximum".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be below 10000 (a 100% discount is not a valid promotion)
pub fn validate_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps >= 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "rate_bps".to_string(),
            min: 0,
            max: 9_999,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
