//! # Promotion Engine
//!
//! Discount strategies applied to an order line's subtotal.
//!
//! ## Stacking Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Promotion Stacking (compounding, not additive)         │
//! │                                                                     │
//! │  raw subtotal ($100.00, qty 10)                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  rank 1: Every-Nth-Free (N=3)   → $70.00                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  rank 2: Half-Price-Pairing     → $52.50                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  rank 3: Percent-Off (30%)      → $36.75                            │
//! │                                                                     │
//! │  Each step consumes the previous step's output. The order is NOT    │
//! │  commutative; it is fixed by (rank, description) on the product.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design
//! A promotion is data plus one capability: `apply(subtotal, quantity)`.
//! Variants are a tagged enum, not a trait-object hierarchy, so equality,
//! ordering, and serialization all come for free.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_rate_bps;

/// Group size for the "every Nth item free" promotion.
pub const EVERY_NTH_FREE_N: i64 = 3;

/// Every second item in a pair is charged at `1/HALF_PRICE_DIVISOR`.
pub const HALF_PRICE_DIVISOR: i64 = 2;

// =============================================================================
// Promotion
// =============================================================================

/// A promotional discount rule attached to a product.
///
/// Each variant carries a display description and a fixed *rank* used purely
/// for deterministic ordering when several promotions stack on one product.
/// Ties are broken by description text via [`Promotion::sort_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Promotion {
    /// Every third item is free (rank 1).
    EveryNthFree { description: String },

    /// Every second item of a pair is half price (rank 2).
    HalfPricePairing { description: String },

    /// Flat percentage off the whole subtotal (rank 3).
    /// `rate_bps` is basis points: 3000 = 30% off. Always below 10000.
    PercentOff { description: String, rate_bps: u32 },
}

impl Promotion {
    /// Creates an every-Nth-free promotion (N = 3).
    pub fn every_nth_free(description: impl Into<String>) -> Self {
        Promotion::EveryNthFree {
            description: description.into(),
        }
    }

    /// Creates a half-price-pairing promotion.
    pub fn half_price_pairing(description: impl Into<String>) -> Self {
        Promotion::HalfPricePairing {
            description: description.into(),
        }
    }

    /// Creates a percent-off promotion.
    ///
    /// ## Errors
    /// `rate_bps` must lie in `[0, 10000)` - a 100% discount is not a
    /// promotion, it is a giveaway.
    pub fn percent_off(
        description: impl Into<String>,
        rate_bps: u32,
    ) -> Result<Self, ValidationError> {
        validate_rate_bps(rate_bps)?;
        Ok(Promotion::PercentOff {
            description: description.into(),
            rate_bps,
        })
    }

    /// The human-readable description shown in product listings.
    pub fn description(&self) -> &str {
        match self {
            Promotion::EveryNthFree { description }
            | Promotion::HalfPricePairing { description }
            | Promotion::PercentOff { description, .. } => description,
        }
    }

    /// Fixed precedence used to order stacked promotions deterministically.
    ///
    /// Lower rank applies first: 1 = every-Nth-free, 2 = half-price pairing,
    /// 3 = percent-off.
    pub const fn rank(&self) -> u8 {
        match self {
            Promotion::EveryNthFree { .. } => 1,
            Promotion::HalfPricePairing { .. } => 2,
            Promotion::PercentOff { .. } => 3,
        }
    }

    /// Checks invariants that deserialization cannot enforce.
    ///
    /// Promotions built through the constructors are always valid; this is
    /// for promotions arriving from external data such as catalog files.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Promotion::PercentOff { rate_bps, .. } => validate_rate_bps(*rate_bps),
            _ => Ok(()),
        }
    }

    /// Explicit ordering key: rank first, description as tie-break.
    ///
    /// Display text formatting never participates in ordering semantics.
    pub fn sort_key(&self) -> (u8, &str) {
        (self.rank(), self.description())
    }

    /// Transforms a line subtotal into its discounted value.
    ///
    /// `quantity` is the basket quantity for the line and must be positive;
    /// settlement guarantees this. The per-unit price is derived implicitly
    /// from the `subtotal / quantity` ratio, so a uniform unit price is
    /// assumed.
    ///
    /// ## Algorithms
    /// - **Every-Nth-Free**: charge `quantity - quantity/N` of the `quantity`
    ///   units: `subtotal × full/quantity`
    /// - **Half-Price-Pairing**: `quantity/2` units at half price, the rest
    ///   at full: `subtotal × (2·full + discounted) / (2·quantity)`
    /// - **Percent-Off**: `subtotal × (10000 − rate_bps)/10000`; quantity
    ///   unused
    ///
    /// Every result is rounded half-up to a whole cent.
    pub fn apply(&self, subtotal: Money, quantity: i64) -> Money {
        debug_assert!(quantity > 0, "promotion applied to empty line");
        match self {
            Promotion::EveryNthFree { .. } => {
                let free_items = quantity / EVERY_NTH_FREE_N;
                let full_price_items = quantity - free_items;
                subtotal.ratio(full_price_items, quantity)
            }
            Promotion::HalfPricePairing { .. } => {
                let discounted_items = quantity / HALF_PRICE_DIVISOR;
                let full_price_items = quantity - discounted_items;
                // full·ppi + disc·ppi/2 where ppi = subtotal/quantity,
                // folded into one ratio so rounding happens exactly once
                subtotal.ratio(
                    2 * full_price_items + discounted_items,
                    2 * quantity,
                )
            }
            Promotion::PercentOff { rate_bps, .. } => subtotal.percent_off(*rate_bps),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Promotion: {}", self.description())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
