//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It models a single retail
//! store's inventory and checkout flow as pure in-memory state: products with
//! stock levels, stacked promotional discounts, and an order-settlement
//! engine that validates stock, decrements it, and computes discounted
//! totals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    CLI (apps/cli)                             │  │
//! │  │    menu loop ──► basket collection ──► table rendering        │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │ direct calls                       │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │             ★ storefront-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌───────────┐ ┌─────────┐ ┌───────┐ ┌─────────┐ │  │
//! │  │  │  money  │ │ promotion │ │ product │ │ store │ │registry │ │  │
//! │  │  │  Money  │ │ Promotion │ │ Product │ │ Store │ │ named   │ │  │
//! │  │  │  cents  │ │ discounts │ │  stock  │ │ orders│ │ stores  │ │  │
//! │  │  └─────────┘ └───────────┘ └─────────┘ └───────┘ └─────────┘ │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`promotion`] - Discount strategies with deterministic stacking order
//! - [`product`] - Products, stock policies, stock mutation
//! - [`store`] - Order settlement state machine
//! - [`registry`] - Named collection of stores, store merging
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, Product, Promotion, Store, OrderLine};
//!
//! let mut laptop = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100)?;
//! laptop.add_promotion(Promotion::half_price_pairing("Second Half price!"));
//!
//! let mut store = Store::new();
//! store.add_product(laptop);
//!
//! let receipt = store.settle_order(&[OrderLine::new("MacBook Air M2", 2)]);
//! // Two for the price of one and a half
//! assert_eq!(receipt.total, Money::from_major_minor(2175, 0));
//! # Ok::<(), storefront_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod registry;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, StockPolicy};
pub use promotion::Promotion;
pub use registry::StoreRegistry;
pub use store::{LineOutcome, LineStatus, OrderLine, OrderReceipt, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default per-order unit cap for capped products.
///
/// A capped product created without an explicit maximum allows exactly one
/// unit per order line.
pub const DEFAULT_ORDER_CAP: i64 = 1;
