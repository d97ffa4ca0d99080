//! # Store Module
//!
//! A store owns a collection of products and orchestrates order settlement:
//! per-line validation, stock decrement, promotion application, and total
//! computation.
//!
//! ## Order Settlement State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Per order line (best-effort across lines)              │
//! │                                                                     │
//! │  Requested ──► find product by name                                 │
//! │                  │                                                  │
//! │        ┌─────────┴──────────┐                                       │
//! │        ▼                    ▼                                       │
//! │     NotFound              Found ──► settle_pricing (per policy)     │
//! │        │                    │                                       │
//! │        │          ┌─────────┴──────────┐                            │
//! │        ▼          ▼                    ▼                            │
//! │     Rejected   Rejected             Priced ──► promotion chain      │
//! │        │          │                    │                            │
//! │        ▼          ▼                    ▼                            │
//! │     total += 0 (line reported,      total += charged                │
//! │     processing continues)                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected line contributes zero and never stops the rest of the order:
//! one bad line must not void the whole basket.

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;

// =============================================================================
// Order Lines
// =============================================================================

/// A basket request: one product name and a desired quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        OrderLine {
            name: name.into(),
            quantity,
        }
    }
}

/// How a single order line fared during settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    /// The line was priced and its stock delta applied.
    Accepted {
        /// Unit price at settlement time.
        unit_price: Money,
        /// `price × quantity` before promotions.
        subtotal: Money,
        /// Amount added to the order total after the promotion chain.
        charged: Money,
    },
    /// The line was rejected; it contributed nothing to the total.
    Rejected(CoreError),
}

/// The settled outcome of one requested order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub name: String,
    pub requested: i64,
    pub status: LineStatus,
}

impl LineOutcome {
    /// Renders the line for the order summary.
    ///
    /// Accepted lines use the tabular layout (name, unit price, quantity,
    /// charged amount); rejected lines render the error message.
    pub fn report(&self) -> String {
        match &self.status {
            LineStatus::Accepted {
                unit_price,
                charged,
                ..
            } => format!(
                "{:<30}{:>10}{:>6}{:>12}",
                self.name,
                unit_price.to_string(),
                self.requested,
                charged.to_string()
            ),
            LineStatus::Rejected(err) => format!("{:<30}  rejected: {}", self.name, err),
        }
    }
}

/// The result of settling a whole order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Sum of the charged amounts of all accepted lines.
    pub total: Money,
    /// One outcome per requested line, in request order.
    pub lines: Vec<LineOutcome>,
}

impl OrderReceipt {
    /// Per-line report text, in request order.
    pub fn line_reports(&self) -> Vec<String> {
        self.lines.iter().map(LineOutcome::report).collect()
    }

    /// True when at least one line was accepted.
    pub fn any_accepted(&self) -> bool {
        self.lines
            .iter()
            .any(|l| matches!(l.status, LineStatus::Accepted { .. }))
    }
}

// =============================================================================
// Store
// =============================================================================

/// A single retail store: an ordered product collection plus the order
/// settlement engine.
///
/// Products keep insertion order and duplicates by name are permitted;
/// lookups resolve to the first match.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    /// Creates a store from an existing product list, preserving order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Appends a product. Duplicate names are allowed.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product matching `name`.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] when no product has that name; the
    /// store is left untouched.
    pub fn remove_product(&mut self, name: &str) -> CoreResult<Product> {
        match self.products.iter().position(|p| p.name() == name) {
            Some(idx) => Ok(self.products.remove(idx)),
            None => Err(CoreError::ProductNotFound(name.to_string())),
        }
    }

    /// All products in insertion order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Sum of per-product stock levels.
    pub fn total_stock(&self) -> i64 {
        self.products.iter().map(Product::quantity).sum()
    }

    /// Finds the first product whose name matches, scanning the whole list.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    fn find_product_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name() == name)
    }

    /// Settles an order: validates, prices, and discounts each line, then
    /// aggregates the total.
    ///
    /// Per line:
    /// 1. resolve the product by name (full scan, first match)
    /// 2. [`Product::settle_pricing`] applies the stock policy and delta
    /// 3. the promotion chain folds over the subtotal in stored order,
    ///    each step consuming the previous step's output
    ///
    /// Rejected lines (unknown product, over-stock, over-cap) are reported
    /// as warnings, contribute zero, and never abort later lines.
    pub fn settle_order(&mut self, lines: &[OrderLine]) -> OrderReceipt {
        let mut total = Money::zero();
        let mut outcomes = Vec::with_capacity(lines.len());

        for line in lines {
            let priced = match self.find_product_mut(&line.name) {
                None => Err(CoreError::ProductNotFound(line.name.clone())),
                Some(product) => product.settle_pricing(line.quantity).map(|subtotal| {
                    let charged = product
                        .promotions()
                        .iter()
                        .fold(subtotal, |acc, promo| promo.apply(acc, line.quantity));
                    let unit_price = product.price();
                    (unit_price, subtotal, charged)
                }),
            };

            let status = match priced {
                Ok((unit_price, subtotal, charged)) => {
                    total += charged;
                    LineStatus::Accepted {
                        unit_price,
                        subtotal,
                        charged,
                    }
                }
                Err(err) => {
                    warn!(
                        product = %line.name,
                        requested = line.quantity,
                        error = %err,
                        "order line rejected"
                    );
                    LineStatus::Rejected(err)
                }
            };

            outcomes.push(LineOutcome {
                name: line.name.clone(),
                requested: line.quantity,
                status,
            });
        }

        OrderReceipt {
            total,
            lines: outcomes,
        }
    }

    /// Builds a new store holding this store's products followed by
    /// `other`'s, cloned. Duplicate names are preserved, not merged, and
    /// neither input store is mutated.
    pub fn combine(&self, other: &Store) -> Store {
        let mut products = self.products.clone();
        products.extend(other.products.iter().cloned());
        Store { products }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
