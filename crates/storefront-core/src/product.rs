//! # Product Module
//!
//! Products, stock policies, and stock mutation.
//!
//! ## Stock Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        StockPolicy Variants                         │
//! │                                                                     │
//! │  Standard            numeric stock, decremented by the ordered      │
//! │                      quantity, rejects over-stock requests          │
//! │                                                                     │
//! │  Unlimited           "on demand"; no stock constraint, internal     │
//! │                      quantity fixed at 0, always satisfiable        │
//! │                                                                     │
//! │  Capped { maximum }  at most `maximum` units per order line,        │
//! │                      independent of available stock; one unit of    │
//! │                      stock is consumed per settled line             │
//! │                                                                     │
//! │  Dispatched by value in `settle_pricing`, not via inheritance.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `name` is non-empty and immutable (identity key within a store)
//! - `price` is positive, whole cents
//! - `quantity` never goes negative; a purchase that would drive it negative
//!   fails without mutating state
//! - `promotions` holds no duplicates and stays sorted by (rank, description)

use std::cmp::Ordering;

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation::{
    validate_initial_quantity, validate_order_cap, validate_price, validate_product_name,
    validate_purchase_quantity, validate_stock_level,
};

// =============================================================================
// Stock Policy
// =============================================================================

/// How a product's stock behaves during purchase and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockPolicy {
    /// Normal inventory: stock decrements by the purchased quantity.
    Standard,
    /// No physical stock; any quantity is available "on demand".
    Unlimited,
    /// At most `maximum` units per order line.
    Capped { maximum: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale in a store.
///
/// Fields are private so every mutation flows through a validated method;
/// stock can only change via [`Product::buy`], [`Product::set_quantity`], or
/// order settlement.
#[derive(Debug, Clone)]
pub struct Product {
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
    promotions: Vec<Promotion>,
    stock: StockPolicy,
}

impl Product {
    /// Creates a standard stocked product.
    ///
    /// ## Errors
    /// - empty name
    /// - non-positive price
    /// - non-positive quantity (zero initial stock is rejected for the base
    ///   variant; only [`Product::unlimited`] carries a zero quantity)
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let p = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250)?;
    /// assert_eq!(p.quantity(), 250);
    /// # Ok::<(), storefront_core::CoreError>(())
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_initial_quantity(quantity)?;

        Ok(Product {
            name,
            price,
            quantity,
            active: true,
            promotions: Vec::new(),
            stock: StockPolicy::Standard,
        })
    }

    /// Creates an unlimited-stock ("on demand") product.
    ///
    /// The numeric quantity is fixed at zero and is purely informational.
    pub fn unlimited(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            name,
            price,
            quantity: 0,
            active: true,
            promotions: Vec::new(),
            stock: StockPolicy::Unlimited,
        })
    }

    /// Creates a capped product with a per-order unit limit.
    ///
    /// Most capped products use [`crate::DEFAULT_ORDER_CAP`] (one unit per
    /// order).
    pub fn capped(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_initial_quantity(quantity)?;
        validate_order_cap(maximum)?;

        Ok(Product {
            name,
            price,
            quantity,
            active: true,
            promotions: Vec::new(),
            stock: StockPolicy::Capped { maximum },
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The product's name - its identity key within a store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level. Always 0 for unlimited products.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Display/eligibility marker; does not block purchase.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Promotions in application order (rank, then description).
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// The product's stock policy.
    pub fn stock_policy(&self) -> StockPolicy {
        self.stock
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Sets the stock level.
    ///
    /// ## Errors
    /// Rejects negative values; zero means sold out and is allowed.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock_level(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Sets the active flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Marks the product active.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Marks the product inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Buys `quantity` units directly (the non-settlement path).
    ///
    /// ## Errors
    /// - non-positive quantity
    /// - [`CoreError::InsufficientStock`] when `quantity` exceeds the stock
    ///   level; the stock is left untouched on failure
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let mut p = Product::new("Widget", Money::from_cents(250), 4)?;
    /// assert_eq!(p.buy(4)?, Money::from_cents(1000));
    /// assert_eq!(p.quantity(), 0);
    /// assert!(p.buy(1).is_err());
    /// # Ok::<(), storefront_core::CoreError>(())
    /// ```
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        validate_purchase_quantity(quantity)?;
        if quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }
        self.quantity -= quantity;
        Ok(self.price.multiply_quantity(quantity))
    }

    /// Adds a promotion, keeping the list sorted by (rank, description).
    ///
    /// Adding a promotion that is already present is a warning, not an
    /// error; the list is left unchanged.
    pub fn add_promotion(&mut self, promotion: Promotion) {
        if self.promotions.contains(&promotion) {
            warn!(product = %self.name, promotion = %promotion, "promotion already applied");
            return;
        }
        self.promotions.push(promotion);
        self.promotions
            .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }

    /// Removes a promotion.
    ///
    /// Removing an absent promotion is a warning, not an error.
    pub fn remove_promotion(&mut self, promotion: &Promotion) {
        match self.promotions.iter().position(|p| p == promotion) {
            Some(idx) => {
                self.promotions.remove(idx);
            }
            None => {
                warn!(product = %self.name, promotion = %promotion, "promotion was not applied");
            }
        }
    }

    // =========================================================================
    // Settlement & Display
    // =========================================================================

    /// Prices one order line and applies the policy's stock delta.
    ///
    /// Dispatched by the store during order settlement:
    /// - **Unlimited**: `price × quantity`, no stock mutation
    /// - **Capped**: rejects `quantity > maximum`
    ///   ([`CoreError::OrderCapExceeded`]); otherwise `price × quantity` and
    ///   stock drops by exactly **one unit per settled line**, independent of
    ///   the capped quantity
    /// - **Standard**: rejects over-stock requests
    ///   ([`CoreError::InsufficientStock`]); otherwise `price × quantity`
    ///   and stock drops by `quantity`
    ///
    /// On rejection nothing is mutated.
    pub fn settle_pricing(&mut self, quantity: i64) -> CoreResult<Money> {
        validate_purchase_quantity(quantity)?;
        match self.stock {
            StockPolicy::Unlimited => Ok(self.price.multiply_quantity(quantity)),
            StockPolicy::Capped { maximum } => {
                if quantity > maximum {
                    return Err(CoreError::OrderCapExceeded {
                        name: self.name.clone(),
                        maximum,
                        requested: quantity,
                    });
                }
                if self.quantity < 1 {
                    // the per-line unit decrement still needs one unit in stock
                    return Err(CoreError::InsufficientStock {
                        name: self.name.clone(),
                        available: self.quantity,
                        requested: quantity,
                    });
                }
                self.quantity -= 1;
                Ok(self.price.multiply_quantity(quantity))
            }
            StockPolicy::Standard => {
                if quantity > self.quantity {
                    return Err(CoreError::InsufficientStock {
                        name: self.name.clone(),
                        available: self.quantity,
                        requested: quantity,
                    });
                }
                self.quantity -= quantity;
                Ok(self.price.multiply_quantity(quantity))
            }
        }
    }

    /// Human-readable one-product summary for listings.
    ///
    /// Combines name, price, and a stock annotation, then the promotion
    /// descriptions joined by `" - "` in application order.
    pub fn describe(&self) -> String {
        let stock = match self.stock {
            StockPolicy::Standard => format!("{:<6}", self.quantity),
            StockPolicy::Unlimited => "On Demand".to_string(),
            StockPolicy::Capped { maximum } => {
                format!("{}(Max per order: {})", self.quantity, maximum)
            }
        };
        let line = format!("{:<30} - {:<8} - {}", self.name, self.price.to_string(), stock);
        if self.promotions.is_empty() {
            line
        } else {
            format!("{}\n{}", line, self.promotion_text())
        }
    }

    /// Promotion descriptions joined by a fixed separator, order-sensitive.
    pub fn promotion_text(&self) -> String {
        self.promotions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Products compare by price only, ascending. Two products with the same
/// price are equal for ordering purposes regardless of name or stock.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
    }
}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.price.cmp(&other.price))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn money(units: i64) -> Money {
        Money::from_major_minor(units, 0)
    }

    #[test]
    fn test_construction_validates_fields() {
        assert!(matches!(
            Product::new("", money(10), 5),
            Err(CoreError::Validation(ValidationError::Required { ref field })) if field == "name"
        ));
        assert!(matches!(
            Product::new("Widget", Money::zero(), 5),
            Err(CoreError::Validation(ValidationError::MustBePositive { ref field })) if field == "price"
        ));
        assert!(matches!(
            Product::new("Widget", money(10), 0),
            Err(CoreError::Validation(ValidationError::MustBePositive { ref field })) if field == "quantity"
        ));
        assert!(matches!(
            Product::capped("Widget", money(10), 5, 0),
            Err(CoreError::Validation(ValidationError::MustBePositive { ref field })) if field == "maximum"
        ));
    }

    #[test]
    fn test_unlimited_bypasses_quantity_validation() {
        let p = Product::unlimited("Windows License", money(125)).unwrap();
        assert_eq!(p.quantity(), 0);
        assert_eq!(p.stock_policy(), StockPolicy::Unlimited);
    }

    #[test]
    fn test_buy_exact_stock() {
        let mut p = Product::new("Widget", Money::from_cents(1050), 3).unwrap();
        let total = p.buy(3).unwrap();
        assert_eq!(total, Money::from_cents(3150));
        assert_eq!(p.quantity(), 0);
    }

    #[test]
    fn test_buy_over_stock_leaves_state_unchanged() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        let err = p.buy(4).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                name: "Widget".to_string(),
                available: 3,
                requested: 4,
            }
        );
        assert_eq!(p.quantity(), 3);
    }

    #[test]
    fn test_buy_rejects_non_positive_quantity() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        assert!(p.buy(0).is_err());
        assert!(p.buy(-2).is_err());
        assert_eq!(p.quantity(), 3);
    }

    #[test]
    fn test_set_quantity() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        p.set_quantity(0).unwrap();
        assert_eq!(p.quantity(), 0);
        assert!(p.set_quantity(-1).is_err());
        assert_eq!(p.quantity(), 0);
    }

    #[test]
    fn test_active_flag() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        assert!(p.is_active());
        p.deactivate();
        assert!(!p.is_active());
        p.activate();
        assert!(p.is_active());
        p.set_active(false);
        assert!(!p.is_active());
    }

    #[test]
    fn test_add_promotion_keeps_rank_order() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        // inserted out of rank order on purpose
        p.add_promotion(Promotion::percent_off("30% off!", 3000).unwrap());
        p.add_promotion(Promotion::every_nth_free("Third One Free!"));
        p.add_promotion(Promotion::half_price_pairing("Second Half price!"));

        let ranks: Vec<u8> = p.promotions().iter().map(Promotion::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_duplicate_promotion_is_noop() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        p.add_promotion(Promotion::every_nth_free("Third One Free!"));
        p.add_promotion(Promotion::every_nth_free("Third One Free!"));
        assert_eq!(p.promotions().len(), 1);
    }

    #[test]
    fn test_remove_promotion() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        let promo = Promotion::every_nth_free("Third One Free!");
        p.add_promotion(promo.clone());
        p.remove_promotion(&promo);
        assert!(p.promotions().is_empty());

        // removing again warns and leaves state unchanged
        p.remove_promotion(&promo);
        assert!(p.promotions().is_empty());
    }

    #[test]
    fn test_describe_variants() {
        let standard = Product::new("Google Pixel 7", money(500), 250).unwrap();
        assert_eq!(
            standard.describe(),
            format!("{:<30} - {:<8} - {:<6}", "Google Pixel 7", "$500.00", 250)
        );

        let unlimited = Product::unlimited("Windows License", money(125)).unwrap();
        assert!(unlimited.describe().ends_with("On Demand"));

        let capped = Product::capped("Shipping", money(10), 250, 1).unwrap();
        assert!(capped.describe().ends_with("250(Max per order: 1)"));
    }

    #[test]
    fn test_describe_includes_promotions_in_order() {
        let mut p = Product::new("Widget", money(10), 3).unwrap();
        p.add_promotion(Promotion::percent_off("30% off!", 3000).unwrap());
        p.add_promotion(Promotion::every_nth_free("Third One Free!"));

        let text = p.describe();
        assert!(text.ends_with("Promotion: Third One Free! - Promotion: 30% off!"));
    }

    #[test]
    fn test_products_compare_by_price_only() {
        let cheap = Product::new("Cheap", money(5), 1).unwrap();
        let dear = Product::new("Dear", money(50), 99).unwrap();
        let same = Product::new("Other", money(5), 7).unwrap();

        assert!(cheap < dear);
        assert!(dear > cheap);
        assert!(cheap == same);
    }

    #[test]
    fn test_settle_pricing_standard() {
        let mut p = Product::new("Widget", money(10), 5).unwrap();
        assert_eq!(p.settle_pricing(3).unwrap(), money(30));
        assert_eq!(p.quantity(), 2);
        assert!(p.settle_pricing(3).is_err());
        assert_eq!(p.quantity(), 2);
    }

    #[test]
    fn test_settle_pricing_unlimited_never_mutates() {
        let mut p = Product::unlimited("Windows License", money(125)).unwrap();
        assert_eq!(p.settle_pricing(40).unwrap(), money(5000));
        assert_eq!(p.quantity(), 0);
    }

    #[test]
    fn test_settle_pricing_capped_decrements_one_unit() {
        let mut p = Product::capped("Shipping", money(10), 250, 1).unwrap();
        let err = p.settle_pricing(2).unwrap_err();
        assert!(matches!(err, CoreError::OrderCapExceeded { maximum: 1, requested: 2, .. }));
        assert_eq!(p.quantity(), 250);

        assert_eq!(p.settle_pricing(1).unwrap(), money(10));
        assert_eq!(p.quantity(), 249);
    }

    #[test]
    fn test_settle_pricing_capped_above_one_still_single_unit() {
        let mut p = Product::capped("Bundle", money(20), 10, 3).unwrap();
        // within the cap: charged for 3, stock drops by one unit
        assert_eq!(p.settle_pricing(3).unwrap(), money(60));
        assert_eq!(p.quantity(), 9);
    }
}
