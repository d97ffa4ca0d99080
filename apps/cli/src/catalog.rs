//! # Catalog Loading
//!
//! The seed inventory is described in a JSON catalog file. A path can be
//! passed on the command line; without one the built-in catalog (embedded at
//! compile time) is used.
//!
//! The catalog is pure configuration: every entry flows through the core's
//! validated constructors, so a malformed catalog fails loudly at startup
//! instead of producing a half-built store.

use serde::Deserialize;

use storefront_core::{Money, Product, Promotion, Store, DEFAULT_ORDER_CAP};

use crate::error::AppResult;

/// The built-in demo inventory.
pub const DEFAULT_CATALOG: &str = include_str!("../catalog.json");

// =============================================================================
// File Format
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<CatalogProduct>,
}

/// Stock policy selector in the catalog file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStock {
    #[default]
    Standard,
    Unlimited,
    Capped,
}

#[derive(Debug, Deserialize)]
pub struct CatalogProduct {
    pub name: String,
    pub price_cents: i64,
    /// Ignored for unlimited products.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub stock: CatalogStock,
    /// Per-order cap; only read for capped products.
    #[serde(default = "default_cap")]
    pub maximum: i64,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

fn default_cap() -> i64 {
    DEFAULT_ORDER_CAP
}

// =============================================================================
// Store Construction
// =============================================================================

/// Parses a catalog and builds a store from it.
pub fn load_store(json: &str) -> AppResult<Store> {
    let catalog: CatalogFile = serde_json::from_str(json)?;
    let mut store = Store::new();

    for entry in catalog.products {
        let price = Money::from_cents(entry.price_cents);
        let mut product = match entry.stock {
            CatalogStock::Standard => Product::new(entry.name, price, entry.quantity)?,
            CatalogStock::Unlimited => Product::unlimited(entry.name, price)?,
            CatalogStock::Capped => {
                Product::capped(entry.name, price, entry.quantity, entry.maximum)?
            }
        };
        for promotion in entry.promotions {
            promotion.validate().map_err(storefront_core::CoreError::from)?;
            product.add_promotion(promotion);
        }
        store.add_product(product);
    }

    Ok(store)
}

// =============================================================================
// Unit Tests
// =============================================================================
