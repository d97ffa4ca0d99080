//! # Store Registry
//!
//! A named collection of stores. Nothing here is global: the registry is an
//! explicit value passed by reference to whoever needs it.
//!
//! Registration never overwrites: a duplicate name is a no-op reported as a
//! warning, and the existing store stays reachable.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::store::Store;

/// Mapping from store name to store.
#[derive(Debug, Clone, Default)]
pub struct StoreRegistry {
    stores: BTreeMap<String, Store>,
}

impl StoreRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        StoreRegistry::default()
    }

    /// Registers a store under `name`.
    ///
    /// Returns `true` when the store was registered. A duplicate name is
    /// rejected with a warning and the existing store is left untouched.
    pub fn register(&mut self, name: impl Into<String>, store: Store) -> bool {
        let name = name.into();
        if self.stores.contains_key(&name) {
            warn!(store = %name, "store name already registered, keeping existing store");
            return false;
        }
        self.stores.insert(name, store);
        true
    }

    /// Looks up a store by name.
    pub fn get(&self, name: &str) -> Option<&Store> {
        self.stores.get(name)
    }

    /// Looks up a store by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Store> {
        self.stores.get_mut(name)
    }

    /// Registered store names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.stores.keys().map(String::as_str).collect()
    }

    /// Number of registered stores.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// True when no store is registered.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Builds a new store from the concatenated product lists of two
    /// registered stores (A's products first, then B's; duplicates by name
    /// preserved). Neither source store is mutated, and the result is NOT
    /// registered automatically.
    ///
    /// ## Errors
    /// [`CoreError::StoreNotFound`] when either name is unknown.
    pub fn combine(&self, a: &str, b: &str) -> CoreResult<Store> {
        let store_a = self
            .stores
            .get(a)
            .ok_or_else(|| CoreError::StoreNotFound(a.to_string()))?;
        let store_b = self
            .stores
            .get(b)
            .ok_or_else(|| CoreError::StoreNotFound(b.to_string()))?;
        Ok(store_a.combine(store_b))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::Product;

    fn store_with(name: &str, units: i64, qty: i64) -> Store {
        let mut store = Store::new();
        store.add_product(Product::new(name, Money::from_major_minor(units, 0), qty).unwrap());
        store
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = StoreRegistry::new();
        assert!(registry.register("Best Buy", store_with("X", 10, 5)));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("Best Buy").is_some());
        assert!(registry.get("Worst Buy").is_none());
    }

    #[test]
    fn test_duplicate_name_keeps_existing_store() {
        let mut registry = StoreRegistry::new();
        registry.register("Best Buy", store_with("X", 10, 5));
        assert!(!registry.register("Best Buy", store_with("Y", 99, 1)));

        // the original store is still the registered one
        let store = registry.get("Best Buy").unwrap();
        assert_eq!(store.list_products()[0].name(), "X");
    }

    #[test]
    fn test_combine_registered_stores() {
        let mut registry = StoreRegistry::new();
        registry.register("A", store_with("X", 10, 5));
        registry.register("B", store_with("Y", 20, 3));

        let merged = registry.combine("A", "B").unwrap();
        let names: Vec<&str> = merged.list_products().iter().map(Product::name).collect();
        assert_eq!(names, vec!["X", "Y"]);

        // sources untouched
        assert_eq!(registry.get("A").unwrap().list_products().len(), 1);
        assert_eq!(registry.get("B").unwrap().list_products().len(), 1);

        assert!(registry.combine("A", "missing").is_err());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = StoreRegistry::new();
        registry.register("Zeta", Store::new());
        registry.register("Alpha", Store::new());
        assert_eq!(registry.names(), vec!["Alpha", "Zeta"]);
    }
}
