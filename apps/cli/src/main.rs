//! # Storefront CLI
//!
//! Terminal front end over `storefront-core`: a numbered menu, the basket
//! collection loop, and table rendering. All decision logic lives in the
//! core; this binary only supplies basket requests and renders returned data.

mod basket;
mod catalog;
mod error;
mod render;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_core::StoreRegistry;

use crate::error::AppResult;

/// The store the menu operates on.
const HOME_STORE: &str = "Best Buy";

fn main() {
    // Core warnings (duplicate promotions, rejected order lines) surface
    // through this subscriber; RUST_LOG controls verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => catalog::DEFAULT_CATALOG.to_string(),
    };

    let store = catalog::load_store(&json)?;
    info!(
        products = store.list_products().len(),
        total_stock = store.total_stock(),
        "catalog loaded"
    );

    let mut registry = StoreRegistry::new();
    registry.register(HOME_STORE, store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu_loop(&mut stdin.lock(), &mut stdout.lock(), &mut registry)
}

/// Reads one trimmed line; `None` on EOF.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}: ")?;
    out.flush()?;
    read_line(input)
}

fn menu_loop<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    registry: &mut StoreRegistry,
) -> AppResult<()> {
    loop {
        writeln!(out, "{}", render::menu())?;
        let Some(choice) = prompt(input, out, "Enter your choice")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let store = registry.get(HOME_STORE).expect("home store registered");
                writeln!(out, "{}", render::render_products(store.list_products()))?;
            }
            "2" => {
                let store = registry.get(HOME_STORE).expect("home store registered");
                writeln!(out, "{}", render::render_total_stock(store.total_stock()))?;
            }
            "3" => {
                let store = registry.get(HOME_STORE).expect("home store registered");
                writeln!(out, "{}", render::render_products(store.list_products()))?;
                let lines = basket::collect_basket(input, out, store.list_products())?;

                let store = registry.get_mut(HOME_STORE).expect("home store registered");
                let receipt = store.settle_order(&lines);
                writeln!(out, "{}", render::render_receipt(&receipt))?;
            }
            "4" => combine_stores(input, out, registry)?,
            "5" => {
                writeln!(out, "Exiting program")?;
                break;
            }
            _ => writeln!(out, "Invalid choice")?,
        }
    }

    Ok(())
}

/// Menu action 4: merge two registered stores into a new named store.
fn combine_stores<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    registry: &mut StoreRegistry,
) -> AppResult<()> {
    writeln!(out, "Registered stores: {}", registry.names().join(", "))?;
    let Some(first) = prompt(input, out, "Enter the first store name")? else {
        return Ok(());
    };
    let Some(second) = prompt(input, out, "Enter the second store name")? else {
        return Ok(());
    };

    let merged = match registry.combine(&first, &second) {
        Ok(store) => store,
        Err(err) => {
            writeln!(out, "Cannot combine stores: {err}")?;
            return Ok(());
        }
    };

    let Some(name) = prompt(input, out, "Enter a name for the combined store")? else {
        return Ok(());
    };
    if registry.register(name.clone(), merged) {
        writeln!(out, "Registered combined store '{name}'")?;
    } else {
        writeln!(out, "Store name '{name}' already exists, nothing registered")?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn registry() -> StoreRegistry {
        let mut registry = StoreRegistry::new();
        registry.register(HOME_STORE, catalog::load_store(catalog::DEFAULT_CATALOG).unwrap());
        registry
    }

    fn drive(session: &str) -> (StoreRegistry, String) {
        let mut registry = registry();
        let mut input = Cursor::new(session.to_string());
        let mut out = Vec::new();
        menu_loop(&mut input, &mut out, &mut registry).unwrap();
        (registry, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_and_quit() {
        let (_, out) = drive("1\n5\n");
        assert!(out.contains("All products in store:"));
        assert!(out.contains("MacBook Air M2"));
        assert!(out.contains("Exiting program"));
    }

    #[test]
    fn test_total_stock() {
        let (_, out) = drive("2\n5\n");
        assert!(out.contains("Total quantity: 1100"));
    }

    #[test]
    fn test_order_flow_decrements_stock() {
        // order 2 Google Pixel 7 (product number 3), then quit
        let (registry, out) = drive("3\n3\n2\n\n5\n");
        assert!(out.contains("Order summary:"));
        // 2 × $500 = $1000, then 30% off → $700
        assert!(out.contains("Total: $700.00"));

        let store = registry.get(HOME_STORE).unwrap();
        assert_eq!(store.find_product("Google Pixel 7").unwrap().quantity(), 248);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_, out) = drive("nope\n5\n");
        assert!(out.contains("Invalid choice"));
    }

    #[test]
    fn test_combine_registers_new_store() {
        let (registry, out) = drive("4\nBest Buy\nBest Buy\nDouble Buy\n5\n");
        assert!(out.contains("Registered combined store 'Double Buy'"));
        let merged = registry.get("Double Buy").unwrap();
        assert_eq!(merged.list_products().len(), 10);
    }

    #[test]
    fn test_combine_unknown_store_is_reported() {
        let (registry, out) = drive("4\nBest Buy\nNowhere\n5\n");
        assert!(out.contains("Cannot combine stores"));
        assert_eq!(registry.len(), 1);
    }
}
