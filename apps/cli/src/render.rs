//! # Table Rendering
//!
//! Console-formatted output for product listings, stock totals, and order
//! receipts. Pure string building; printing is left to the caller.

use storefront_core::{OrderReceipt, Product};

const RULE: &str =
    "--------------------------------------------------------------------------------";

fn table_header() -> String {
    format!(
        "{RULE}\n{:<30}{:^15}{:^6}{:^12}\n{RULE}",
        "Product", "Price", "Qty", "Sub-total"
    )
}

/// Numbered product listing with the shared table frame.
pub fn render_products(products: &[Product]) -> String {
    let mut out = String::from("\nAll products in store:\n");
    out.push_str(&table_header());
    out.push('\n');
    for (idx, product) in products.iter().enumerate() {
        out.push_str(&format!("{}: {}\n", idx + 1, product.describe()));
    }
    out.push_str(RULE);
    out
}

/// Store-wide stock total.
pub fn render_total_stock(total: i64) -> String {
    format!(
        "\nQuantity of products in store:\n{}\nTotal quantity: {}\n{}",
        "-".repeat(30),
        total,
        "-".repeat(30)
    )
}

/// Order summary: one report line per requested line, then the total.
pub fn render_receipt(receipt: &OrderReceipt) -> String {
    let mut out = String::from("\nOrder summary:\n");
    out.push_str(&table_header());
    out.push('\n');
    for line in receipt.line_reports() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push_str(&format!("\nTotal: {}\n", receipt.total));
    out
}

/// The top-level menu.
pub fn menu() -> &'static str {
    "Menu:\n\
     1: List all products in store\n\
     2: Show quantity amount in store\n\
     3: Make an order\n\
     4: Combine two stores\n\
     5: Quit"
}

// =============================================================================
// Unit Tests
// =============================================================================
