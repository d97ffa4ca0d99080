//! # Basket Collection
//!
//! The interactive loop that turns keystrokes into order lines.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Basket Collection Loop                          │
//! │                                                                     │
//! │  prompt: product number (1-based)                                   │
//! │    ├── empty line        → collection ends                          │
//! │    ├── not a positive int→ re-prompt (never terminates the loop)    │
//! │    ├── out of range      → retry message, back to the top           │
//! │    └── valid             → prompt: quantity                         │
//! │                              ├── empty line → collection ends       │
//! │                              ├── invalid    → re-prompt             │
//! │                              └── valid      → line recorded         │
//! │                                                                     │
//! │  Output: Vec<OrderLine> handed to Store::settle_order               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads from any `BufRead` and writes prompts to any `Write`, so the whole
//! loop is testable with `Cursor` buffers.

use std::io::{BufRead, Write};

use storefront_core::{OrderLine, Product};

/// Reads a positive integer labelled `label`, re-prompting until the input
/// is valid. Returns `None` on an empty line (end of collection).
fn read_positive_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> std::io::Result<Option<i64>> {
    loop {
        write!(out, "Enter the {label}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like an empty line
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match line.parse::<i64>() {
            Ok(n) if n >= 1 => return Ok(Some(n)),
            _ => writeln!(out, "Invalid {label}, please enter a valid number")?,
        }
    }
}

/// Collects order lines against the given product listing.
///
/// Product numbers are 1-based indexes into `products`; an out-of-range
/// number is rejected with a retry message and never ends the loop.
pub fn collect_basket<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    products: &[Product],
) -> std::io::Result<Vec<OrderLine>> {
    let mut basket = Vec::new();
    writeln!(out, "Enter the product number and quantity to order")?;

    loop {
        let Some(product_num) = read_positive_int(input, out, "product number")? else {
            break;
        };

        if product_num as usize > products.len() {
            writeln!(out, "Invalid product number, please enter a valid number")?;
            continue;
        }
        let product = &products[product_num as usize - 1];

        let Some(quantity) = read_positive_int(input, out, "quantity")? else {
            break;
        };

        writeln!(out, "Added to the shopping list")?;
        basket.push(OrderLine::new(product.name(), quantity));
    }

    Ok(basket)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use storefront_core::{Money, Product};

    fn products() -> Vec<Product> {
        vec![
            Product::new("Alpha", Money::from_cents(100), 10).unwrap(),
            Product::new("Beta", Money::from_cents(200), 10).unwrap(),
        ]
    }

    fn collect(input: &str) -> Vec<OrderLine> {
        let mut reader = Cursor::new(input.to_string());
        let mut out = Vec::new();
        collect_basket(&mut reader, &mut out, &products()).unwrap()
    }

    #[test]
    fn test_empty_input_terminates() {
        assert!(collect("\n").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_collects_pairs() {
        let basket = collect("1\n2\n2\n5\n\n");
        assert_eq!(
            basket,
            vec![OrderLine::new("Alpha", 2), OrderLine::new("Beta", 5)]
        );
    }

    #[test]
    fn test_out_of_range_index_retries() {
        // 9 is out of range; the loop keeps going and accepts 1
        let basket = collect("9\n1\n3\n\n");
        assert_eq!(basket, vec![OrderLine::new("Alpha", 3)]);
    }

    #[test]
    fn test_non_numeric_and_zero_reprompt() {
        let basket = collect("abc\n0\n-2\n2\n1\n\n");
        assert_eq!(basket, vec![OrderLine::new("Beta", 1)]);
    }

    #[test]
    fn test_empty_quantity_terminates_mid_line() {
        let basket = collect("1\n\n");
        assert!(basket.is_empty());
    }

    #[test]
    fn test_prompts_are_written() {
        let mut reader = Cursor::new("9\n\n".to_string());
        let mut out = Vec::new();
        collect_basket(&mut reader, &mut out, &products()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Enter the product number: "));
        assert!(text.contains("Invalid product number"));
    }
}
