//! Line-item editor.
//!
//! Stateless: an edit takes a line and returns the edited copy, leaving the
//! owning draft to decide where the new line goes.

use crate::{
    core::totals::parse_amount,
    entities::LineItem,
    errors::{Error, Result},
};

/// A single field edit on a line item, carrying the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Replace the product name
    ProductName(String),
    /// Replace the unit price from its numeric prefix; non-numeric input becomes 0
    UnitPrice(String),
    /// Replace the quantity; empty input becomes 1, input without leading digits becomes 0
    Quantity(String),
}

impl LineItem {
    /// A fresh line: no name, free, quantity one.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            product_name: String::new(),
            unit_price: 0.0,
            quantity: 1,
        }
    }
}

/// Parses a typed quantity from its leading integer, so `"2.5"` is 2.
fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 1;
    }
    let sign = usize::from(raw.starts_with(['+', '-']));
    let digits = raw[sign..].bytes().take_while(u8::is_ascii_digit).count();
    raw[..sign + digits].parse().unwrap_or(0)
}

/// Applies `edit` to `line` and returns the edited line.
#[must_use]
pub fn apply(line: &LineItem, edit: LineEdit) -> LineItem {
    let mut next = line.clone();
    match edit {
        LineEdit::ProductName(name) => next.product_name = name,
        LineEdit::UnitPrice(raw) => next.unit_price = parse_amount(&raw),
        LineEdit::Quantity(raw) => next.quantity = parse_quantity(&raw),
    }
    next
}

/// `unit_price * quantity` for one line.
#[must_use]
pub fn line_total(line: &LineItem) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let quantity = line.quantity as f64;
    line.unit_price * quantity
}

/// Builds a line from `name:price:qty`.
///
/// The name may itself contain `:`; price and quantity are taken from the
/// right. A missing quantity defaults to 1.
pub fn parse_line(spec: &str) -> Result<LineItem> {
    let mut parts = spec.rsplitn(3, ':');
    let (name, price, quantity) = match (parts.next(), parts.next(), parts.next()) {
        (Some(quantity), Some(price), Some(name)) => (name, price, quantity),
        (Some(price), Some(name), None) => (name, price, ""),
        _ => {
            return Err(Error::Validation {
                message: format!("Invalid item '{spec}' (expected name:price[:qty])"),
            });
        }
    };

    let line = [
        LineEdit::ProductName(name.trim().to_string()),
        LineEdit::UnitPrice(price.to_string()),
        LineEdit::Quantity(quantity.to_string()),
    ]
    .into_iter()
    .fold(LineItem::blank(), |line, edit| apply(&line, edit));

    Ok(line)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_blank_line_defaults() {
        let line = LineItem::blank();
        assert_eq!(line.product_name, "");
        assert_eq!(line.unit_price, 0.0);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_apply_does_not_touch_the_original() {
        let line = LineItem::blank();
        let edited = apply(&line, LineEdit::ProductName("Mug".to_string()));
        assert_eq!(edited.product_name, "Mug");
        assert_eq!(line.product_name, "");
    }

    #[test]
    fn test_unit_price_edits() {
        let line = LineItem::blank();
        assert_eq!(apply(&line, LineEdit::UnitPrice("4.25".into())).unit_price, 4.25);
        assert_eq!(apply(&line, LineEdit::UnitPrice(String::new())).unit_price, 0.0);
        assert_eq!(apply(&line, LineEdit::UnitPrice("four".into())).unit_price, 0.0);
    }

    #[test]
    fn test_quantity_edits() {
        let line = LineItem::blank();
        assert_eq!(apply(&line, LineEdit::Quantity("3".into())).quantity, 3);
        assert_eq!(apply(&line, LineEdit::Quantity(String::new())).quantity, 1);
        assert_eq!(apply(&line, LineEdit::Quantity("many".into())).quantity, 0);
    }

    #[test]
    fn test_edits_read_leading_numbers() {
        let line = LineItem::blank();
        assert_eq!(apply(&line, LineEdit::UnitPrice("12abc".into())).unit_price, 12.0);
        assert_eq!(apply(&line, LineEdit::Quantity("2.5".into())).quantity, 2);
        assert_eq!(apply(&line, LineEdit::Quantity("3 boxes".into())).quantity, 3);
        assert_eq!(apply(&line, LineEdit::Quantity("-".into())).quantity, 0);
    }

    #[test]
    fn test_line_total() {
        let line = LineItem {
            product_name: "Pen".to_string(),
            unit_price: 1.5,
            quantity: 4,
        };
        assert_eq!(line_total(&line), 6.0);
    }

    #[test]
    fn test_parse_line_variants() -> Result<()> {
        let line = parse_line("Coffee beans:12.5:2")?;
        assert_eq!(line.product_name, "Coffee beans");
        assert_eq!(line.unit_price, 12.5);
        assert_eq!(line.quantity, 2);

        let line = parse_line("Filter:3")?;
        assert_eq!(line.quantity, 1);

        let line = parse_line("Cable 2m: USB-C:9.99:1")?;
        assert_eq!(line.product_name, "Cable 2m: USB-C");
        assert_eq!(line.unit_price, 9.99);

        assert!(matches!(parse_line("nothing"), Err(Error::Validation { .. })));

        Ok(())
    }
}
