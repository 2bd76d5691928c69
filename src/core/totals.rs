//! Order total computation.
//!
//! Subtotal, discount and total for a list of line items. Everything here is
//! pure and cheap, so callers recompute on every edit instead of caching.

use crate::entities::{DiscountType, LineItem};

/// Subtotal, discount and total of an order, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderTotals {
    /// Sum of `unit_price * quantity` over all items
    pub subtotal: f64,
    /// Discount applied to the subtotal, always within `0..=subtotal`
    pub discount: f64,
    /// `subtotal - discount`, never negative
    pub total: f64,
}

/// Length of the leading `[sign] digits [. digits] [e [sign] digits]` run of `raw`.
///
/// A dangling `.` or exponent marker is not part of the number.
fn numeric_prefix_len(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = digits_from(exponent);
        if digits > 0 {
            end = exponent + digits;
        }
    }
    end
}

/// Parses a user-typed money value from its numeric prefix, so `"12abc"` is 12.
/// Input without a leading number, or that is not finite, is 0.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let raw = raw.trim();
    raw[..numeric_prefix_len(raw)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Non-finite values count as 0 so a single bad cell cannot poison the sum.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Sum of `unit_price * quantity` over `items`.
#[must_use]
pub fn subtotal(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(|item| {
            #[allow(clippy::cast_precision_loss)]
            let quantity = item.quantity as f64;
            finite_or_zero(finite_or_zero(item.unit_price) * quantity)
        })
        .sum()
}

/// Discount for a given subtotal, clamped to `0..=subtotal`.
#[must_use]
pub fn discount(subtotal: f64, discount_type: DiscountType, discount_value: f64) -> f64 {
    let value = finite_or_zero(discount_value).max(0.0);
    let raw = match discount_type {
        DiscountType::Amount => value,
        DiscountType::Percent => subtotal * (value / 100.0),
    };
    raw.min(subtotal).max(0.0)
}

/// Computes subtotal, discount and total for an order.
#[must_use]
pub fn compute_totals(
    items: &[LineItem],
    discount_type: DiscountType,
    discount_value: f64,
) -> OrderTotals {
    let subtotal = subtotal(items);
    let discount = discount(subtotal, discount_type, discount_value);
    OrderTotals {
        subtotal,
        discount,
        total: (subtotal - discount).max(0.0),
    }
}

/// Formats a money value with two decimals.
#[must_use]
pub fn format_money(value: f64) -> String {
    format!("{:.2}", finite_or_zero(value))
}
