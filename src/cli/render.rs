//! Plain-text rendering of panel state.

use crate::{
    core::{forms::OrderDraft, line_item, totals::format_money},
    entities::{Customer, DiscountType, Order},
    panels::{CustomerPanel, OrderPanel},
};
use std::fmt::Write;

/// Currency-prefixed amount, e.g. `$31.50`
fn money(currency: &str, value: f64) -> String {
    format!("{currency}{}", format_money(value))
}

fn customer_block(customer: &Customer) -> String {
    let phone = customer
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or("—");
    let address = customer
        .address
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or("No address");
    format!(
        "[{}] {} ({})\n    {} · {phone}\n    {address}\n",
        customer.id, customer.name, customer.status, customer.email
    )
}

/// The customer list, or the loading / empty placeholder.
#[must_use]
pub fn customers(panel: &CustomerPanel) -> String {
    if panel.is_loading() {
        return "Loading...\n".to_string();
    }
    if panel.customers().is_empty() {
        return "No customers yet.\n".to_string();
    }
    panel.customers().iter().map(customer_block).collect()
}

fn order_block(panel: &OrderPanel, order: &Order, currency: &str) -> String {
    let mut out = format!(
        "[{}] {}  Total: {}\n    Status: {} · Items: {}\n",
        order.id,
        panel.customer_name(order),
        money(currency, order.total),
        order.status,
        order.items.len()
    );
    for item in &order.items {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "    {} × {}  {}",
            item.product_name,
            item.quantity,
            money(currency, line_item::line_total(item))
        );
    }
    out
}

/// The order list, or the loading / empty placeholder.
#[must_use]
pub fn orders(panel: &OrderPanel, currency: &str) -> String {
    if panel.is_loading() {
        return "Loading...\n".to_string();
    }
    if panel.orders().is_empty() {
        return "No orders yet.\n".to_string();
    }
    panel
        .orders()
        .iter()
        .map(|order| order_block(panel, order, currency))
        .collect()
}

/// The draft order with its lines and live totals.
#[must_use]
pub fn draft(draft: &OrderDraft, currency: &str) -> String {
    let mut out = String::new();
    let customer = draft
        .customer_id
        .as_ref()
        .map_or_else(|| "(none)".to_string(), ToString::to_string);
    let discount = match draft.discount_type {
        DiscountType::Amount => money(currency, draft.discount_value),
        DiscountType::Percent => format!("{}%", format_money(draft.discount_value)),
    };
    let _ = writeln!(
        out,
        "Customer: {customer}  Status: {}  Discount: {discount}",
        draft.status
    );

    if draft.items.is_empty() {
        out.push_str("No items yet. Add a line.\n");
    }
    for (index, item) in draft.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} × {} @ {}  {}",
            index + 1,
            item.product_name,
            item.quantity,
            money(currency, item.unit_price),
            money(currency, line_item::line_total(item))
        );
    }

    let totals = draft.totals();
    let _ = writeln!(
        out,
        "Subtotal: {}  Discount: {}  Total: {}",
        money(currency, totals.subtotal),
        money(currency, totals.discount),
        money(currency, totals.total)
    );
    out
}
