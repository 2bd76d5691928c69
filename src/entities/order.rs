//! Order entity - An order placed for a customer, with nested line items and a discount.
//!
//! The backend stores the order and reports its `total`; the client recomputes
//! totals locally only for the draft being edited.

use crate::entities::{RecordId, lenient};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order record as returned by `GET /api/orders`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend identifier
    pub id: RecordId,
    /// The customer this order belongs to
    pub customer_id: RecordId,
    /// Fulfilment status
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub status: OrderStatus,
    /// Ordered products
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub items: Vec<LineItem>,
    /// How `discount_value` is interpreted
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub discount_type: DiscountType,
    /// Flat amount or percentage, depending on `discount_type`
    #[serde(default, deserialize_with = "lenient::money")]
    pub discount_value: f64,
    /// Total as computed by the backend; decimal columns may arrive as strings
    #[serde(default, deserialize_with = "lenient::money")]
    pub total: f64,
}

/// One product entry within an order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text product name
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub product_name: String,
    /// Price per unit
    #[serde(default, deserialize_with = "lenient::money")]
    pub unit_price: f64,
    /// Number of units
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: i64,
}

/// Fulfilment status of an order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Being put together
    #[default]
    Draft,
    /// Submitted, awaiting payment
    Pending,
    /// Payment received
    Paid,
    /// Handed to the carrier
    Shipped,
    /// Will not be fulfilled
    Cancelled,
}

impl OrderStatus {
    /// All statuses in selector order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Pending,
        Self::Paid,
        Self::Shipped,
        Self::Cancelled,
    ];

    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                message: format!(
                    "Unknown order status '{s}' (expected draft, pending, paid, shipped or cancelled)"
                ),
            })
    }
}

/// Whether a discount is a flat amount or a percentage of the subtotal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Flat amount off the subtotal
    #[default]
    Amount,
    /// Percentage of the subtotal
    Percent,
}

impl DiscountType {
    /// Wire name of the discount type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Percent => "percent",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountType {
    type Err = Error;

    /// Accepts the wire names as well as the `$` / `%` selector labels.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amount" | "$" => Ok(Self::Amount),
            "percent" | "%" => Ok(Self::Percent),
            _ => Err(Error::Validation {
                message: format!("Unknown discount type '{s}' (expected amount or percent)"),
            }),
        }
    }
}

/// Body of `POST /api/orders`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewOrder {
    /// The customer the order is for
    pub customer_id: RecordId,
    /// Initial status
    pub status: OrderStatus,
    /// Ordered products
    pub items: Vec<LineItem>,
    /// How `discount_value` is interpreted
    pub discount_type: DiscountType,
    /// Flat amount or percentage
    pub discount_value: f64,
}

/// Body of `PUT /api/orders/{id}`; only the fields that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderUpdate {
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Replacement item list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
    /// New discount type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    /// New discount value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
}

impl OrderUpdate {
    /// An update that only changes the status.
    #[must_use]
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
