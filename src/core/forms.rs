//! Form state for the two panels.
//!
//! These structs hold what the user is typing before it is submitted. They know
//! how to validate themselves and turn into request payloads, and nothing else.

use crate::{
    core::{
        line_item::{self, LineEdit},
        totals::{self, OrderTotals},
    },
    entities::{
        CustomerStatus, DiscountType, LineItem, NewCustomer, NewOrder, OrderStatus, RecordId,
    },
    errors::{Error, Result},
};

/// The create-customer form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    /// Required
    pub name: String,
    /// Required, must look like an email address
    pub email: String,
    /// Optional
    pub phone: String,
    /// Optional
    pub address: String,
    /// Defaults to active
    pub status: CustomerStatus,
}

impl CustomerForm {
    /// Clears every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks required fields.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the name is blank or the email has no `@`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Customer name cannot be empty".to_string(),
            });
        }

        let email = self.email.trim();
        let looks_like_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !looks_like_email {
            return Err(Error::Validation {
                message: format!("'{email}' is not a valid email address"),
            });
        }

        Ok(())
    }

    /// Validates the form and builds the request body.
    ///
    /// # Errors
    /// Returns `Error::Validation` when [`CustomerForm::validate`] fails.
    pub fn to_payload(&self) -> Result<NewCustomer> {
        self.validate()?;
        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            status: self.status,
        })
    }
}

/// The order being put together in the order panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    /// Selected customer; required before submitting
    pub customer_id: Option<RecordId>,
    /// Initial status, defaults to draft
    pub status: OrderStatus,
    /// Lines in display order
    pub items: Vec<LineItem>,
    /// How `discount_value` is interpreted
    pub discount_type: DiscountType,
    /// Flat amount or percentage
    pub discount_value: f64,
}

impl OrderDraft {
    /// Appends a blank line.
    pub fn add_line(&mut self) {
        self.items.push(LineItem::blank());
    }

    /// Appends an already built line.
    pub fn push_line(&mut self, line: LineItem) {
        self.items.push(line);
    }

    /// Applies an edit to the line at `index`. Out-of-range indexes are ignored.
    pub fn update_line(&mut self, index: usize, edit: LineEdit) {
        if let Some(line) = self.items.get_mut(index) {
            *line = line_item::apply(line, edit);
        }
    }

    /// Removes the line at `index`. Out-of-range indexes are ignored.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Sets the discount value from raw input; non-numeric input becomes 0.
    pub fn set_discount_value(&mut self, raw: &str) {
        self.discount_value = totals::parse_amount(raw);
    }

    /// Live subtotal/discount/total of the draft.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        totals::compute_totals(&self.items, self.discount_type, self.discount_value)
    }

    /// Clears the draft back to its defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks that the draft can be submitted.
    ///
    /// # Errors
    /// Returns `Error::Validation` if no customer is selected or a line has a blank
    /// name or a quantity below one, and `Error::InvalidAmount` for negative or
    /// non-finite prices and discounts.
    pub fn validate(&self) -> Result<()> {
        if self.customer_id.is_none() {
            return Err(Error::Validation {
                message: "Select a customer".to_string(),
            });
        }

        for (index, line) in self.items.iter().enumerate() {
            let position = index + 1;
            if line.product_name.trim().is_empty() {
                return Err(Error::Validation {
                    message: format!("Line {position} needs an item name"),
                });
            }
            if !line.unit_price.is_finite() || line.unit_price < 0.0 {
                return Err(Error::InvalidAmount {
                    amount: line.unit_price,
                });
            }
            if line.quantity < 1 {
                return Err(Error::Validation {
                    message: format!("Line {position} quantity must be at least 1"),
                });
            }
        }

        if !self.discount_value.is_finite() || self.discount_value < 0.0 {
            return Err(Error::InvalidAmount {
                amount: self.discount_value,
            });
        }

        Ok(())
    }

    /// Validates the draft and builds the request body.
    ///
    /// # Errors
    /// Same as [`OrderDraft::validate`].
    pub fn to_payload(&self) -> Result<NewOrder> {
        self.validate()?;
        let customer_id = self.customer_id.clone().ok_or_else(|| Error::Validation {
            message: "Select a customer".to_string(),
        })?;

        Ok(NewOrder {
            customer_id,
            status: self.status,
            items: self
                .items
                .iter()
                .map(|line| LineItem {
                    product_name: line.product_name.trim().to_string(),
                    ..line.clone()
                })
                .collect(),
            discount_type: self.discount_type,
            discount_value: self.discount_value,
        })
    }
}
