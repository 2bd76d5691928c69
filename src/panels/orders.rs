//! Orders panel - customer selector, draft order with line items and live
//! totals, status changes and delete.

use crate::{
    api::Backend,
    core::{forms::OrderDraft, totals::OrderTotals},
    entities::{Customer, Order, OrderStatus, OrderUpdate, RecordId},
    errors::Error,
    panels::{Confirm, Outcome},
};
use std::sync::Arc;
use tracing::{info, warn};

const LOAD_FAILED: &str = "Failed to load orders";
const CUSTOMERS_FAILED: &str = "Failed to load customers";
const CREATE_FAILED: &str = "Failed to create order";
const UPDATE_FAILED: &str = "Update failed";
const DELETE_FAILED: &str = "Delete failed";

/// Shown for orders whose customer is not in the cache
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// Prompt shown before deleting an order
pub const DELETE_PROMPT: &str = "Delete this order?";

/// State and actions of the orders panel
pub struct OrderPanel {
    backend: Arc<dyn Backend>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
    loading: bool,
    error: Option<String>,
    draft: OrderDraft,
}

impl OrderPanel {
    /// Creates an empty panel; call [`OrderPanel::refresh`] to populate it.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            customers: Vec::new(),
            orders: Vec::new(),
            loading: false,
            error: None,
            draft: OrderDraft::default(),
        }
    }

    /// Cached customers for the selector
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Cached orders as of the last successful fetch
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Whether an order fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last error message, if the last action failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The order being edited
    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// The order being edited, for line and discount edits
    pub const fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Live totals of the draft
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        self.draft.totals()
    }

    /// Name of the customer an order belongs to, from the customer cache.
    #[must_use]
    pub fn customer_name(&self, order: &Order) -> &str {
        self.customers
            .iter()
            .find(|c| c.id == order.customer_id)
            .map_or(UNKNOWN_CUSTOMER, |c| c.name.as_str())
    }

    fn record_failure(&mut self, error: &Error, fallback: &str) -> Outcome {
        let message = error.panel_message(fallback);
        warn!("{fallback}: {error}");
        self.error = Some(message);
        Outcome::Failed
    }

    /// Takes the last error message, leaving the panel without one.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    /// Marks an order fetch as started; [`OrderPanel::is_loading`] stays true until it completes.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Reloads the customer selector. A failure keeps the previous list.
    pub async fn fetch_customers(&mut self) -> Outcome {
        match self.backend.list_customers().await {
            Ok(customers) => {
                self.customers = customers;
                Outcome::Done
            }
            Err(e) => self.record_failure(&e, CUSTOMERS_FAILED),
        }
    }

    /// Reloads the order list. A failure keeps the previous list.
    pub async fn fetch_orders(&mut self) -> Outcome {
        self.start_loading();
        let result = self.backend.list_orders().await;
        self.loading = false;

        match result {
            Ok(orders) => {
                info!("Loaded {} orders", orders.len());
                self.orders = orders;
                Outcome::Done
            }
            Err(e) => self.record_failure(&e, LOAD_FAILED),
        }
    }

    /// Loads both customers and orders, as the panel does when first shown.
    pub async fn refresh(&mut self) -> Outcome {
        let customers = self.fetch_customers().await;
        let customer_error = self.take_error();
        let orders = self.fetch_orders().await;
        if self.error.is_none() {
            self.error = customer_error;
        }

        if customers.is_failed() || orders.is_failed() {
            Outcome::Failed
        } else {
            Outcome::Done
        }
    }

    /// Submits the draft. On success the draft is cleared and orders reloaded;
    /// on failure the draft is kept.
    pub async fn create(&mut self) -> Outcome {
        self.error = None;
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.record_failure(&e, CREATE_FAILED),
        };

        match self.backend.create_order(&payload).await {
            Ok(created) => {
                info!(id = %created.id, items = created.items.len(), "Created order");
                self.draft.reset();
                self.fetch_orders().await
            }
            Err(e) => self.record_failure(&e, CREATE_FAILED),
        }
    }

    /// Sends a partial update for one order, then reloads.
    pub async fn update(&mut self, id: &RecordId, changes: &OrderUpdate) -> Outcome {
        self.error = None;
        match self.backend.update_order(id, changes).await {
            Ok(_) => {
                info!(%id, "Updated order");
                self.fetch_orders().await
            }
            Err(e) => self.record_failure(&e, UPDATE_FAILED),
        }
    }

    /// Changes an order's status.
    pub async fn set_status(&mut self, id: &RecordId, status: OrderStatus) -> Outcome {
        self.update(id, &OrderUpdate::status(status)).await
    }

    /// Deletes an order after confirmation. Declining sends nothing.
    pub async fn delete(&mut self, id: &RecordId, confirm: &dyn Confirm) -> Outcome {
        if !confirm.confirm(DELETE_PROMPT) {
            info!(%id, "Order delete cancelled");
            return Outcome::Cancelled;
        }

        self.error = None;
        match self.backend.delete_order(id).await {
            Ok(()) => {
                info!(%id, "Deleted order");
                self.fetch_orders().await
            }
            Err(e) => self.record_failure(&e, DELETE_FAILED),
        }
    }
}
