//! Customers panel - list, create form, status toggle and delete.

use crate::{
    api::Backend,
    core::forms::CustomerForm,
    entities::{Customer, CustomerStatus, CustomerUpdate, RecordId},
    errors::Error,
    panels::{Confirm, Outcome},
};
use std::sync::Arc;
use tracing::{info, warn};

const LOAD_FAILED: &str = "Failed to load customers";
const CREATE_FAILED: &str = "Failed to create customer";
const UPDATE_FAILED: &str = "Update failed";
const DELETE_FAILED: &str = "Delete failed";

/// Prompt shown before deleting a customer
pub const DELETE_PROMPT: &str = "Delete this customer?";

/// State and actions of the customers panel
pub struct CustomerPanel {
    backend: Arc<dyn Backend>,
    customers: Vec<Customer>,
    loading: bool,
    error: Option<String>,
    form: CustomerForm,
}

impl CustomerPanel {
    /// Creates an empty panel; call [`CustomerPanel::fetch`] to populate it.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            customers: Vec::new(),
            loading: false,
            error: None,
            form: CustomerForm::default(),
        }
    }

    /// Cached customers as of the last successful fetch
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last error message, if the last action failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The create form
    #[must_use]
    pub const fn form(&self) -> &CustomerForm {
        &self.form
    }

    /// The create form, for editing
    pub const fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.form
    }

    fn record_failure(&mut self, error: &Error, fallback: &str) -> Outcome {
        let message = error.panel_message(fallback);
        warn!("{fallback}: {error}");
        self.error = Some(message);
        Outcome::Failed
    }

    /// Marks a fetch as started; [`CustomerPanel::is_loading`] stays true until it completes.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Reloads the customer list. A failure keeps the previous list.
    pub async fn fetch(&mut self) -> Outcome {
        self.start_loading();
        let result = self.backend.list_customers().await;
        self.loading = false;

        match result {
            Ok(customers) => {
                info!("Loaded {} customers", customers.len());
                self.customers = customers;
                Outcome::Done
            }
            Err(e) => self.record_failure(&e, LOAD_FAILED),
        }
    }

    /// Submits the form. On success the form is cleared and the list reloaded;
    /// on failure the form is kept so it can be corrected.
    pub async fn create(&mut self) -> Outcome {
        self.error = None;
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.record_failure(&e, CREATE_FAILED),
        };

        match self.backend.create_customer(&payload).await {
            Ok(created) => {
                info!(id = %created.id, "Created customer '{}'", created.name);
                self.form.reset();
                self.fetch().await
            }
            Err(e) => self.record_failure(&e, CREATE_FAILED),
        }
    }

    /// Sends a partial update for one customer, then reloads.
    pub async fn update(&mut self, id: &RecordId, changes: &CustomerUpdate) -> Outcome {
        self.error = None;
        match self.backend.update_customer(id, changes).await {
            Ok(_) => {
                info!(%id, "Updated customer");
                self.fetch().await
            }
            Err(e) => self.record_failure(&e, UPDATE_FAILED),
        }
    }

    /// Changes a customer's status.
    pub async fn set_status(&mut self, id: &RecordId, status: CustomerStatus) -> Outcome {
        self.update(id, &CustomerUpdate::status(status)).await
    }

    /// Deletes a customer after confirmation. Declining sends nothing.
    pub async fn delete(&mut self, id: &RecordId, confirm: &dyn Confirm) -> Outcome {
        if !confirm.confirm(DELETE_PROMPT) {
            info!(%id, "Customer delete cancelled");
            return Outcome::Cancelled;
        }

        self.error = None;
        match self.backend.delete_customer(id).await {
            Ok(()) => {
                info!(%id, "Deleted customer");
                self.fetch().await
            }
            Err(e) => self.record_failure(&e, DELETE_FAILED),
        }
    }
}
