//! Backend access.
//!
//! Panels talk to the backend only through the [`Backend`] trait. The
//! production implementation is [`HttpBackend`]; tests swap in an in-memory
//! double.

/// `reqwest` implementation of [`Backend`]
pub mod http;

pub use http::HttpBackend;

use crate::{
    entities::{Customer, CustomerUpdate, NewCustomer, NewOrder, Order, OrderUpdate, RecordId},
    errors::Result,
};
use async_trait::async_trait;

/// The REST operations the front-end uses.
///
/// Every method is one HTTP round-trip. Implementations report non-2xx
/// answers as `Error::Backend` carrying the body's `detail` when present.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/customers`
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// `POST /api/customers`
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer>;

    /// `PUT /api/customers/{id}` with only the changed fields
    async fn update_customer(&self, id: &RecordId, changes: &CustomerUpdate) -> Result<Customer>;

    /// `DELETE /api/customers/{id}`
    async fn delete_customer(&self, id: &RecordId) -> Result<()>;

    /// `GET /api/orders`
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// `POST /api/orders`
    async fn create_order(&self, order: &NewOrder) -> Result<Order>;

    /// `PUT /api/orders/{id}` with only the changed fields
    async fn update_order(&self, id: &RecordId, changes: &OrderUpdate) -> Result<Order>;

    /// `DELETE /api/orders/{id}`
    async fn delete_order(&self, id: &RecordId) -> Result<()>;

    /// `GET /test`, the backend's own diagnostic endpoint
    async fn check(&self) -> Result<serde_json::Value>;
}
