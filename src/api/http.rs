//! HTTP+JSON backend client built on `reqwest`.
//!
//! No retries, no timeouts beyond reqwest's defaults, and no caching: each
//! call maps to exactly one request.

use crate::{
    api::Backend,
    entities::{Customer, CustomerUpdate, NewCustomer, NewOrder, Order, OrderUpdate, RecordId},
    errors::{Error, Result},
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

const CUSTOMERS: &str = "customers";
const ORDERS: &str = "orders";

/// Talks to the backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    /// Returns `Error::Config` if `base_url` cannot be used as a base for API paths.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::Config {
            message: format!("Invalid backend URL '{base_url}': {e}"),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("Backend URL '{base_url}' cannot have paths appended"),
            });
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn collection_url(&self, collection: &str) -> Url {
        self.endpoint(&["api", collection])
    }

    fn record_url(&self, collection: &str, id: &RecordId) -> Url {
        self.endpoint(&["api", collection, &id.to_string()])
    }

    /// Passes 2xx responses through and turns anything else into `Error::Backend`.
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body still yields the status
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        warn!(status = status.as_u16(), ?detail, "Backend rejected request");
        Err(Error::Backend {
            status: status.as_u16(),
            detail,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::ensure_success(response).await?;
        response.json::<T>().await.map_err(Into::into)
    }
}

/// Pulls the `detail` field out of an error body.
///
/// String details are returned as-is; structured ones (e.g. validation error
/// lists) are rendered as compact JSON. Bodies that are not JSON, or have no
/// `detail`, yield `None`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(detail) if detail.trim().is_empty() => None,
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl Backend for HttpBackend {
    #[instrument(skip(self))]
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let response = self
            .client
            .get(self.collection_url(CUSTOMERS))
            .send()
            .await?;
        let customers: Vec<Customer> = Self::read_json(response).await?;
        debug!("Fetched {} customers", customers.len());
        Ok(customers)
    }

    #[instrument(skip(self, customer), fields(name = %customer.name))]
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        let response = self
            .client
            .post(self.collection_url(CUSTOMERS))
            .json(customer)
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, changes), fields(id = %id))]
    async fn update_customer(&self, id: &RecordId, changes: &CustomerUpdate) -> Result<Customer> {
        let response = self
            .client
            .put(self.record_url(CUSTOMERS, id))
            .json(changes)
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_customer(&self, id: &RecordId) -> Result<()> {
        let response = self
            .client
            .delete(self.record_url(CUSTOMERS, id))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>> {
        let response = self.client.get(self.collection_url(ORDERS)).send().await?;
        let orders: Vec<Order> = Self::read_json(response).await?;
        debug!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    #[instrument(skip(self, order), fields(customer_id = %order.customer_id, items = order.items.len()))]
    async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        let response = self
            .client
            .post(self.collection_url(ORDERS))
            .json(order)
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, changes), fields(id = %id))]
    async fn update_order(&self, id: &RecordId, changes: &OrderUpdate) -> Result<Order> {
        let response = self
            .client
            .put(self.record_url(ORDERS, id))
            .json(changes)
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_order(&self, id: &RecordId) -> Result<()> {
        let response = self
            .client
            .delete(self.record_url(ORDERS, id))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn check(&self) -> Result<serde_json::Value> {
        let response = self.client.get(self.endpoint(&["test"])).send().await?;
        Self::read_json(response).await
    }
}
