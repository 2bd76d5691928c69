//! Shared test utilities.
//!
//! `MockBackend` is an in-memory stand-in for the REST backend. It keeps the
//! records it is given, logs every call by operation name, and can be told to
//! fail a given operation with a status and optional `detail`.

use crate::{
    api::Backend,
    core::totals,
    entities::{
        Customer, CustomerStatus, CustomerUpdate, LineItem, NewCustomer, NewOrder, Order,
        OrderStatus, OrderUpdate, RecordId,
    },
    errors::{Error, Result},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct MockState {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    next_id: i64,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, (u16, Option<String>)>,
}

impl MockState {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::Int(self.next_id)
    }

    /// Records the call and returns the injected failure for it, if any.
    fn enter(&mut self, operation: &'static str) -> Result<()> {
        self.calls.push(operation);
        match self.failures.get(operation) {
            Some((status, detail)) => Err(Error::Backend {
                status: *status,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn not_found(what: &str) -> Error {
    Error::Backend {
        status: 404,
        detail: Some(format!("{what} not found")),
    }
}

/// In-memory backend double
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    /// Empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with customers and orders. Generated ids start after 100.
    pub fn with_records(customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        Self {
            state: Mutex::new(MockState {
                customers,
                orders,
                next_id: 100,
                ..MockState::default()
            }),
        }
    }

    /// Makes every future call to `operation` fail.
    pub async fn fail(&self, operation: &'static str, status: u16, detail: Option<&str>) {
        self.state
            .lock()
            .await
            .failures
            .insert(operation, (status, detail.map(str::to_string)));
    }

    /// Operation names in call order
    pub async fn calls(&self) -> Vec<&'static str> {
        self.state.lock().await.calls.clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let mut state = self.state.lock().await;
        state.enter("list_customers")?;
        Ok(state.customers.clone())
    }

    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        let mut state = self.state.lock().await;
        state.enter("create_customer")?;
        let optional = |value: &str| (!value.is_empty()).then(|| value.to_string());
        let created = Customer {
            id: state.next_id(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: optional(&customer.phone),
            address: optional(&customer.address),
            status: customer.status,
        };
        state.customers.push(created.clone());
        Ok(created)
    }

    async fn update_customer(&self, id: &RecordId, changes: &CustomerUpdate) -> Result<Customer> {
        let mut state = self.state.lock().await;
        state.enter("update_customer")?;
        let customer = state
            .customers
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| not_found("Customer"))?;
        if let Some(name) = &changes.name {
            customer.name.clone_from(name);
        }
        if let Some(email) = &changes.email {
            customer.email.clone_from(email);
        }
        if let Some(phone) = &changes.phone {
            customer.phone = Some(phone.clone());
        }
        if let Some(address) = &changes.address {
            customer.address = Some(address.clone());
        }
        if let Some(status) = changes.status {
            customer.status = status;
        }
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: &RecordId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.enter("delete_customer")?;
        let before = state.customers.len();
        state.customers.retain(|c| &c.id != id);
        if state.customers.len() == before {
            return Err(not_found("Customer"));
        }
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let mut state = self.state.lock().await;
        state.enter("list_orders")?;
        Ok(state.orders.clone())
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        let mut state = self.state.lock().await;
        state.enter("create_order")?;
        if !state.customers.iter().any(|c| c.id == order.customer_id) {
            return Err(not_found("Customer"));
        }
        let created = Order {
            id: state.next_id(),
            customer_id: order.customer_id.clone(),
            status: order.status,
            items: order.items.clone(),
            discount_type: order.discount_type,
            discount_value: order.discount_value,
            total: totals::compute_totals(&order.items, order.discount_type, order.discount_value)
                .total,
        };
        state.orders.push(created.clone());
        Ok(created)
    }

    async fn update_order(&self, id: &RecordId, changes: &OrderUpdate) -> Result<Order> {
        let mut state = self.state.lock().await;
        state.enter("update_order")?;
        let order = state
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| not_found("Order"))?;
        if let Some(status) = changes.status {
            order.status = status;
        }
        if let Some(items) = &changes.items {
            order.items.clone_from(items);
        }
        if let Some(discount_type) = changes.discount_type {
            order.discount_type = discount_type;
        }
        if let Some(discount_value) = changes.discount_value {
            order.discount_value = discount_value;
        }
        order.total =
            totals::compute_totals(&order.items, order.discount_type, order.discount_value).total;
        Ok(order.clone())
    }

    async fn delete_order(&self, id: &RecordId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.enter("delete_order")?;
        let before = state.orders.len();
        state.orders.retain(|o| &o.id != id);
        if state.orders.len() == before {
            return Err(not_found("Order"));
        }
        Ok(())
    }

    async fn check(&self) -> Result<serde_json::Value> {
        let mut state = self.state.lock().await;
        state.enter("check")?;
        Ok(serde_json::json!({ "backend": "ok" }))
    }
}

/// Creates a customer with sensible defaults.
pub fn test_customer(id: i64, name: &str) -> Customer {
    Customer {
        id: RecordId::Int(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        address: None,
        status: CustomerStatus::Active,
    }
}

/// Creates a line item.
pub fn test_line(name: &str, unit_price: f64, quantity: i64) -> LineItem {
    LineItem {
        product_name: name.to_string(),
        unit_price,
        quantity,
    }
}

/// Creates an order with no discount whose total matches its items.
pub fn test_order(id: i64, customer_id: i64, items: Vec<LineItem>) -> Order {
    let total = totals::subtotal(&items);
    Order {
        id: RecordId::Int(id),
        customer_id: RecordId::Int(customer_id),
        status: OrderStatus::Draft,
        items,
        discount_type: crate::entities::DiscountType::Amount,
        discount_value: 0.0,
        total,
    }
}

/// A backend holding one customer (id 1, "Ada") and one order (id 10) for her.
pub fn seeded_backend() -> MockBackend {
    MockBackend::with_records(
        vec![test_customer(1, "Ada")],
        vec![test_order(
            10,
            1,
            vec![test_line("Notebook", 10.0, 2), test_line("Pencil", 5.0, 3)],
        )],
    )
}
