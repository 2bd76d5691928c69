//! Customer entity - A person or company orders are placed for.
//!
//! Customers are created from the customer form, toggled between active and
//! inactive, and deleted explicitly. Phone and address are optional.

use crate::entities::RecordId;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Customer record as returned by `GET /api/customers`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend identifier
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone, if any
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address, if any
    #[serde(default)]
    pub address: Option<String>,
    /// Whether the customer is active
    #[serde(default)]
    pub status: CustomerStatus,
}

/// Lifecycle status of a customer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    /// Customer can place orders
    #[default]
    Active,
    /// Customer is kept for history only
    Inactive,
}

impl CustomerStatus {
    /// All statuses in selector order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                message: format!("Unknown customer status '{s}' (expected active or inactive)"),
            })
    }
}

/// Body of `POST /api/customers`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCustomer {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone, empty when not given
    pub phone: String,
    /// Postal address, empty when not given
    pub address: String,
    /// Initial status
    pub status: CustomerStatus,
}

/// Body of `PUT /api/customers/{id}`; only the fields that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
}

impl CustomerUpdate {
    /// An update that only changes the status.
    #[must_use]
    pub fn status(status: CustomerStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_deserializes_with_missing_optionals() -> Result<()> {
        let customer: Customer = serde_json::from_value(json!({
            "id": 3,
            "name": "Ada",
            "email": "ada@example.com",
            "status": "inactive"
        }))?;

        assert_eq!(customer.id, RecordId::Int(3));
        assert_eq!(customer.phone, None);
        assert_eq!(customer.address, None);
        assert_eq!(customer.status, CustomerStatus::Inactive);

        Ok(())
    }

    #[test]
    fn test_status_update_only_sends_status() -> Result<()> {
        let body = serde_json::to_value(CustomerUpdate::status(CustomerStatus::Inactive))?;
        assert_eq!(body, json!({ "status": "inactive" }));

        Ok(())
    }

    #[test]
    fn test_customer_status_parsing() -> Result<()> {
        assert_eq!("Active".parse::<CustomerStatus>()?, CustomerStatus::Active);
        assert!(matches!(
            "archived".parse::<CustomerStatus>(),
            Err(Error::Validation { .. })
        ));

        Ok(())
    }
}
