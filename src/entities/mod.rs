//! Entity module - Wire models for the records the backend owns.
//! The client only holds transient copies of these; the backend is the source of truth.

pub mod customer;
mod lenient;
pub mod order;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use customer::{Customer, CustomerStatus, CustomerUpdate, NewCustomer};
pub use order::{DiscountType, LineItem, NewOrder, Order, OrderStatus, OrderUpdate};

/// Opaque backend identifier.
///
/// The backend may hand out integer or string ids; the value is sent back
/// in whatever shape it arrived in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id (e.g. an auto-increment key)
    Int(i64),
    /// String id (e.g. a UUID or document id)
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    /// Ids typed on the command line become integers when they look like one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_string()), Self::Int))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() -> Result<()> {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "a1b2"]"#)?;
        assert_eq!(ids[0], RecordId::Int(7));
        assert_eq!(ids[1], RecordId::Text("a1b2".to_string()));
        assert_eq!(serde_json::to_string(&ids)?, r#"[7,"a1b2"]"#);

        Ok(())
    }

    #[test]
    fn test_record_id_from_str() {
        let Ok(numeric) = "42".parse::<RecordId>();
        assert_eq!(numeric, RecordId::Int(42));
        let Ok(text) = "64f1c0ffee".parse::<RecordId>();
        assert_eq!(text, RecordId::Text("64f1c0ffee".to_string()));
        assert_eq!(RecordId::Int(42).to_string(), "42");
    }
}
