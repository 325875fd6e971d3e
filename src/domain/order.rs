use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::errors::DomainError;
use super::ids::{OrderId, UserId};

/// Width of the `orders.status` column.
pub const STATUS_MAX_LEN: usize = 50;

/// Order status.
///
/// The status set is open on purpose: any non-blank string can be written over
/// any other, there is no transition table and no terminal state. `pending` is
/// the only value this service itself gives meaning to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const PENDING: &'static str = "pending";

    /// Validates a caller-supplied status.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "Invalid input: Status is required".to_string(),
            ));
        }
        if raw.chars().count() > STATUS_MAX_LEN {
            return Err(DomainError::InvalidArgument(format!(
                "Invalid input: Status must be at most {STATUS_MAX_LEN} characters"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wraps a value read back from the store without validation.
    pub fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn pending() -> Self {
        Self(Self::PENDING.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One catalog line of an order. `unit_price` is the price at purchase time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: OrderId,
    pub coffee_id: i64,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_blank_status_is_accepted() {
        for raw in ["pending", "completed", "cancelled", "shipped", "On Hold"] {
            let status = OrderStatus::parse(raw).expect("status should parse");
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn blank_status_is_rejected() {
        for raw in ["", "   ", "\t"] {
            let err = OrderStatus::parse(raw).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
            assert_eq!(err.to_string(), "Invalid input: Status is required");
        }
    }

    #[test]
    fn status_longer_than_column_is_rejected() {
        let raw = "x".repeat(STATUS_MAX_LEN + 1);
        assert!(matches!(
            OrderStatus::parse(&raw),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(OrderStatus::parse(&"x".repeat(STATUS_MAX_LEN)).is_ok());
    }
}
