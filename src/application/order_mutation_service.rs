use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ids::OrderId;
use crate::domain::order::OrderStatus;
use crate::domain::ports::OrderRepository;

/// Status changes and removal of orders.
///
/// Both operations report `NotFound` when the store affected zero rows.
pub struct OrderMutationService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderMutationService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Blind overwrite of the order's status; any non-blank value replaces any
    /// other.
    pub fn update_status(&self, order_id: &str, status: &str) -> Result<(), DomainError> {
        let order_id: OrderId = order_id.parse()?;
        let status = OrderStatus::parse(status)?;

        match self.repo.update_status(order_id, &status)? {
            0 => {
                log::warn!("Status update for order {order_id} matched no rows");
                Err(DomainError::NotFound("Order"))
            }
            _ => {
                log::info!("Order {order_id} status set to '{status}'");
                Ok(())
            }
        }
    }

    /// Deletes the order. Its items go with it through the store's
    /// `ON DELETE CASCADE`.
    pub fn delete(&self, order_id: &str) -> Result<(), DomainError> {
        let order_id: OrderId = order_id.parse()?;

        match self.repo.delete(order_id)? {
            0 => {
                log::warn!("Delete of order {order_id} matched no rows");
                Err(DomainError::NotFound("Order"))
            }
            _ => {
                log::info!("Order {order_id} deleted");
                Ok(())
            }
        }
    }
}
