use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ids::{OrderId, UserId};
use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::domain::ports::OrderRepository;

/// Read-only projections over orders and their items.
pub struct OrderQueryService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderQueryService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub fn list_pending(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.repo.list_by_status(&OrderStatus::pending())?;
        log::debug!("Loaded {} pending orders", orders.len());
        Ok(orders)
    }

    pub fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.repo.list_all()?;
        log::debug!("Loaded {} orders", orders.len());
        Ok(orders)
    }

    /// `user_id` is the raw path segment.
    pub fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        let user_id: UserId = user_id.parse()?;
        let orders = self.repo.list_by_user(user_id)?;
        log::debug!("Loaded {} orders for user {}", orders.len(), user_id);
        Ok(orders)
    }

    /// Returns every line item of the order, or an empty list when the order
    /// has none (or does not exist).
    pub fn list_items(&self, order_id: &str) -> Result<Vec<OrderItem>, DomainError> {
        let order_id: OrderId = order_id.parse()?;
        let items = self.repo.list_items(order_id)?;
        log::debug!("Loaded {} items for order {}", items.len(), order_id);
        Ok(items)
    }
}
