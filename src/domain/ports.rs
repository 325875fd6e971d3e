use super::errors::DomainError;
use super::ids::{OrderId, UserId};
use super::order::{Order, OrderItem, OrderStatus};
use super::user::User;

/// Store access for orders and their items.
///
/// Every method is a single round-trip. Mutations return the number of rows
/// affected and leave the not-found decision to the caller.
pub trait OrderRepository: Send + Sync + 'static {
    fn list_by_status(&self, status: &OrderStatus) -> Result<Vec<Order>, DomainError>;
    fn list_all(&self) -> Result<Vec<Order>, DomainError>;
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError>;
    fn list_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, DomainError>;
    /// Overwrites `status` and sets `updated_at` to the store's current time.
    fn update_status(&self, id: OrderId, status: &OrderStatus) -> Result<usize, DomainError>;
    fn delete(&self, id: OrderId) -> Result<usize, DomainError>;
}

pub trait UserRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<User>, DomainError>;
    fn delete(&self, id: UserId) -> Result<usize, DomainError>;
}
