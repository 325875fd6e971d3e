//! In-memory repository doubles for service and handler tests.

use std::str::FromStr;
use std::sync::Mutex;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, Utc};

use crate::domain::errors::DomainError;
use crate::domain::ids::{OrderId, UserId};
use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::domain::ports::{OrderRepository, UserRepository};
use crate::domain::user::User;

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    items: Mutex<Vec<OrderItem>>,
    calls: Mutex<usize>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let repo = Self::new();
        *repo.orders.lock().expect("lock") = orders;
        repo
    }

    pub fn add_item(&self, item: OrderItem) {
        self.items.lock().expect("lock").push(item);
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.orders
            .lock()
            .expect("lock")
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("lock")
    }

    fn record_call(&self) {
        *self.calls.lock().expect("lock") += 1;
    }

    fn filtered(&self, keep: impl Fn(&Order) -> bool) -> Vec<Order> {
        self.record_call();
        self.orders
            .lock()
            .expect("lock")
            .iter()
            .filter(|o| keep(o))
            .cloned()
            .collect()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list_by_status(&self, status: &OrderStatus) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|o| &o.status == status))
    }

    fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|_| true))
    }

    fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|o| o.user_id == user_id))
    }

    fn list_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, DomainError> {
        self.record_call();
        Ok(self
            .items
            .lock()
            .expect("lock")
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }

    fn update_status(&self, id: OrderId, status: &OrderStatus) -> Result<usize, DomainError> {
        self.record_call();
        let mut orders = self.orders.lock().expect("lock");
        let mut affected = 0;
        for order in orders.iter_mut().filter(|o| o.id == id) {
            order.status = status.clone();
            order.updated_at = Utc::now();
            affected += 1;
        }
        Ok(affected)
    }

    fn delete(&self, id: OrderId) -> Result<usize, DomainError> {
        self.record_call();
        let mut orders = self.orders.lock().expect("lock");
        let before = orders.len();
        orders.retain(|o| o.id != id);
        let affected = before - orders.len();
        if affected > 0 {
            self.items
                .lock()
                .expect("lock")
                .retain(|i| i.order_id != id);
        }
        Ok(affected)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().expect("lock").clone())
    }

    fn delete(&self, id: UserId) -> Result<usize, DomainError> {
        let mut users = self.users.lock().expect("lock");
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(before - users.len())
    }
}

/// Fails every call the way a broken connection would.
pub struct FailingRepository;

impl OrderRepository for FailingRepository {
    fn list_by_status(&self, _: &OrderStatus) -> Result<Vec<Order>, DomainError> {
        Err(DomainError::Internal("relation \"orders\" does not exist".into()))
    }

    fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Err(DomainError::Unavailable("timed out waiting for connection".into()))
    }

    fn list_by_user(&self, _: UserId) -> Result<Vec<Order>, DomainError> {
        Err(DomainError::Internal("connection reset".into()))
    }

    fn list_items(&self, _: OrderId) -> Result<Vec<OrderItem>, DomainError> {
        Err(DomainError::Internal("error deserializing column 4".into()))
    }

    fn update_status(&self, _: OrderId, _: &OrderStatus) -> Result<usize, DomainError> {
        Err(DomainError::Internal("connection reset".into()))
    }

    fn delete(&self, _: OrderId) -> Result<usize, DomainError> {
        Err(DomainError::Internal("connection reset".into()))
    }
}

impl UserRepository for FailingRepository {
    fn list(&self) -> Result<Vec<User>, DomainError> {
        Err(DomainError::Internal("connection reset".into()))
    }

    fn delete(&self, _: UserId) -> Result<usize, DomainError> {
        Err(DomainError::Internal("connection reset".into()))
    }
}

pub fn ts(offset_minutes: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
        + Duration::minutes(offset_minutes)
}

pub fn order(id: i64, user_id: i64, status: &str) -> Order {
    Order {
        id: OrderId(id),
        user_id: UserId(user_id),
        total_amount: BigDecimal::from_str("12.50").expect("valid decimal"),
        status: OrderStatus::from_stored(status.to_string()),
        created_at: ts(0),
        updated_at: ts(0),
    }
}

pub fn item(id: i64, order_id: i64, coffee_id: i64, quantity: i32, price: &str) -> OrderItem {
    OrderItem {
        id,
        order_id: OrderId(order_id),
        coffee_id,
        quantity,
        unit_price: BigDecimal::from_str(price).expect("valid decimal"),
    }
}
