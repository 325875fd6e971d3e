use diesel::dsl::now;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ids::{OrderId, UserId};
use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_items, orders};

use super::models::{OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn list_by_status(&self, status: &OrderStatus) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .filter(orders::status.eq(status.as_str()))
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .filter(orders::user_id.eq(user_id.get()))
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn list_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id.get()))
            .select(OrderItemRow::as_select())
            .order(order_items::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }

    fn update_status(&self, id: OrderId, status: &OrderStatus) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(orders::table.find(id.get()))
            .set((
                orders::status.eq(status.as_str()),
                orders::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete(&self, id: OrderId) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(orders::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
