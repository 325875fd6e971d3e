use std::sync::Arc;

use actix_web::web;

use crate::application::{OrderMutationService, OrderQueryService, UserService};
use crate::db::DbPool;
use crate::domain::ports::{OrderRepository, UserRepository};
use crate::infrastructure::{DieselOrderRepository, DieselUserRepository};

/// Services shared by every worker; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub order_queries: web::Data<OrderQueryService>,
    pub order_mutations: web::Data<OrderMutationService>,
    pub users: web::Data<UserService>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self::from_repositories(
            Arc::new(DieselOrderRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool)),
        )
    }

    pub fn from_repositories(
        orders: Arc<dyn OrderRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            order_queries: web::Data::new(OrderQueryService::new(orders.clone())),
            order_mutations: web::Data::new(OrderMutationService::new(orders)),
            users: web::Data::new(UserService::new(users)),
        }
    }
}
