use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{OrderMutationService, OrderQueryService};
use crate::domain::order::{Order, OrderItem};
use crate::errors::AppError;

use super::{DbActionResponse, MessageResponse};

/// Title shared by every order listing; admin clients key on it.
pub const LIST_TITLE: &str = "Pending Orders";

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    /// Decimal rendered as a string to avoid floating-point issues, e.g. "12.50"
    pub total_amount: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id.get(),
            user_id: o.user_id.get(),
            total_amount: o.total_amount.to_string(),
            status: o.status.as_str().to_string(),
            created_at: o.created_at.to_rfc3339(),
            updated_at: o.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i64,
    pub order_id: i64,
    pub coffee_id: i64,
    pub quantity: i32,
    /// Price at purchase time, as a decimal string
    pub unit_price: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(i: OrderItem) -> Self {
        Self {
            id: i.id,
            order_id: i.order_id.get(),
            coffee_id: i.coffee_id,
            quantity: i.quantity,
            unit_price: i.unit_price.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub title: String,
    pub orders: Vec<OrderResponse>,
}

impl OrderListResponse {
    fn new(title: &str, orders: Vec<Order>) -> Self {
        Self {
            title: title.to_string(),
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemsResponse {
    pub title: String,
    pub order_items: Vec<OrderItemResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// New status; any non-blank value up to 50 characters.
    #[serde(default)]
    pub status: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders/pending
#[utoipa::path(
    get,
    path = "/orders/pending",
    responses(
        (status = 200, description = "Orders whose status is 'pending'", body = OrderListResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_pending_orders(
    service: web::Data<OrderQueryService>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_pending())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderListResponse::new(LIST_TITLE, orders)))
}

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Every order regardless of status", body = OrderListResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderQueryService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_all())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderListResponse::new(LIST_TITLE, orders)))
}

/// GET /orders/user/{id}
#[utoipa::path(
    get,
    path = "/orders/user/{id}",
    params(
        ("id" = i64, Path, description = "Owning user ID"),
    ),
    responses(
        (status = 200, description = "Orders owned by the user", body = OrderListResponse),
        (status = 400, description = "Malformed user ID", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_user_orders(
    service: web::Data<OrderQueryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    let orders = web::block(move || service.list_for_user(&user_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderListResponse::new(LIST_TITLE, orders)))
}

/// GET /orders/{id}/items
///
/// Returns all line items of the order as an array.
#[utoipa::path(
    get,
    path = "/orders/{id}/items",
    params(
        ("id" = i64, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, description = "Line items of the order", body = OrderItemsResponse),
        (status = 400, description = "Malformed order ID", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_order_items(
    service: web::Data<OrderQueryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let items = web::block(move || service.list_items(&order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderItemsResponse {
        title: LIST_TITLE.to_string(),
        order_items: items.into_iter().map(OrderItemResponse::from).collect(),
    }))
}

/// PATCH /orders/{id}
///
/// Overwrites the order's status and refreshes `updated_at`.
#[utoipa::path(
    patch,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID"),
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (
            status = 400,
            description = "Missing status or malformed order ID",
            body = super::ErrorResponse
        ),
        (status = 404, description = "Order not found", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    service: web::Data<OrderMutationService>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let status = body.into_inner().status.unwrap_or_default();

    web::block(move || service.update_status(&order_id, &status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Order status updated successfully".to_string(),
    }))
}

/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, description = "Order deleted", body = DbActionResponse),
        (status = 400, description = "Malformed order ID", body = super::ErrorResponse),
        (status = 404, description = "Order not found", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<OrderMutationService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    web::block(move || service.delete(&order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(DbActionResponse::success()))
}
