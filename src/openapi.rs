//! OpenAPI document for the order-management API.
//!
//! - Swagger UI: `/swagger-ui/`
//! - OpenAPI JSON: `/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::handlers::orders::{
    OrderItemResponse, OrderItemsResponse, OrderListResponse, OrderResponse,
    UpdateOrderStatusRequest,
};
use crate::handlers::users::{UserListResponse, UserResponse};
use crate::handlers::{DbActionResponse, ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee Orders API",
        version = "0.1.0",
        description = "Administrative access to purchase orders, their line items, and users."
    ),
    paths(
        crate::handlers::orders::list_pending_orders,
        crate::handlers::orders::list_orders,
        crate::handlers::orders::list_user_orders,
        crate::handlers::orders::list_order_items,
        crate::handlers::orders::update_order_status,
        crate::handlers::orders::delete_order,
        crate::handlers::users::list_users,
        crate::handlers::users::delete_user,
    ),
    components(schemas(
        OrderResponse,
        OrderItemResponse,
        OrderListResponse,
        OrderItemsResponse,
        UpdateOrderStatusRequest,
        UserResponse,
        UserListResponse,
        DbActionResponse,
        MessageResponse,
        ErrorResponse,
    )),
    tags(
        (name = "orders", description = "Order listing, status updates and deletion"),
        (name = "users", description = "User listing and deletion"),
    )
)]
pub struct ApiDoc;
