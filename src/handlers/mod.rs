pub mod orders;
pub mod users;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Title carried by destructive-action responses.
pub const INVENTORY_TITLE: &str = "RoastingRooster Coffee Inventory";

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Result of a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DbActionResponse {
    pub title: String,
    #[serde(rename = "dbActionStatus")]
    pub db_action_status: String,
}

impl DbActionResponse {
    pub fn success() -> Self {
        Self {
            title: INVENTORY_TITLE.to_string(),
            db_action_status: "SUCCESS".to_string(),
        }
    }
}

/// Turns body extraction failures into the regular `{"error": ...}` 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid input: {err}")).into()
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Resource not found".to_string()))
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}
