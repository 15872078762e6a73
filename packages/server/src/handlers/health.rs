use axum::Json;

use crate::error::AppError;
use crate::models::shared::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "home",
    summary = "Liveness check",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse),
    ),
)]
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Competitive programming statistics API".into(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}
