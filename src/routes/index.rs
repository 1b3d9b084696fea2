use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::dto::user_dto::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn index() -> impl IntoResponse {
    let body = MessageResponse {
        message: "This is the database server!".to_string(),
    };
    (StatusCode::OK, Json(body))
}
