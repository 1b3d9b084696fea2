use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::user_dto::{CreateUserPayload, CreatedUserResponse, LoginPayload, LoginResponse},
    error::{Error, Result},
    AppState,
};

/// A request without a JSON content type is treated as an empty object, so
/// it fails field validation rather than body parsing.
fn body_or_default<T: Default>(
    payload: std::result::Result<Json<T>, JsonRejection>,
) -> Result<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(Error::from(rejection)),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Every stored user", body = [crate::models::user::User]),
        (status = 500, description = "Database error", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.list().await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/create",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (
            status = 400,
            description = "Missing name, email or password",
            body = crate::dto::user_dto::ErrorResponse
        ),
        (
            status = 500,
            description = "Database error, including duplicates",
            body = crate::dto::user_dto::ErrorResponse
        )
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let new_user = body_or_default(payload)?.into_new_user()?;
    let name = new_user.name.clone();
    let email = new_user.email.clone();

    let id = state.users.create(new_user).await?;
    tracing::info!(user_id = id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse { id, name, email }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Credentials matched", body = LoginResponse),
        (
            status = 400,
            description = "Missing name or password",
            body = crate::dto::user_dto::ErrorResponse
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = crate::dto::user_dto::ErrorResponse
        ),
        (status = 500, description = "Database error", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let credentials = body_or_default(payload)?.into_credentials()?;

    let Some(user) = state.users.find_by_credentials(credentials).await? else {
        return Err(Error::Unauthorized("Invalid credentials".into()));
    };

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
