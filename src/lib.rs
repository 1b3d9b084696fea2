pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::user_service::{UserService, UserStore};
use sqlx::MySqlPool;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        Self::from_store(Arc::new(UserService::new(pool)))
    }

    pub fn from_store(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::index::index,
        routes::users::list_users,
        routes::users::create_user,
        routes::users::login,
    ),
    components(schemas(
        models::user::User,
        models::user::UserSummary,
        dto::user_dto::CreateUserPayload,
        dto::user_dto::LoginPayload,
        dto::user_dto::CreatedUserResponse,
        dto::user_dto::LoginResponse,
        dto::user_dto::MessageResponse,
        dto::user_dto::ErrorResponse,
    ))
)]
pub struct ApiDoc;
