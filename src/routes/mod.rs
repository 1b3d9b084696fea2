pub mod index;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/users", get(users::list_users))
        .route("/create", post(users::create_user))
        .route("/login", post(users::login))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
