use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A full `users` row, as returned by `SELECT *`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    /// `user` or `admin`. MySQL sends ENUM result columns as strings.
    pub role: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The public identity of a user; never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}
