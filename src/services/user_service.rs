use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::dto::user_dto::{Credentials, NewUser};
use crate::error::Result;
use crate::models::user::{User, UserSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every row of `users`, in storage order.
    async fn list(&self) -> Result<Vec<User>>;

    /// Inserts one row and returns the id MySQL assigned to it.
    async fn create(&self, user: NewUser) -> Result<u64>;

    /// First row whose name and password both match exactly.
    async fn find_by_credentials(&self, credentials: Credentials) -> Result<Option<UserSummary>>;
}

#[derive(Clone)]
pub struct UserService {
    pool: MySqlPool,
}

impl UserService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserService {
    async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, user: NewUser) -> Result<u64> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(user.name)
            .bind(user.email)
            .bind(user.password)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn find_by_credentials(&self, credentials: Credentials) -> Result<Option<UserSummary>> {
        let user = sqlx::query_as::<_, UserSummary>(
            "SELECT id, name, email FROM users WHERE name = ? AND password = ?",
        )
        .bind(credentials.name)
        .bind(credentials.password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
