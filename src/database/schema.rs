use crate::error::Result;
use crate::utils::retry::RetryPolicy;
use sqlx::{Executor, MySqlPool};
use tracing::info;

pub const USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100) UNIQUE NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    password VARCHAR(255) NOT NULL,
    role ENUM('user', 'admin') DEFAULT 'admin',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Checks out one connection, creates the `users` table if it is missing,
/// and hands the connection back to the pool.
pub async fn init_schema(pool: &MySqlPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    info!("Connected to MySQL database");
    (&mut *conn).execute(USERS_DDL).await?;
    info!("Database initialized successfully");
    Ok(())
}

/// Repeats `init_schema` under `policy`. With an unbounded policy this only
/// returns once the table exists.
pub async fn ensure_schema(pool: &MySqlPool, policy: RetryPolicy) -> Result<()> {
    policy
        .run("schema_init", |_| async move { init_schema(pool).await })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_is_create_if_absent() {
        let ddl = USERS_DDL.trim_start();
        assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS users"));
        assert!(ddl.contains("ENUM('user', 'admin') DEFAULT 'admin'"));
        assert!(ddl.contains("created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP"));
    }

    fn unreachable_config() -> crate::config::Config {
        crate::config::Config::from_lookup(|name| match name {
            "DB_HOST" => Some("127.0.0.1".to_string()),
            "DB_PORT" => Some("1".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn bounded_policy_gives_up_on_unreachable_database() {
        let pool = crate::database::pool::create_pool(&unreachable_config());
        let policy = RetryPolicy::new(std::time::Duration::from_millis(1), Some(2));
        let err = ensure_schema(&pool, policy).await.unwrap_err();
        assert!(matches!(err, crate::error::Error::Database(_)));
    }

    #[tokio::test]
    async fn failed_attempt_is_bounded_by_acquire_timeout() {
        let config = unreachable_config();
        let pool = crate::database::pool::create_pool(&config);

        let started = std::time::Instant::now();
        let result = init_schema(&pool).await;
        let elapsed = started.elapsed();

        assert!(result.is_err());
        assert!(
            elapsed < config.db_acquire_timeout + std::time::Duration::from_secs(3),
            "attempt took {:?}",
            elapsed
        );
    }
}
