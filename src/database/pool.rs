use crate::config::Config;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

pub fn connect_options(config: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
}

/// Connections are opened on first use, so the server can come up before
/// MySQL does. A checkout against an unreachable server fails after
/// `db_acquire_timeout` instead of sqlx's 30 s default.
pub fn create_pool(config: &Config) -> MySqlPool {
    MySqlPoolOptions::new()
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy_with(connect_options(config))
}
