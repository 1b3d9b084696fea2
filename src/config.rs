use crate::error::{Error, Result};
use crate::utils::retry::RetryPolicy;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_acquire_timeout: Duration,
    pub server_host: String,
    pub port: u16,
    pub schema_retry_delay: Duration,
    pub schema_max_attempts: Option<u32>,
    pub wait_for_schema: bool,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads `.env` (if present) and reads every setting from the process
    /// environment, falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let log_format = match get("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for LOG_FORMAT: {}",
                    other
                )))
            }
        };

        Ok(Self {
            db_host: get("DB_HOST", "mysql"),
            db_port: parse_or(&lookup, "DB_PORT", 3306)?,
            db_user: get("DB_USER", "root"),
            db_password: get("DB_PASSWORD", "root"),
            db_name: get("DB_NAME", "simpledb"),
            db_acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                2,
            )?),
            server_host: get("SERVER_HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 8080)?,
            schema_retry_delay: Duration::from_secs(parse_or(
                &lookup,
                "SCHEMA_RETRY_DELAY_SECS",
                5,
            )?),
            schema_max_attempts: parse_opt(&lookup, "SCHEMA_MAX_ATTEMPTS")?,
            wait_for_schema: parse_or(&lookup, "WAIT_FOR_SCHEMA", false)?,
            log_format,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.port)
    }

    pub fn schema_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.schema_retry_delay, self.schema_max_attempts)
    }
}

fn parse_opt<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_opt(lookup, name)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.db_host, "mysql");
        assert_eq!(config.db_port, 3306);
        assert_eq!(config.db_user, "root");
        assert_eq!(config.db_password, "root");
        assert_eq!(config.db_name, "simpledb");
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(2));
        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.schema_retry_delay, Duration::from_secs(5));
        assert_eq!(config.schema_max_attempts, None);
        assert!(!config.wait_for_schema);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("DB_HOST", "localhost"),
            ("DB_NAME", "other"),
            ("PORT", "9000"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "1"),
            ("SCHEMA_MAX_ATTEMPTS", "3"),
            ("WAIT_FOR_SCHEMA", "true"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_name, "other");
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(1));
        assert_eq!(config.schema_max_attempts, Some(3));
        assert!(config.wait_for_schema);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_numbers_are_config_errors() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("PORT")));
    }
}
