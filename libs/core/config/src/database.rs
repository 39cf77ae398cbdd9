use crate::{env_parse, env_required, ConfigError, FromEnv};
use std::env;

/// Relational database configuration
///
/// Any URL SeaORM understands is accepted (`postgres://…`, `sqlite://…`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            sqlx_logging: false,
        }
    }

    /// Load the configuration only when `DATABASE_URL` is present.
    ///
    /// Services that can fall back to in-process storage use this instead of
    /// [`FromEnv::from_env`].
    pub fn from_env_optional() -> Result<Option<Self>, ConfigError> {
        if env::var("DATABASE_URL").is_err() {
            return Ok(None);
        }
        Self::from_env().map(Some)
    }
}

impl FromEnv for DatabaseConfig {
    /// Requires DATABASE_URL; pool settings come from
    /// DB_MAX_CONNECTIONS (10), DB_MIN_CONNECTIONS (1),
    /// DB_CONNECT_TIMEOUT_SECS (8) and DB_SQLX_LOGGING (false).
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse("DB_MAX_CONNECTIONS", 10)?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", 1)?,
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", 8)?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", false)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_from_env_success() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/todos")),
                ("DB_MAX_CONNECTIONS", Some("25")),
                ("DB_MIN_CONNECTIONS", None),
                ("DB_CONNECT_TIMEOUT_SECS", None),
                ("DB_SQLX_LOGGING", Some("true")),
            ],
            || {
                let config = DatabaseConfig::from_env().unwrap();
                assert_eq!(config.url, "postgres://localhost/todos");
                assert_eq!(config.max_connections, 25);
                assert_eq!(config.min_connections, 1);
                assert_eq!(config.connect_timeout_secs, 8);
                assert!(config.sqlx_logging);
            },
        );
    }

    #[test]
    fn test_database_config_from_env_missing() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = DatabaseConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_database_config_optional_without_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert_eq!(DatabaseConfig::from_env_optional().unwrap(), None);
        });
    }

    #[test]
    fn test_database_config_optional_rejects_bad_pool_size() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite::memory:")),
                ("DB_MAX_CONNECTIONS", Some("many")),
            ],
            || {
                let err = DatabaseConfig::from_env_optional().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }

    #[test]
    fn test_database_config_new() {
        let config = DatabaseConfig::new("sqlite://todos.db?mode=rwc");
        assert_eq!(config.url, "sqlite://todos.db?mode=rwc");
        assert_eq!(config.max_connections, 10);
    }
}
