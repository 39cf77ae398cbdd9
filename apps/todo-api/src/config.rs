use core_config::{AppInfo, FromEnv, app_info, database::DatabaseConfig, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    /// Present when `DATABASE_URL` is set; selects durable storage
    pub database: Option<DatabaseConfig>,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = DatabaseConfig::from_env_optional()?;

        Ok(Self {
            app: app_info!(),
            server,
            database,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_without_database_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None),
                ("APP_ENV", Some("development")),
                ("PORT", Some("9000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.database.is_none());
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.app.name, "todo-api");
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_with_database_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/todos")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.database.map(|db| db.url),
                    Some("postgres://localhost/todos".to_string())
                );
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_config_rejects_invalid_port() {
        temp_env::with_var("PORT", Some("http"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
