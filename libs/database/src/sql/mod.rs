//! SeaORM connection management, migrations and health probing
//!
//! Backend-agnostic: the URL scheme decides whether PostgreSQL or SQLite is
//! used.

mod connector;
mod health;

pub use connector::{
    close, connect, connect_from_config, connect_from_config_with_retry, connect_options,
    connect_with_options, run_migrations,
};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
