use axum::Router;
use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_todos::{InMemoryTodoRepository, SeaOrmTodoRepository};
use migration::Migrator;
use std::future::Future;
use tracing::info;

mod api;
mod app;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    match &config.database {
        Some(db_config) => {
            info!("DATABASE_URL set, using SeaORM storage");

            let db = database::sql::connect_from_config_with_retry(db_config, None).await?;
            database::sql::run_migrations::<Migrator>(&db, config.app.name).await?;

            let router = app::build(SeaOrmTodoRepository::new(db.clone()), &config).await?;

            serve(router, &config, async move {
                info!("Shutting down: closing database connections");
                database::sql::close(db).await;
            })
            .await
        }
        None => {
            info!("DATABASE_URL not set, using in-memory storage");

            let router = app::build(InMemoryTodoRepository::new(), &config).await?;

            serve(router, &config, async {}).await
        }
    }
}

async fn serve<F>(router: Router, config: &Config, cleanup: F) -> eyre::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(
        timeout = ?config.server.shutdown_timeout,
        "Starting {} v{} with graceful shutdown",
        config.app.name,
        config.app.version
    );

    create_production_app(router, &config.server, cleanup)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", config.app.name);
    Ok(())
}
