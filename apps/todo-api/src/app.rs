use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_todos::TodoRepository;

use crate::api;
use crate::config::Config;
use crate::openapi::ApiDoc;

/// Assemble the full HTTP application on top of `repository`.
///
/// Todo routes live under `/api/todos`; `/health`, `/ready` and the OpenAPI
/// endpoints sit at the root.
pub async fn build<R>(repository: R, config: &Config) -> eyre::Result<Router>
where
    R: TodoRepository + Clone + 'static,
{
    let api_routes = api::routes(repository.clone());

    let router = create_router::<ApiDoc>(api_routes, &config.server, &config.environment).await?;

    Ok(router
        .merge(health_router(config.app))
        .merge(api::health::router(repository)))
}
