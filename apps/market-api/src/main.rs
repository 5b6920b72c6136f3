//! Market API - account registration, authentication and profiles

use axum::{routing::get, Router};
use axum_helpers::{
    create_app, create_cors_layer, create_permissive_cors_layer, errors, health_router, TokenAuth,
};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_accounts::{account_router, AccountService, AuthState, InMemoryAccountRepository};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let tokens = TokenAuth::new(&config.token);
    let repository = InMemoryAccountRepository::new();
    let service = AccountService::new(repository, tokens);

    let cors = match &config.allowed_origin {
        Some(origin) => {
            let origin = origin
                .parse()
                .map_err(|_| eyre::eyre!("ALLOWED_ORIGIN is not a valid header value"))?;
            create_cors_layer(origin)
        }
        None => {
            if config.environment.is_production() {
                tracing::warn!("ALLOWED_ORIGIN not set, falling back to permissive CORS");
            }
            create_permissive_cors_layer()
        }
    };

    let app = Router::new()
        .nest("/api/account", account_router(AuthState { service }))
        .merge(health_router(config.app))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback(errors::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(app, &config.server).await?;

    info!("Market API shutdown complete");
    Ok(())
}
