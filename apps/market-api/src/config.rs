//! Configuration for Market API

use axum_helpers::TokenConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub token: TokenConfig,
    pub environment: Environment,
    /// Origin allowed by CORS in production; development uses a
    /// permissive layer
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let token = TokenConfig::from_env()?;

        let allowed_origin = std::env::var("ALLOWED_ORIGIN").ok();

        Ok(Self {
            app: app_info!(),
            server,
            token,
            environment,
            allowed_origin,
        })
    }
}
