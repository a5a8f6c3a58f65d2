use std::time::Duration;

use crate::app::{shell, App};
use crate::errors::{AppError, Result as AppResult};
use crate::server::{AppState, WalletClient};

use axum::routing::get;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub wallet_api_url: String,
    pub wallet_api_token: Option<String>,
    pub wallet_api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let timeout_secs = match read_optional_env("WALLET_API_TIMEOUT_SECS")? {
            Some(value) => value.parse::<u64>().map_err(|_| AppError::InvalidValue {
                name: "WALLET_API_TIMEOUT_SECS".to_string(),
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            wallet_api_url: read_env("WALLET_API_URL")?,
            wallet_api_token: read_optional_env("WALLET_API_TOKEN")?,
            wallet_api_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn read_env(name: &str) -> AppResult<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                Err(AppError::EmptyEnv(name.to_string()))
            } else {
                Ok(trimmed)
            }
        }
        Err(std::env::VarError::NotPresent) => Err(AppError::MissingConfig(name.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => Err(AppError::InvalidEnv(name.to_string())),
    }
}

fn read_optional_env(name: &str) -> AppResult<Option<String>> {
    match read_env(name) {
        Ok(value) => Ok(Some(value)),
        Err(AppError::MissingConfig(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Build the wallet backend client from the configuration
pub fn setup_wallet_client(config: &Config) -> AppResult<WalletClient> {
    tracing::info!(
        url = %config.wallet_api_url,
        timeout_secs = config.wallet_api_timeout.as_secs(),
        with_token = config.wallet_api_token.is_some(),
        "Configuring wallet API client"
    );

    WalletClient::new(
        config.wallet_api_url.clone(),
        config.wallet_api_token.clone(),
        config.wallet_api_timeout,
    )
    .map_err(|e| AppError::Server(format!("Failed to build wallet API client: {e}")))
}

async fn health() -> &'static str {
    "ok"
}

/// Routes served outside of Leptos.
pub fn health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

/// Build the full Axum router (health + Leptos SSR + server functions)
pub fn build_router(app_state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    health_router()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(app_state.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            shell,
        ))
        .layer(cors)
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the environment is never mutated concurrently
    #[test]
    fn config_from_env() {
        std::env::remove_var("WALLET_API_URL");
        assert!(matches!(Config::from_env(), Err(AppError::MissingConfig(_))));

        std::env::set_var("WALLET_API_URL", "  ");
        assert!(matches!(Config::from_env(), Err(AppError::EmptyEnv(_))));

        std::env::set_var("WALLET_API_URL", "http://localhost:8080");
        std::env::remove_var("WALLET_API_TOKEN");
        std::env::set_var("WALLET_API_TIMEOUT_SECS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(AppError::InvalidValue { .. })
        ));

        std::env::set_var("WALLET_API_TIMEOUT_SECS", "5");
        let config = Config::from_env().unwrap();
        assert_eq!(config.wallet_api_url, "http://localhost:8080");
        assert_eq!(config.wallet_api_token, None);
        assert_eq!(config.wallet_api_timeout, Duration::from_secs(5));

        std::env::remove_var("WALLET_API_TIMEOUT_SECS");
        std::env::remove_var("WALLET_API_URL");
    }
}
