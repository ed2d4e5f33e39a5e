#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the hourly wage predictor.
//!
//! Loads the trained wage model once at startup and serves predictions
//! from `GET /predict`. The model is shared read-only between workers, so
//! requests never wait on each other beyond CPU time spent scoring.

mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use wage_predictor_inference::{DEFAULT_MODEL_PATH, ModelLoader, WageModel};

/// Shared application state.
pub struct AppState {
    /// Trained wage model, loaded once and never mutated.
    pub model: Arc<dyn WageModel>,
}

/// Errors in the server's environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid port number.
    #[error("Invalid PORT value {value:?}: expected a number between 0 and 65535")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },
}

/// Startup configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Location of the trained model artifact (`MODEL_PATH`).
    pub model_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT` and `MODEL_PATH`, falling back to the
    /// defaults for any that are unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => match value.trim().parse() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort { value }),
            },
            None => defaults.port,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port,
            model_path: lookup("MODEL_PATH").map_or(defaults.model_path, PathBuf::from),
        })
    }
}

/// Registers the API routes.
///
/// Shared by [`serve`] and the handler tests so both see the same
/// routing and query error handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handlers::query_error))
        .route("/", web::get().to(handlers::info))
        .route("/health", web::get().to(handlers::health))
        .route("/attributes", web::get().to(handlers::attributes))
        .route("/predict", web::get().to(handlers::predict));
}

/// Starts the wage predictor API server.
///
/// Initializes logging, reads the configuration from the environment and
/// hands over to [`serve`]. The caller is responsible for providing the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the configuration is invalid, or
/// for any of the reasons listed on [`serve`].
#[allow(clippy::future_not_send)]
pub async fn run_server(loader: ModelLoader) -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::other(e)
    })?;

    serve(config, loader).await
}

/// Loads the model artifact with `loader` (the scoring backend of the
/// calling binary) and serves the API until shutdown.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the model artifact is missing or
/// cannot be loaded, or the HTTP server fails to bind or encounters a
/// runtime error. No traffic is served if the model fails to load.
#[allow(clippy::future_not_send)]
pub async fn serve(config: ServerConfig, loader: ModelLoader) -> std::io::Result<()> {
    log::info!("Loading wage model from {}...", config.model_path.display());
    let model = loader(&config.model_path).map_err(|e| {
        log::error!("Failed to load wage model: {e}");
        std::io::Error::other(e)
    })?;
    log::info!("Loaded {} model", model.model_type());

    let state = web::Data::new(AppState {
        model: Arc::from(model),
    });

    let ServerConfig { bind_addr, port, .. } = config;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;

    use wage_predictor_inference::ModelError;

    use super::*;

    fn corrupt_artifact(path: &Path) -> Result<Box<dyn WageModel>, ModelError> {
        Err(ModelError::Load {
            path: path.display().to_string(),
            message: "truncated file".to_string(),
        })
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn config_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.model_path, PathBuf::from("models/model_v1.cbm"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn config_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "9000"),
            ("MODEL_PATH", "/opt/wages/model_v2.cbm"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.model_path, PathBuf::from("/opt/wages/model_v2.cbm"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "eighty"));
    }

    #[actix_web::test]
    async fn unloadable_model_prevents_startup() {
        let err = serve(ServerConfig::default(), corrupt_artifact)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("truncated file"), "{err}");
    }
}
