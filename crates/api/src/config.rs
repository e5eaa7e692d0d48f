use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Service name reported by `GET /`.
    pub app_name: String,
    /// Deployment environment reported by `GET /` (e.g. `development`).
    pub app_env: String,
    /// Rebuild tour embeddings before accepting traffic.
    pub semantic_index_on_startup: bool,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                                         |
    /// |-----------------------------|-------------------------------------------------|
    /// | `HOST`                      | `0.0.0.0`                                       |
    /// | `PORT`                      | `8080`                                          |
    /// | `CORS_ORIGINS`              | `http://localhost:3000,http://localhost:5173`   |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                                            |
    /// | `STATIC_DIR`                | `static`                                        |
    /// | `APP_NAME`                  | `Tour Server API`                               |
    /// | `APP_ENV`                   | `development`                                   |
    /// | `SEMANTIC_INDEX_ON_STARTUP` | `true`                                          |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));
        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "Tour Server API".into());
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let semantic_index_on_startup = parse_flag(
            &std::env::var("SEMANTIC_INDEX_ON_STARTUP").unwrap_or_else(|_| "true".into()),
        )
        .expect("SEMANTIC_INDEX_ON_STARTUP must be true or false");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            app_name,
            app_env,
            semantic_index_on_startup,
            jwt,
        }
    }
}

/// Log output format, selected by `LOG_FORMAT` (`json` or anything else for plain).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Plain,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
