//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! Per-field setters exist so tests can override individual values.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Identity provider tenant, e.g. `my-tenant.eu.auth0.com`.
    pub auth0_domain: String,
    pub api_audience: String,
    pub auth_algorithms: Vec<String>,
    pub jwks_cache_seconds: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Malformed configuration value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "coursework-api".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/dev.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_or("PORT", 8080),
            auth0_domain: env::var("AUTH0_DOMAIN").unwrap_or_default(),
            api_audience: env::var("API_AUDIENCE").unwrap_or_default(),
            auth_algorithms: split_list(
                &env::var("AUTH_ALGORITHMS").unwrap_or_else(|_| "RS256".into()),
            ),
            jwks_cache_seconds: parse_or("JWKS_CACHE_SECONDS", 3600),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_auth0_domain(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.auth0_domain = value.into());
    }

    pub fn set_api_audience(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.api_audience = value.into());
    }

    pub fn set_auth_algorithms(value: &str) {
        let algorithms = split_list(value);
        AppConfig::set_field(|cfg| cfg.auth_algorithms = algorithms);
    }

    pub fn set_jwks_cache_seconds(value: u64) {
        AppConfig::set_field(|cfg| cfg.jwks_cache_seconds = value);
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn auth0_domain() -> String {
    AppConfig::global().auth0_domain.clone()
}

pub fn api_audience() -> String {
    AppConfig::global().api_audience.clone()
}

pub fn auth_algorithms() -> Vec<String> {
    AppConfig::global().auth_algorithms.clone()
}

pub fn jwks_cache_seconds() -> u64 {
    AppConfig::global().jwks_cache_seconds
}

/// Issuer claim the identity provider stamps on its tokens (`https://{domain}/`).
pub fn auth_issuer() -> String {
    format!("https://{}/", auth0_domain())
}

/// Location of the identity provider's published JSON Web Key Set.
pub fn jwks_url() -> String {
    format!("https://{}/.well-known/jwks.json", auth0_domain())
}
