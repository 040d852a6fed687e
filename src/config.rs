//! Configuration management for the Biblioteca server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Location of the remote library REST API
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RemoteApiConfig {
    pub base_url: String,
    /// Credential exchange endpoint. Defaults to `{base_url}/token/`.
    pub token_url: Option<String>,
    pub timeout_seconds: u64,
}

/// Demo account used by the page orchestrators for the token exchange
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

/// Fixed-count, fixed-delay retry applied to loan lookups
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetryConfig {
    pub attempts: u32,
    pub delay_ms: u64,
}

/// Auto-dismiss delays for transient banners
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BannerConfig {
    pub success_ms: u64,
    pub error_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub remote_api: RemoteApiConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub banners: BannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. BIBLIOTECA_REMOTE_API__BASE_URL
            .add_source(
                Environment::with_prefix("BIBLIOTECA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("remote_api.base_url", env::var("API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl RemoteApiConfig {
    pub fn token_url(&self) -> String {
        match &self.token_url {
            Some(url) => url.clone(),
            None => format!("{}/token/", self.base_url.trim_end_matches('/')),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for RemoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            token_url: None,
            timeout_seconds: 30,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: "fernando".to_string(),
            password: "admin***".to_string(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay_ms: 1000,
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            success_ms: 3000,
            error_ms: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
