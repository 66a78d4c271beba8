use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL, RetryPolicy};
use crate::infrastructure::observability::TracingConfig;

use super::Environment;

/// Provider key variable used when `APP_GEMINI__API_KEY` is not set.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub retry: RetrySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
    /// Fail at startup instead of per request when no key is configured.
    pub require_api_key: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    pub max_retries: u32,
    pub base_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Loads `.env`, then layers defaults, `appsettings.{environment}` and
    /// `APP_*` variables (`APP_SERVER__PORT=8080`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env().map_err(ConfigError::Message)?;
        Self::load_for(environment)
    }

    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.gemini.api_key = settings
            .gemini
            .api_key
            .take()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("gemini.base_url", DEFAULT_BASE_URL)?
            .set_default("gemini.model", DEFAULT_MODEL)?
            .set_default("gemini.request_timeout_secs", 60)?
            .set_default("gemini.require_api_key", false)?
            .set_default("retry.max_retries", 3)?
            .set_default("retry.base_delay_ms", 1000)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }

    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            level: self.logging.level.clone(),
            json_format: self.logging.enable_json,
        }
    }
}

impl GeminiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl RetrySettings {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_millis(self.base_delay_ms))
    }
}
