//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::shared::secret::SecretToken;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DatabaseConfig {
    pub url: String,
    #[validate(range(min = 1, message = "max_connections must be at least 1"))]
    pub max_connections: u32,
    pub min_connections: u32,
    #[validate(range(min = 1, message = "acquire_timeout_secs must be at least 1"))]
    pub acquire_timeout_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// GitHub integration configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GitHubConfig {
    /// Personal access token; contributions are unavailable without it
    #[serde(default)]
    pub token: Option<SecretToken>,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(url(message = "graphql_url must be a valid URL"))]
    pub graphql_url: String,
    #[validate(range(min = 1, message = "timeout_secs must be at least 1"))]
    pub timeout_secs: u64,
    #[validate(range(min = 1, message = "cache_ttl_secs must be at least 1"))]
    pub cache_ttl_secs: i64,
}

/// Rate limiting configuration for the contributions endpoint
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RateLimitConfig {
    /// Requests allowed per client address in one window
    #[validate(range(min = 1, message = "requests must be at least 1"))]
    pub requests: u32,
    #[validate(range(min = 1, message = "period_secs must be at least 1"))]
    pub period_secs: u64,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[validate(nested)]
    pub database: DatabaseConfig,
    /// Enables SQL statement logging
    pub debug: bool,
    pub cors: CorsConfig,
    #[validate(nested)]
    pub github: GitHubConfig,
    #[validate(nested)]
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value fails validation.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| DEFAULT_RUN_MODE.into());

        // Optional file overrides
        let builder = file_sources(&run_mode).into_iter().fold(
            with_defaults(Config::builder())?,
            |builder, name| builder.add_source(File::with_name(&name).required(false)),
        );

        // Override with environment variables (e.g., APP__SERVER__PORT)
        let builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config: Self = with_conventional_env(builder)?.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from a TOML document layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or a value fails validation.
    pub fn from_toml(document: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = with_defaults(Config::builder())?
            .add_source(File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Mode used for `config/{RUN_MODE}.toml` when `RUN_MODE` is unset
const DEFAULT_RUN_MODE: &str = "development";

/// Config files to layer, base file first
fn file_sources(run_mode: &str) -> Vec<String> {
    let mut sources = vec!["config/default".to_string()];
    if run_mode != "default" {
        sources.push(format!("config/{run_mode}"));
    }
    sources
}

fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("database.url", "mysql://portfolio:portfolio@db:3306/portfolio")?
        .set_default("database.max_connections", 5)?
        .set_default("database.min_connections", 0)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("debug", false)?
        .set_default("cors.allowed_origins", vec!["http://localhost:4200"])?
        .set_default("github.username", "Geno-Claw")?
        .set_default("github.graphql_url", "https://api.github.com/graphql")?
        .set_default("github.timeout_secs", 15)?
        .set_default("github.cache_ttl_secs", 3600)?
        .set_default("rate_limit.requests", 30)?
        .set_default("rate_limit.period_secs", 60)
}

/// Apply the flat variables used by the deployment (`DATABASE_URL`, `DEBUG`,
/// `ALLOWED_ORIGINS`, `GITHUB_PAT`) on top of every other source
fn with_conventional_env(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let debug = std::env::var("DEBUG")
        .ok()
        .map(|value| parse_flag(&value))
        .transpose()?;

    builder
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .set_override_option("debug", debug)?
        .set_override_option(
            "cors.allowed_origins",
            std::env::var("ALLOWED_ORIGINS").ok().map(|value| split_origins(&value)),
        )?
        .set_override_option("github.token", std::env::var("GITHUB_PAT").ok())
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Message(format!("DEBUG must be a boolean, got '{other}'"))),
    }
}

/// Split a comma-separated origin list, dropping blanks
fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
