use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::config_env::{optional_trimmed_env, parse_u32_env, parse_u64_env, require_env};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_SIMILAR_CASES_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub migrations_dir: PathBuf,
    pub similar_cases: SimilarCasesConfig,
}

/// Connection settings for the remote similar-cases analytics API.
#[derive(Debug, Clone)]
pub struct SimilarCasesConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    MissingVar(String),
    #[error("invalid integer in env var {0}")]
    ParseInt(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_u32_env(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            migrations_dir: env::var("MIGRATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../db/migrations")
                }),
            similar_cases: SimilarCasesConfig::from_env()?,
        })
    }
}

impl SimilarCasesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = validate_http_url(
            "SIMILAR_CASES_API_URL",
            &require_env("SIMILAR_CASES_API_URL")?,
        )?;

        Ok(Self {
            api_url,
            api_key: optional_trimmed_env("SIMILAR_CASES_API_KEY"),
            timeout_ms: parse_u64_env("SIMILAR_CASES_TIMEOUT_MS", DEFAULT_SIMILAR_CASES_TIMEOUT_MS)?,
        })
    }
}

pub(crate) fn validate_http_url(key: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| {
        ConfigError::InvalidConfiguration(format!("{key} is not a valid url: {err}"))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidConfiguration(format!(
            "{key} must start with http:// or https://"
        )));
    }

    Ok(trimmed.to_string())
}
