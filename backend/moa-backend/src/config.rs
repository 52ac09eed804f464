//! Configuration for the MOA backend, loaded from environment variables.
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub openapi: OpenApiConfig,
}

/// HTTP server settings, read from `APP_*` variables.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment name, only used for logging
    #[serde(default = "default_env")]
    pub env: String,

    /// Number of actix workers; actix picks one per core when unset
    #[serde(default)]
    #[validate(range(min = 1, max = 512))]
    pub workers: Option<usize>,
}

/// Overrides for the published API metadata, read from `OPENAPI_*` variables.
///
/// Every field is optional. Unset fields keep the built-in values from
/// [`crate::metadata::api_metadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OpenApiConfig {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub contact_name: Option<String>,

    #[serde(default)]
    pub contact_email: Option<String>,

    /// Comma-separated `url|description` pairs, in display order
    #[serde(default)]
    pub servers: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_env() -> String {
    "development".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            env: default_env(),
            workers: None,
        }
    }
}

impl AppConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl OpenApiConfig {
    /// True when no override is present at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        let app: AppConfig = envy::prefixed("APP_").from_iter(vars.clone())?;
        app.validate().map_err(|e| AppError::Config(format!("APP_*: {}", e)))?;
        let openapi: OpenApiConfig = envy::prefixed("OPENAPI_").from_iter(vars)?;

        Ok(Self { app, openapi })
    }
}
