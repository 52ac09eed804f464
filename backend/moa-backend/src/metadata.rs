//! API metadata published through the OpenAPI document.
//!
//! The descriptor is built once at startup and shared read-only with every
//! HTTP worker. Built-in values can be overridden through [`OpenApiConfig`];
//! an override set that does not validate is discarded as a whole.
use url::Url;
use validator::Validate;

use crate::config::OpenApiConfig;
use crate::error::{AppError, Result};

pub const DEFAULT_TITLE: &str = "MOA Backend API";
pub const DEFAULT_DESCRIPTION: &str = "Shared household finance app MOAs RESTful backend API";
pub const DEFAULT_VERSION: &str = "0.0.1-SNAPSHOT";
pub const DEFAULT_CONTACT_NAME: &str = "MOA Team";
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@moa.com";

pub const LOCAL_SERVER_URL: &str = "http://localhost:8080";
pub const PRODUCTION_SERVER_URL: &str = "https://api.moa.com";

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ApiMetadata {
    #[validate(length(min = 1))]
    pub title: String,

    pub description: String,

    #[validate(length(min = 1))]
    pub version: String,

    #[validate(nested)]
    pub contact: Contact,

    /// Display order matters: the first entry is the default server
    #[validate(length(min = 1), nested)]
    pub servers: Vec<ServerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Contact {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate, serde::Serialize)]
pub struct ServerEntry {
    #[validate(url)]
    pub url: String,

    pub description: String,
}

impl ServerEntry {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Built-in MOA API metadata. Always succeeds and always returns the same value.
pub fn api_metadata() -> ApiMetadata {
    ApiMetadata {
        title: DEFAULT_TITLE.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        version: DEFAULT_VERSION.to_string(),
        contact: Contact {
            name: DEFAULT_CONTACT_NAME.to_string(),
            email: DEFAULT_CONTACT_EMAIL.to_string(),
        },
        servers: vec![
            ServerEntry::new(LOCAL_SERVER_URL, "Local Server"),
            ServerEntry::new(PRODUCTION_SERVER_URL, "Production Server"),
        ],
    }
}

impl Default for ApiMetadata {
    fn default() -> Self {
        api_metadata()
    }
}

impl ApiMetadata {
    /// Overlay configured overrides on the built-in values and validate the result.
    pub fn from_config(config: &OpenApiConfig) -> Result<Self> {
        let defaults = api_metadata();

        let servers = match config.servers.as_deref() {
            Some(raw) => parse_servers(raw)?,
            None => defaults.servers,
        };

        let metadata = Self {
            title: config.title.clone().unwrap_or(defaults.title),
            description: config.description.clone().unwrap_or(defaults.description),
            version: config.version.clone().unwrap_or(defaults.version),
            contact: Contact {
                name: config.contact_name.clone().unwrap_or(defaults.contact.name),
                email: config
                    .contact_email
                    .clone()
                    .unwrap_or(defaults.contact.email),
            },
            servers,
        };

        metadata.check()?;
        Ok(metadata)
    }

    /// Like [`ApiMetadata::from_config`], but falls back to [`api_metadata`]
    /// when the overrides are rejected.
    pub fn resolve(config: &OpenApiConfig) -> Self {
        if config.is_empty() {
            return api_metadata();
        }

        match Self::from_config(config) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Rejected OpenAPI metadata overrides, using built-in values"
                );
                api_metadata()
            }
        }
    }

    /// Field validation plus the absolute-URL requirement for servers.
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        for server in &self.servers {
            let parsed = Url::parse(&server.url).map_err(|e| {
                AppError::InvalidMetadata(format!("server url `{}`: {}", server.url, e))
            })?;
            if !parsed.has_host() {
                return Err(AppError::InvalidMetadata(format!(
                    "server url `{}` has no host",
                    server.url
                )));
            }
        }

        Ok(())
    }
}

fn parse_servers(raw: &str) -> Result<Vec<ServerEntry>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (url, description) = entry.split_once('|').ok_or_else(|| {
                AppError::InvalidMetadata(format!(
                    "server entry `{}` must look like `url|description`",
                    entry
                ))
            })?;
            Ok(ServerEntry::new(url.trim(), description.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> OpenApiConfig {
        OpenApiConfig {
            title: Some("MOA Staging API".into()),
            servers: Some(
                "https://staging.moa.com|Staging Server, http://localhost:9000|Local Server"
                    .into(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn built_in_metadata_is_deterministic() {
        assert_eq!(api_metadata(), api_metadata());
        assert_eq!(ApiMetadata::default(), api_metadata());
    }

    #[test]
    fn built_in_metadata_matches_published_values() {
        let metadata = api_metadata();

        assert_eq!(metadata.title, "MOA Backend API");
        assert_eq!(
            metadata.description,
            "Shared household finance app MOAs RESTful backend API"
        );
        assert_eq!(metadata.version, "0.0.1-SNAPSHOT");
        assert_eq!(metadata.contact.name, "MOA Team");
        assert_eq!(metadata.contact.email, "contact@moa.com");
        assert_eq!(
            metadata.servers,
            vec![
                ServerEntry::new("http://localhost:8080", "Local Server"),
                ServerEntry::new("https://api.moa.com", "Production Server"),
            ]
        );
    }

    #[test]
    fn built_in_metadata_passes_validation() {
        api_metadata().check().unwrap();
    }

    #[test]
    fn server_urls_are_absolute() {
        for server in api_metadata().servers {
            let url = Url::parse(&server.url).unwrap();
            assert!(matches!(url.scheme(), "http" | "https"));
            assert!(url.host_str().is_some_and(|h| !h.is_empty()));
        }
    }

    #[test]
    fn overrides_keep_unset_fields() {
        let metadata = ApiMetadata::from_config(&overrides()).unwrap();

        assert_eq!(metadata.title, "MOA Staging API");
        assert_eq!(metadata.version, DEFAULT_VERSION);
        assert_eq!(metadata.contact.email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(metadata.servers.len(), 2);
        assert_eq!(metadata.servers[0].url, "https://staging.moa.com");
        assert_eq!(metadata.servers[0].description, "Staging Server");
        assert_eq!(metadata.servers[1].url, "http://localhost:9000");
    }

    #[test]
    fn empty_version_is_rejected() {
        let config = OpenApiConfig {
            version: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            ApiMetadata::from_config(&config),
            Err(AppError::InvalidMetadata(_))
        ));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let config = OpenApiConfig {
            contact_email: Some("moa-team".into()),
            ..Default::default()
        };
        assert!(ApiMetadata::from_config(&config).is_err());
    }

    #[test]
    fn server_without_description_separator_is_rejected() {
        let config = OpenApiConfig {
            servers: Some("https://api.moa.com".into()),
            ..Default::default()
        };
        assert!(ApiMetadata::from_config(&config).is_err());
    }

    #[test]
    fn relative_or_hostless_server_urls_are_rejected() {
        for raw in ["/api|Relative", "mailto:ops@moa.com|Mail"] {
            let config = OpenApiConfig {
                servers: Some(raw.into()),
                ..Default::default()
            };
            assert!(
                ApiMetadata::from_config(&config).is_err(),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn empty_server_list_is_rejected() {
        let config = OpenApiConfig {
            servers: Some(" , ".into()),
            ..Default::default()
        };
        assert!(ApiMetadata::from_config(&config).is_err());
    }

    #[test]
    fn resolve_falls_back_to_built_in_values() {
        let config = OpenApiConfig {
            title: Some("Partially valid".into()),
            contact_email: Some("nope".into()),
            ..Default::default()
        };
        assert_eq!(ApiMetadata::resolve(&config), api_metadata());
        assert_eq!(
            ApiMetadata::resolve(&OpenApiConfig::default()),
            api_metadata()
        );
    }

    #[test]
    fn resolve_uses_valid_overrides() {
        let resolved = ApiMetadata::resolve(&overrides());
        assert_eq!(resolved.title, "MOA Staging API");
    }
}
