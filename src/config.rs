//! TOML configuration for the CORS mappings.
//!
//! ```toml
//! [[mapping]]
//! path = "/**"
//! allowed_origins = ["http://178.62.54.206:8089"]
//! allowed_methods = ["*"]
//! allowed_headers = ["*"]
//! allow_credentials = true
//! ```
//!
//! `allow_credentials` has no default: every mapping states it explicitly.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE, DEFAULT_PREFLIGHT_STATUS, WILDCARD, method};
use crate::exposed_headers::ExposedHeaders;
use crate::options::CorsOptions;
use crate::origin::{Origin, OriginMatcher, PatternError};
use crate::registry::{CorsMappings, CorsRegistry, RegistryError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CORS configuration from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CORS configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid origin pattern `{pattern}` for `{path}`: {source}")]
    InvalidOriginPattern {
        path: String,
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(rename = "mapping", default)]
    pub mappings: Vec<MappingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    pub path: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Origins with `*` wildcards, e.g. `https://*.example.com`.
    #[serde(default)]
    pub allowed_origin_patterns: Vec<String>,
    #[serde(default = "default_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "wildcard")]
    pub allowed_headers: Vec<String>,
    #[serde(default)]
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    #[serde(default = "default_max_age")]
    pub max_age: u64,
    #[serde(default = "default_preflight_status")]
    pub preflight_status: u16,
}

fn default_methods() -> Vec<String> {
    [method::GET, method::HEAD, method::POST]
        .map(String::from)
        .to_vec()
}

fn wildcard() -> Vec<String> {
    vec![WILDCARD.to_string()]
}

fn default_max_age() -> u64 {
    DEFAULT_MAX_AGE
}

fn default_preflight_status() -> u16 {
    DEFAULT_PREFLIGHT_STATUS
}

impl MappingConfig {
    pub fn to_options(&self) -> Result<CorsOptions, ConfigError> {
        let patterns = self
            .allowed_origin_patterns
            .iter()
            .map(|pattern| {
                OriginMatcher::wildcard(pattern).map_err(|source| {
                    ConfigError::InvalidOriginPattern {
                        path: self.path.clone(),
                        pattern: pattern.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let origin = if self.allowed_origins.iter().any(|origin| origin.trim() == WILDCARD) {
            Origin::Any
        } else {
            let mut matchers: Vec<OriginMatcher> = self
                .allowed_origins
                .iter()
                .map(|origin| OriginMatcher::exact(origin.as_str()))
                .collect();
            matchers.extend(patterns);
            Origin::List(matchers)
        };

        Ok(CorsOptions {
            origin,
            methods: AllowedMethods::list(self.allowed_methods.iter().map(String::as_str)),
            allowed_headers: AllowedHeaders::list(self.allowed_headers.iter().map(String::as_str)),
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().map(String::as_str)),
            credentials: self.allow_credentials,
            max_age: Some(self.max_age),
            options_success_status: self.preflight_status,
        })
    }
}

impl CorsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn registry(&self) -> Result<CorsRegistry, ConfigError> {
        let mut registry = CorsRegistry::new();
        for mapping in &self.mappings {
            registry.add_mapping(&mapping.path, mapping.to_options()?)?;
        }
        Ok(registry)
    }

    pub fn into_mappings(self) -> Result<CorsMappings, ConfigError> {
        Ok(self.registry()?.build()?)
    }
}

/// Reads, parses and validates a configuration file in one step.
pub fn load_mappings(path: impl AsRef<Path>) -> Result<CorsMappings, ConfigError> {
    CorsConfig::from_path(path)?.into_mappings()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
