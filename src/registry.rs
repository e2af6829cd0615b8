use crate::context::RequestContext;
use crate::cors::Cors;
use crate::options::{CorsOptions, ValidationError};
use crate::path_pattern::{PathPattern, PathPatternError};
use crate::result::CorsDecision;
use indexmap::IndexMap;
use indexmap::map::Entry;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a CORS policy is already registered for `{pattern}`")]
    DuplicateMapping { pattern: String },
    #[error(transparent)]
    InvalidPattern(#[from] PathPatternError),
    #[error("invalid CORS policy for `{pattern}`: {source}")]
    InvalidPolicy {
        pattern: String,
        #[source]
        source: ValidationError,
    },
}

/// Collects one policy per path pattern before the server starts.
///
/// Registering a second policy for an equal pattern is an error, so a path can
/// never be covered by two competing declarations.
#[derive(Debug, Default)]
pub struct CorsRegistry {
    mappings: IndexMap<PathPattern, CorsOptions>,
}

impl CorsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mapping(
        &mut self,
        pattern: &str,
        options: CorsOptions,
    ) -> Result<&mut Self, RegistryError> {
        let pattern = PathPattern::parse(pattern)?;
        match self.mappings.entry(pattern) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateMapping {
                pattern: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(options);
                Ok(self)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Validates every policy and freezes the registry.
    pub fn build(self) -> Result<CorsMappings, RegistryError> {
        let mut entries = Vec::with_capacity(self.mappings.len());
        for (pattern, options) in self.mappings {
            let cors = Cors::new(options).map_err(|source| RegistryError::InvalidPolicy {
                pattern: pattern.to_string(),
                source,
            })?;
            info!(
                pattern = %pattern,
                credentials = cors.options().credentials,
                "registered CORS mapping"
            );
            entries.push((pattern, cors));
        }

        Ok(CorsMappings { entries })
    }
}

/// Immutable, validated path → policy table shared by every request worker.
#[derive(Debug, Clone)]
pub struct CorsMappings {
    entries: Vec<(PathPattern, Cors)>,
}

impl CorsMappings {
    /// Policy for `path`: the first registered pattern that matches.
    pub fn resolve(&self, path: &str) -> Option<&Cors> {
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, cors)| cors)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        match self.resolve(request.path) {
            Some(cors) => cors.check(request),
            None => CorsDecision::NotApplicable,
        }
    }

    pub fn patterns(&self) -> impl Iterator<Item = &PathPattern> {
        self.entries.iter().map(|(pattern, _)| pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
