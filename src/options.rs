use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE, DEFAULT_PREFLIGHT_STATUS};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{Origin, OriginMatcher, is_valid_origin};
use crate::util::is_http_token;
use thiserror::Error;

/// A single CORS policy. Built once at startup and validated by [`crate::Cors::new`].
///
/// The defaults admit any origin, `GET`/`HEAD`/`POST`, any request header,
/// no credentials and a 30 minute preflight cache.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// `Access-Control-Max-Age` in seconds. `None` omits the header.
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: Some(DEFAULT_MAX_AGE),
            options_success_status: DEFAULT_PREFLIGHT_STATUS,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "a wildcard allowed origin cannot be combined with credentials; list the allowed origins or use an origin pattern instead"
    )]
    AnyOriginWithCredentials,
    #[error(
        "exposing every response header with `*` cannot be combined with credentials; list the exposed headers instead"
    )]
    AnyExposedHeadersWithCredentials,
    #[error("allowed origin `{0}` is not of the form scheme://host[:port]")]
    InvalidOrigin(String),
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name `{0}` is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("preflight success status {0} is not a 2xx status")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.origin {
            Origin::Any if self.credentials => {
                return Err(ValidationError::AnyOriginWithCredentials);
            }
            Origin::Any => {}
            Origin::List(matchers) => {
                for matcher in matchers {
                    if let OriginMatcher::Exact(value) = matcher
                        && !is_valid_origin(value)
                    {
                        return Err(ValidationError::InvalidOrigin(value.clone()));
                    }
                }
            }
        }

        if self.credentials && matches!(self.exposed_headers, ExposedHeaders::Any) {
            return Err(ValidationError::AnyExposedHeadersWithCredentials);
        }

        if let AllowedMethods::List(methods) = &self.methods
            && let Some(invalid) = methods.iter().find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(invalid.clone()));
        }

        if let AllowedHeaders::List(headers) = &self.allowed_headers
            && let Some(invalid) = headers.iter().find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(invalid.clone()));
        }

        if let Some(invalid) = self
            .exposed_headers
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(invalid.clone()));
        }

        if !(200..300).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
