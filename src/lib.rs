//! CORS policy for the bobapp backend.
//!
//! A [`CorsRegistry`] maps path patterns to validated [`CorsOptions`]; the
//! resulting [`CorsMappings`] evaluate each request into a [`CorsDecision`]
//! that the HTTP layer turns into response headers.

mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod headers;
#[cfg(feature = "axum")]
pub mod middleware;
mod options;
mod origin;
mod path_pattern;
mod registry;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig, MappingConfig, load_mappings};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision, OriginMatcher, PatternError};
pub use path_pattern::{PathPattern, PathPatternError};
pub use registry::{CorsMappings, CorsRegistry, RegistryError};
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
pub use util::equals_ignore_case;
