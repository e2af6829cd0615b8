use crate::headers::Headers;
use std::fmt;

/// Overall decision returned by [`crate::Cors::check`].
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// Answer the preflight directly: empty body, `status`, `headers`.
    PreflightAccepted { headers: Headers, status: u16 },
    /// Refuse the preflight. `headers` only carries `Vary`.
    PreflightRejected(PreflightRejection),
    /// Let the request through and add `headers` to the response.
    SimpleAccepted { headers: Headers },
    /// Let the request through without CORS grants; the browser withholds the response.
    SimpleRejected(SimpleRejection),
    /// Not a CORS request, or no policy covers the path.
    NotApplicable,
}

#[derive(Debug, Clone)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

impl fmt::Display for PreflightRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginNotAllowed => write!(f, "origin not allowed"),
            Self::MethodNotAllowed { requested_method } => {
                write!(f, "method '{requested_method}' not allowed")
            }
            Self::HeadersNotAllowed { requested_headers } => {
                write!(f, "headers '{requested_headers}' not allowed")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimpleRejection {
    pub headers: Headers,
    pub reason: SimpleRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
}

impl CorsDecision {
    /// Headers to merge into the outgoing response, if any.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PreflightAccepted { headers, .. } | Self::SimpleAccepted { headers } => {
                Some(headers)
            }
            Self::PreflightRejected(rejection) => Some(&rejection.headers),
            Self::SimpleRejected(rejection) => Some(&rejection.headers),
            Self::NotApplicable => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Self::PreflightAccepted { .. } | Self::SimpleAccepted { .. }
        )
    }
}
