use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{Origin, OriginDecision};
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
use tracing::{debug, warn};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Construction validates the options, so evaluation itself cannot fail.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        if matches!(&options.origin, Origin::List(matchers) if matchers.is_empty()) {
            warn!("CORS policy allows no origins; every cross-origin request will be refused");
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin() else {
            return CorsDecision::NotApplicable;
        };

        let decision = match request.requested_method() {
            Some(requested_method) if request.is_preflight() => {
                self.process_preflight(request, origin, requested_method)
            }
            _ => self.process_simple(origin),
        };

        debug!(
            origin,
            method = request.method,
            path = request.path,
            accepted = decision.is_accepted(),
            "evaluated CORS request"
        );
        decision
    }

    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        origin: &str,
        requested_method: &str,
    ) -> CorsDecision {
        let mut headers = HeaderCollection::new();
        let origin_decision = self.resolve_origin(origin, &mut headers);

        if origin_decision == OriginDecision::Disallow {
            return Self::reject_preflight(headers, PreflightRejectionReason::OriginNotAllowed);
        }

        if !self.options.methods.allows_method(requested_method) {
            return Self::reject_preflight(
                headers,
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            );
        }

        let requested_headers = request.requested_headers();
        if !self.options.allowed_headers.allows_headers(requested_headers) {
            return Self::reject_preflight(
                headers,
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: requested_headers.unwrap_or_default().to_string(),
                },
            );
        }

        self.push_allow_origin(&mut headers, &origin_decision, origin);
        self.push_credentials(&mut headers);
        self.push_allow_methods(&mut headers, requested_method);
        self.push_allow_headers(&mut headers, requested_headers);
        if let Some(max_age) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
        }
    }

    fn process_simple(&self, origin: &str) -> CorsDecision {
        let mut headers = HeaderCollection::new();
        let origin_decision = self.resolve_origin(origin, &mut headers);

        if origin_decision == OriginDecision::Disallow {
            return CorsDecision::SimpleRejected(SimpleRejection {
                headers: headers.into_headers(),
                reason: SimpleRejectionReason::OriginNotAllowed,
            });
        }

        self.push_allow_origin(&mut headers, &origin_decision, origin);
        self.push_credentials(&mut headers);
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn resolve_origin(&self, origin: &str, headers: &mut HeaderCollection) -> OriginDecision {
        let decision = self.options.origin.resolve(origin);
        if !self.options.origin.is_any() {
            headers.add_vary(header::ORIGIN);
        }
        decision
    }

    fn reject_preflight(
        headers: HeaderCollection,
        reason: PreflightRejectionReason,
    ) -> CorsDecision {
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }

    fn push_allow_origin(
        &self,
        headers: &mut HeaderCollection,
        decision: &OriginDecision,
        origin: &str,
    ) {
        let value = match decision {
            OriginDecision::Any => WILDCARD,
            OriginDecision::Mirror | OriginDecision::Disallow => origin,
        };
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }

    fn push_credentials(&self, headers: &mut HeaderCollection) {
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    // Credentialed preflights treat `*` as a literal name, so wildcards mirror the request.
    fn push_allow_methods(&self, headers: &mut HeaderCollection, requested_method: &str) {
        match &self.options.methods {
            AllowedMethods::Any if self.options.credentials => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, requested_method);
            }
            methods => {
                if let Some(value) = methods.header_value() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
                }
            }
        }
    }

    fn push_allow_headers(&self, headers: &mut HeaderCollection, requested: Option<&str>) {
        match &self.options.allowed_headers {
            AllowedHeaders::Any if self.options.credentials => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = requested {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
                }
            }
            allowed => {
                if let Some(value) = allowed.header_value() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
