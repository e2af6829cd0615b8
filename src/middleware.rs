//! axum integration: a middleware stage evaluated before route dispatch.

use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::registry::CorsMappings;
use crate::result::CorsDecision;
use crate::util::split_list;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::VARY;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::Response;
use std::sync::Arc;
use tracing::warn;

pub type SharedMappings = Arc<CorsMappings>;

/// Layers [`cors_middleware`] over every route and the fallback of `router`,
/// so preflights are answered for any path.
pub fn apply<S>(router: Router<S>, mappings: SharedMappings) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(mappings, cors_middleware))
}

pub async fn cors_middleware(
    State(mappings): State<SharedMappings>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = mappings.check(&owned_ctx.as_request_context());

    match decision {
        CorsDecision::PreflightAccepted { headers, status } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            empty_response(status, &headers)
        }
        CorsDecision::PreflightRejected(rejection) => {
            warn!(
                origin = owned_ctx.origin.as_deref().unwrap_or_default(),
                path = %owned_ctx.path,
                reason = %rejection.reason,
                "rejected CORS preflight"
            );
            empty_response(StatusCode::FORBIDDEN, &rejection.headers)
        }
        CorsDecision::SimpleAccepted { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::SimpleRejected(rejection) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &rejection.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn empty_response(status: StatusCode, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            append_vary(map, value);
            continue;
        }

        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            warn!(header = %name, "skipping CORS header that is not a valid HTTP header");
            continue;
        };
        map.insert(header_name, header_value);
    }
}

/// Appends only the `Vary` tokens the handler did not already send.
fn append_vary(map: &mut HeaderMap, value: &str) {
    let present: Vec<String> = map
        .get_all(VARY)
        .iter()
        .filter_map(|line| line.to_str().ok())
        .flat_map(|line| split_list(line))
        .map(str::to_ascii_lowercase)
        .collect();
    if present.iter().any(|token| token == WILDCARD) {
        return;
    }

    let missing: Vec<&str> = split_list(value)
        .filter(|token| !present.contains(&token.to_ascii_lowercase()))
        .collect();
    if missing.is_empty() {
        return;
    }

    match HeaderValue::from_str(&missing.join(", ")) {
        Ok(header_value) => {
            map.append(VARY, header_value);
        }
        Err(_) => warn!(vary = %value, "skipping Vary value that is not a valid HTTP header"),
    }
}

struct OwnedRequestContext {
    method: String,
    path: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            path: request.uri().path().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

/// Joins repeated header lines, as `Access-Control-Request-Headers` may be split.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
