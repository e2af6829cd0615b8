/// Borrowed view of the request fields the CORS engine reads.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestContext<'_> {
    /// The `Origin` header, treating an empty value as absent.
    pub fn origin(&self) -> Option<&str> {
        self.origin.map(str::trim).filter(|value| !value.is_empty())
    }

    /// The `Access-Control-Request-Method` header, treating an empty value as absent.
    pub fn requested_method(&self) -> Option<&str> {
        self.access_control_request_method
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn requested_headers(&self) -> Option<&str> {
        self.access_control_request_headers
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn is_cors(&self) -> bool {
        self.origin().is_some()
    }

    /// Exactly `OPTIONS` carrying both `Origin` and `Access-Control-Request-Method`.
    pub fn is_preflight(&self) -> bool {
        self.method == crate::constants::method::OPTIONS
            && self.is_cors()
            && self.requested_method().is_some()
    }
}
