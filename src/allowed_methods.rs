use crate::constants::{WILDCARD, method};

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Allow any method. Emitted as `*`, or as the requested method when credentials are on.
    Any,
    /// Explicit methods. Case-sensitive, since methods are tokens.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods. A lone `*` selects [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed == WILDCARD {
                return Self::Any;
            }
            if !deduped.contains(&trimmed) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values.iter().any(|allowed| allowed == method),
        }
    }

    /// Header value for a response that does not mirror the request.
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::Any => Some(WILDCARD.to_string()),
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(",")),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::HEAD, method::POST])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
