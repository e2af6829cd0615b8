use crate::constants::WILDCARD;
use crate::util::split_list;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every request header is allowed.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::Any
    }
}

impl AllowedHeaders {
    /// Builds an allow-list, trimming entries and dropping case-insensitive duplicates.
    /// A `*` entry selects [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed == WILDCARD {
                return Self::Any;
            }
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_headers(&self, request_headers: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => match request_headers {
                None => true,
                Some(requested) => split_list(requested).all(|header| {
                    allowed
                        .iter()
                        .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
                }),
            },
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some(WILDCARD.to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
