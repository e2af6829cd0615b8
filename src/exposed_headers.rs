use crate::constants::WILDCARD;
use std::collections::HashSet;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExposedHeaders {
    List(Vec<String>),
    Any,
}

impl Default for ExposedHeaders {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, automatically trimming
    /// whitespace and removing duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();

        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        if deduped.len() == 1 && deduped[0] == WILDCARD {
            return Self::Any;
        }

        Self::List(deduped)
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::Any => Some(WILDCARD.to_string()),
        }
    }

    /// Explicitly configured header names; empty for [`Self::Any`].
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        match self {
            Self::List(values) => values.iter(),
            Self::Any => std::slice::Iter::default(),
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
