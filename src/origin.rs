use crate::constants::WILDCARD;
use crate::util::equals_ignore_case;
use once_cell::sync::Lazy;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

static ORIGIN_SYNTAX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(?:null|[A-Za-z][A-Za-z0-9+.\-]*://[^/?#\s]+)$").ok());

/// Which origins a policy admits.
#[derive(Clone, Debug, Default)]
pub enum Origin {
    /// `*`: any origin. Incompatible with credentials.
    #[default]
    Any,
    /// Only origins accepted by at least one matcher. An empty list admits nothing.
    List(Vec<OriginMatcher>),
}

/// How an origin resolved against the configured [`Origin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit `Access-Control-Allow-Origin: *`.
    Any,
    /// Echo the request origin.
    Mirror,
    Disallow,
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("origin pattern `{0}` is not of the form scheme://host[:port]")]
    NotAnOrigin(String),
}

#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern { source: String, regex: Regex },
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginMatcher::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            OriginMatcher::Pattern { source, .. } => {
                f.debug_tuple("Pattern").field(source).finish()
            }
        }
    }
}

impl OriginMatcher {
    /// Exact origin, trimmed and without a trailing `/`.
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(normalize_configured_origin(&value.into()))
    }

    /// Raw regular expression, matched case-insensitively against the whole origin
    /// only when the expression anchors itself.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, pattern, PATTERN_COMPILE_BUDGET)
    }

    /// Origin pattern where `*` matches any run of characters, e.g. `https://*.example.com`.
    pub fn wildcard(pattern: &str) -> Result<Self, PatternError> {
        let normalized = normalize_configured_origin(pattern);
        if !is_valid_origin(&normalized.replace(WILDCARD, "x")) {
            return Err(PatternError::NotAnOrigin(normalized));
        }
        let expression = normalized
            .split(WILDCARD)
            .map(escape)
            .collect::<Vec<_>>()
            .join(".*");
        Self::compile(&normalized, &format!("^{expression}$"), PATTERN_COMPILE_BUDGET)
    }

    fn compile(source: &str, expression: &str, budget: Duration) -> Result<Self, PatternError> {
        if expression.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: expression.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{expression})"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self::Pattern {
            source: source.to_owned(),
            regex,
        })
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile(pattern, pattern, budget)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern { regex, .. } => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::exact(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::List(vec![OriginMatcher::exact(value)])
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn none() -> Self {
        Self::List(Vec::new())
    }

    pub fn resolve(&self, request_origin: &str) -> OriginDecision {
        if request_origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(matchers) => {
                if matchers.iter().any(|matcher| matcher.matches(request_origin)) {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Origin::Any)
    }
}

/// Accepts `scheme://host[:port]` and the opaque `null` origin.
pub(crate) fn is_valid_origin(value: &str) -> bool {
    (*ORIGIN_SYNTAX)
        .as_ref()
        .is_some_and(|syntax| syntax.is_match(value.as_bytes()))
}

fn normalize_configured_origin(value: &str) -> String {
    let trimmed = value.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_owned()
}

fn escape(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for ch in literal.chars() {
        if matches!(
            ch,
            '\\' | '.'
                | '+'
                | '*'
                | '?'
                | '('
                | ')'
                | '|'
                | '['
                | ']'
                | '{'
                | '}'
                | '^'
                | '$'
                | '#'
                | '&'
                | '-'
                | '~'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
