//! Ant-style request path patterns used to select a CORS policy.
//!
//! `/**` matches every path, `*` matches exactly one segment and `**` matches
//! zero or more segments. Empty segments are ignored on both sides, so
//! `/api/` and `/api` are the same pattern.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathPatternError {
    #[error("path pattern is empty")]
    Empty,
    #[error("path pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    #[error("path pattern `{pattern}` uses `*` inside segment `{segment}`; wildcards must fill a whole segment")]
    InvalidWildcard { pattern: String, segment: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Single,
    Deep,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    normalized: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PathPatternError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(PathPatternError::Empty);
        }
        if !trimmed.starts_with('/') {
            return Err(PathPatternError::MissingLeadingSlash(trimmed.to_string()));
        }

        let mut segments = Vec::new();
        for segment in trimmed.split('/').filter(|segment| !segment.is_empty()) {
            let parsed = match segment {
                "*" => Segment::Single,
                "**" => Segment::Deep,
                literal if literal.contains('*') => {
                    return Err(PathPatternError::InvalidWildcard {
                        pattern: trimmed.to_string(),
                        segment: literal.to_string(),
                    });
                }
                literal => Segment::Literal(literal.to_string()),
            };
            // `/**/**` matches exactly what `/**` does
            if parsed == Segment::Deep && segments.last() == Some(&Segment::Deep) {
                continue;
            }
            segments.push(parsed);
        }

        let normalized = format!(
            "/{}",
            segments
                .iter()
                .map(|segment| match segment {
                    Segment::Literal(value) => value.as_str(),
                    Segment::Single => "*",
                    Segment::Deep => "**",
                })
                .collect::<Vec<_>>()
                .join("/")
        );

        Ok(Self {
            normalized,
            segments,
        })
    }

    /// The pattern `/**`, covering every path.
    pub fn all() -> Self {
        Self {
            normalized: "/**".to_string(),
            segments: vec![Segment::Deep],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        match_segments(&self.segments, &parts)
    }
}

fn match_segments(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::Deep, rest)) => (0..=path.len()).any(|skip| match_segments(rest, &path[skip..])),
        Some((Segment::Single, rest)) => !path.is_empty() && match_segments(rest, &path[1..]),
        Some((Segment::Literal(literal), rest)) => {
            path.first() == Some(&literal.as_str()) && match_segments(rest, &path[1..])
        }
    }
}

impl FromStr for PathPattern {
    type Err = PathPatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
