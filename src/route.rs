//! Bracket-syntax route patterns.
//!
//! Portal routes use file-system style placeholders:
//!
//! | Pattern                       | Matches                         | Captures                    |
//! |-------------------------------|---------------------------------|-----------------------------|
//! | `/settings/profile`           | `/settings/profile`             | -                           |
//! | `/members/[memberId]`         | `/members/12345`                | `memberId = "12345"`        |
//! | `/docs/[...slug]`             | `/docs/plans/2024/summary`      | `slug = "plans/2024/summary"` |
//!
//! A pattern is compiled once into a list of [`Segment`]s and then matched
//! segment by segment against a path. `[name]` matches exactly one non-empty
//! segment; `[...name]` matches one or more trailing segments and must come
//! last.
//!
//! [`RouteLabels`] holds the label table used for breadcrumbs. When several
//! patterns match the same path the most specific one wins: more literal
//! segments first, then single parameters before catch-alls, then pattern text.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("route pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("empty parameter name in route pattern {0:?}")]
    EmptyParam(String),
    #[error("unbalanced brackets in segment {segment:?} of route pattern {pattern:?}")]
    UnbalancedBrackets { pattern: String, segment: String },
    #[error("catch-all segment must be last in route pattern {0:?}")]
    CatchAllNotLast(String),
    #[error("duplicate parameter {name:?} in route pattern {pattern:?}")]
    DuplicateParam { pattern: String, name: String },
}

/// Captured parameter values by name.
pub type Params = BTreeMap<String, String>;

/// Non-empty `/`-separated segments of a path, in order.
///
/// Leading, trailing and doubled slashes contribute nothing.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly (case-sensitive).
    Literal(String),
    /// `[name]`: any single segment.
    Param(String),
    /// `[...name]`: one or more remaining segments.
    CatchAll(String),
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl RoutePattern {
    /// Compile `pattern` into segments.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if !pattern.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(pattern.to_string()));
        }

        let raw = path_segments(pattern);
        let mut segments = Vec::with_capacity(raw.len());
        let mut names = BTreeSet::new();

        for (i, text) in raw.iter().enumerate() {
            let segment = parse_segment(pattern, text)?;
            match &segment {
                Segment::CatchAll(_) if i + 1 != raw.len() => {
                    return Err(RouteError::CatchAllNotLast(pattern.to_string()));
                }
                Segment::Param(name) | Segment::CatchAll(name) => {
                    if !names.insert(name.clone()) {
                        return Err(RouteError::DuplicateParam {
                            pattern: pattern.to_string(),
                            name: name.clone(),
                        });
                    }
                }
                Segment::Literal(_) => {}
            }
            segments.push(segment);
        }

        Ok(Self {
            source: format!("/{}", raw.join("/")),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(n) | Segment::CatchAll(n) => Some(n.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Sort key: lower sorts first and means "more specific".
    fn specificity(&self) -> (std::cmp::Reverse<usize>, usize) {
        let literals = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();
        let catch_alls = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::CatchAll(_)))
            .count();
        (std::cmp::Reverse(literals), catch_alls)
    }

    pub fn matches(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }

    /// Match `path` exactly and return the captured parameters.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let parts = path_segments(path);
        let mut params = Params::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => {
                    if *parts.get(i)? != text.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), parts.get(i)?.to_string());
                }
                Segment::CatchAll(name) => {
                    let rest = parts.get(i..)?;
                    if rest.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), rest.join("/"));
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

fn parse_segment(pattern: &str, text: &str) -> Result<Segment, RouteError> {
    let unbalanced = || RouteError::UnbalancedBrackets {
        pattern: pattern.to_string(),
        segment: text.to_string(),
    };

    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        if inner.contains(['[', ']']) {
            return Err(unbalanced());
        }
        let (name, catch_all) = match inner.strip_prefix("...") {
            Some(name) => (name, true),
            None => (inner, false),
        };
        if name.is_empty() {
            return Err(RouteError::EmptyParam(pattern.to_string()));
        }
        return Ok(if catch_all {
            Segment::CatchAll(name.to_string())
        } else {
            Segment::Param(name.to_string())
        });
    }

    if text.contains(['[', ']']) {
        return Err(unbalanced());
    }
    Ok(Segment::Literal(text.to_string()))
}

/// Route-pattern → display-label table, kept in match-priority order.
#[derive(Debug, Clone, Default)]
pub struct RouteLabels {
    entries: Vec<(RoutePattern, String)>,
}

impl RouteLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every `(pattern, label)` pair.
    pub fn from_pairs<I, P, L>(pairs: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: AsRef<str>,
        L: Into<String>,
    {
        let mut labels = Self::new();
        for (pattern, label) in pairs {
            labels.insert(pattern.as_ref(), label)?;
        }
        Ok(labels)
    }

    /// Add or replace the label for `pattern`.
    pub fn insert(&mut self, pattern: &str, label: impl Into<String>) -> Result<(), RouteError> {
        let compiled = RoutePattern::parse(pattern)?;
        let label = label.into();
        match self.entries.iter_mut().find(|(p, _)| p.source == compiled.source) {
            Some(entry) => entry.1 = label,
            None => {
                self.entries.push((compiled, label));
                self.entries.sort_by(|(a, _), (b, _)| {
                    a.specificity()
                        .cmp(&b.specificity())
                        .then_with(|| a.source.cmp(&b.source))
                });
            }
        }
        Ok(())
    }

    /// Label of the most specific pattern matching `path`.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let (pattern, label) = self.entries.iter().find(|(p, _)| p.matches(path))?;
        debug!(path, pattern = pattern.as_str(), label = label.as_str(), "route label matched");
        Some(label)
    }

    /// Entries in match-priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&RoutePattern, &str)> {
        self.entries.iter().map(|(p, l)| (p, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
