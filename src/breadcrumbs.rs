//! Breadcrumb trails for portal paths.
//!
//! Every segment of a path becomes one breadcrumb whose `path` is the prefix
//! up to and including that segment:
//!
//! ```text
//! /members/12345/claims?tab=open
//!   Members        /members
//!   Member Detail  /members/12345          (from the route label table)
//!   Claims         /members/12345/claims
//! ```
//!
//! Labels come from the [`RouteLabels`] table when a pattern matches the
//! prefix, and from [`title_case`] of the raw segment otherwise. Both tables
//! travel in a [`NavContext`] that callers build once (usually from
//! [`crate::config::NavConfig::context`]) and pass in.

use crate::route::{RouteLabels, path_segments};
use crate::title_case::{Acronyms, title_case};
use serde::Serialize;
use tracing::trace;

/// One entry in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Absolute path of this level, always starting with `/`.
    pub path: String,
}

/// Label tables used when building breadcrumbs.
#[derive(Debug, Clone, Default)]
pub struct NavContext {
    pub routes: RouteLabels,
    pub acronyms: Acronyms,
}

impl NavContext {
    pub fn new(routes: RouteLabels, acronyms: Acronyms) -> Self {
        Self { routes, acronyms }
    }

    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        breadcrumbs(path, self)
    }
}

/// Drop the `?query` and `#fragment` parts of a path.
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Build the breadcrumb trail for `path`.
///
/// The root path yields no breadcrumbs. Empty segments (trailing or doubled
/// slashes) are skipped.
pub fn breadcrumbs(path: &str, ctx: &NavContext) -> Vec<Breadcrumb> {
    if path == "/" {
        return Vec::new();
    }

    let segments = path_segments(strip_query(path));
    let mut trail = Vec::with_capacity(segments.len());
    let mut cumulative = String::new();

    for segment in segments {
        cumulative.push('/');
        cumulative.push_str(segment);

        let label = match ctx.routes.lookup(&cumulative) {
            Some(label) => label.to_string(),
            None => {
                let derived = title_case(segment, &ctx.acronyms);
                if derived.is_empty() {
                    segment.to_string()
                } else {
                    derived
                }
            }
        };
        trace!(path = cumulative.as_str(), label = label.as_str(), "breadcrumb");

        trail.push(Breadcrumb {
            label,
            path: cumulative.clone(),
        });
    }
    trail
}
