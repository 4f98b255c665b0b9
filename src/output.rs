//! CLI text output.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.
//!
//! ```text
//! $ portal-nav paginate --total 100 --page 5
//! 1 ... 4 [5] 6 ... 10
//!     Pages: 10 (10 per page)
//!     Showing: items 41-50 of 100
//!
//! $ portal-nav breadcrumbs /members/12345/claims
//! 001 Members → /members
//! 002 Member Detail → /members/12345
//! 003 Claims → /members/12345/claims
//! ```

use crate::breadcrumbs::Breadcrumb;
use crate::pagination::{PageItem, Pagination, PaginationError};
use crate::route::RouteLabels;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One-line pager: the current page in brackets.
pub fn format_page_items(items: &[PageItem], current_page: usize) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current_page => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pager line plus page count and visible item window.
pub fn format_pagination(pagination: &Pagination) -> Result<Vec<String>, PaginationError> {
    let items = pagination.range()?;
    let mut lines = Vec::new();

    if items.is_empty() {
        lines.push("(no pages)".to_string());
        return Ok(lines);
    }

    lines.push(format_page_items(&items, pagination.current_page()));
    lines.push(format!(
        "{}Pages: {} ({} per page)",
        indent(1),
        pagination.total_pages(),
        pagination.page_size()
    ));
    let window = pagination.window()?;
    if window.is_empty() {
        lines.push(format!(
            "{}Showing: page {} is out of range",
            indent(1),
            pagination.current_page()
        ));
    } else {
        lines.push(format!(
            "{}Showing: items {}-{} of {}",
            indent(1),
            window.start + 1,
            window.end,
            pagination.total_count()
        ));
    }
    Ok(lines)
}

/// Breadcrumbs as a numbered list of `label → path`.
pub fn format_breadcrumbs(trail: &[Breadcrumb]) -> Vec<String> {
    if trail.is_empty() {
        return vec!["(root)".to_string()];
    }
    trail
        .iter()
        .enumerate()
        .map(|(i, crumb)| format!("{:0>3} {} → {}", i + 1, crumb.label, crumb.path))
        .collect()
}

/// Route table in match-priority order, for `check`.
pub fn format_route_table(routes: &RouteLabels) -> Vec<String> {
    let mut lines = vec!["Routes".to_string()];
    if routes.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (pattern, label) in routes.iter() {
        lines.push(format!("{}{} → {}", indent(1), pattern, label));
    }
    lines
}

pub fn print_pagination(pagination: &Pagination) -> Result<(), PaginationError> {
    for line in format_pagination(pagination)? {
        println!("{line}");
    }
    Ok(())
}

pub fn print_breadcrumbs(trail: &[Breadcrumb]) {
    for line in format_breadcrumbs(trail) {
        println!("{line}");
    }
}

pub fn print_route_table(routes: &RouteLabels) {
    for line in format_route_table(routes) {
        println!("{line}");
    }
}
