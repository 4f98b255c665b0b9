//! HTML fragments for the pager and breadcrumb controls.
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the HTML output:
//! markup is checked at compile time and every interpolated label is escaped,
//! which matters here because breadcrumb labels are derived from URLs.
//!
//! ```text
//! nav.pager       ul > li (Previous) · li (pages / ellipsis) · li (Next)
//! nav.breadcrumb  ol > li (Home) · li (a) ... li (span[aria-current=page])
//! ```

use crate::breadcrumbs::Breadcrumb;
use crate::pagination::{PageItem, Pagination, PaginationError};
use maud::{Markup, html};

/// Link to `page` under `base_href`, keeping any existing query string.
///
/// A `#fragment` on the base stays at the end of the link.
pub fn page_href(base_href: &str, page: usize) -> String {
    let (base, fragment) = match base_href.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (base_href, None),
    };
    let mut href = if base.ends_with(['?', '&']) {
        format!("{base}page={page}")
    } else if base.contains('?') {
        format!("{base}&page={page}")
    } else {
        format!("{base}?page={page}")
    };
    if let Some(fragment) = fragment {
        href.push('#');
        href.push_str(fragment);
    }
    href
}

/// Renders a pager: previous link, page slots, next link.
///
/// The current page is a non-link `span` with `aria-current="page"`; ellipsis
/// slots are hidden from assistive technology.
pub fn render_pager(pagination: &Pagination, base_href: &str) -> Result<Markup, PaginationError> {
    let items = pagination.range()?;
    Ok(html! {
        nav.pager aria-label="Pagination" {
            ul {
                li.pager-prev {
                    @if let Some(prev) = pagination.previous_page() {
                        a href=(page_href(base_href, prev)) rel="prev" { "Previous" }
                    } @else {
                        span aria-disabled="true" { "Previous" }
                    }
                }
                @for item in &items {
                    @match item {
                        PageItem::Page(n) => {
                            @if *n == pagination.current_page() {
                                li.current { span aria-current="page" { (n) } }
                            } @else {
                                li { a href=(page_href(base_href, *n)) { (n) } }
                            }
                        }
                        PageItem::Ellipsis => {
                            li.ellipsis aria-hidden="true" { "…" }
                        }
                    }
                }
                li.pager-next {
                    @if let Some(next) = pagination.next_page() {
                        a href=(page_href(base_href, next)) rel="next" { "Next" }
                    } @else {
                        span aria-disabled="true" { "Next" }
                    }
                }
            }
        }
    })
}

/// Renders a breadcrumb trail. The last entry is the current page and is not
/// linked.
pub fn render_breadcrumbs(trail: &[Breadcrumb], home_label: Option<&str>) -> Markup {
    html! {
        nav.breadcrumb aria-label="Breadcrumb" {
            ol {
                @if let Some(home) = home_label {
                    li { a href="/" { (home) } }
                }
                @for (i, crumb) in trail.iter().enumerate() {
                    @if i + 1 == trail.len() {
                        li { span aria-current="page" { (crumb.label) } }
                    } @else {
                        li { a href=(crumb.path) { (crumb.label) } }
                    }
                }
            }
        }
    }
}
