//! # portal-nav
//!
//! Navigation helpers for the member and broker portals: which page numbers a
//! pager shows, and which breadcrumbs a path produces.
//!
//! ```text
//! pagination_range(100, 10, 5, 1)   →  1 ... 4 5 6 ... 10
//! breadcrumbs("/members/12345")     →  Members /members
//!                                      Member Detail /members/12345
//! ```
//!
//! Both are pure functions over their inputs. Breadcrumb labels depend on a
//! route-label table and an acronym list; those are bundled into a
//! [`breadcrumbs::NavContext`] that callers build once and pass explicitly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pagination`] | Pager page ranges with ellipsis collapsing, page windows |
//! | [`breadcrumbs`] | Path → breadcrumb trail, `NavContext` |
//! | [`route`] | `[param]` / `[...rest]` route-pattern compiler and label table |
//! | [`title_case`] | Segment → display label with acronym allow-list |
//! | [`config`] | `portal-nav.toml` loading, merging over stock defaults, validation |
//! | [`render`] | Maud markup for the pager and breadcrumb controls |
//! | [`output`] | CLI text formatting |

pub mod breadcrumbs;
pub mod config;
pub mod output;
pub mod pagination;
pub mod render;
pub mod route;
pub mod title_case;

pub use breadcrumbs::{Breadcrumb, NavContext, breadcrumbs};
pub use pagination::{PageItem, Pagination, PaginationError, pagination_range};
