//! Pager page-number ranges.
//!
//! A pager control never shows every page once a list grows past a handful of
//! pages. [`pagination_range`] decides which page numbers to render and where
//! to collapse the rest into an ellipsis:
//!
//! ```text
//! total=100 size=10 page=1  siblings=1   1 2 3 4 5 ... 10
//! total=100 size=10 page=5  siblings=1   1 ... 4 5 6 ... 10
//! total=100 size=10 page=10 siblings=1   1 ... 6 7 8 9 10
//! total=30  size=10 page=1  siblings=1   1 2 3
//! ```
//!
//! The first and last page are always present. The result is rebuilt on every
//! call; callers that render often can cache it themselves.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, PartialEq)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// One slot in a pager: a page number or a collapsed run of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl PageItem {
    /// The page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::Ellipsis)
    }
}

/// Text form of the ellipsis marker, shared by `Display` and JSON output.
pub const ELLIPSIS: &str = "...";

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// Pages serialize as bare numbers and the ellipsis as `"..."`, so a range
/// becomes e.g. `[1, "...", 4, 5, 6, "...", 10]`.
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

fn check_page_size(page_size: usize) -> Result<(), PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidArgument(
            "page_size must be greater than zero".into(),
        ));
    }
    Ok(())
}

/// Number of pages needed for `total_count` items.
pub fn total_pages(total_count: usize, page_size: usize) -> Result<usize, PaginationError> {
    check_page_size(page_size)?;
    Ok(total_count.div_ceil(page_size))
}

/// Clamp a requested page into `1..=total_pages` (or to 1 for an empty list).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Item index range shown on `page`.
///
/// Out-of-range pages yield an empty range at the end of the list rather than
/// indices past it.
pub fn page_window(
    total_count: usize,
    page_size: usize,
    page: usize,
) -> Result<Range<usize>, PaginationError> {
    check_page_size(page_size)?;
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    Ok(start..end)
}

fn pages(range: std::ops::RangeInclusive<usize>) -> impl Iterator<Item = PageItem> {
    range.map(PageItem::Page)
}

/// Compute the pager slots for `current_page`.
///
/// `current_page` is not required to be in range: a page of 0 or one past the
/// end still produces a valid sequence containing the first and last page.
///
/// # Errors
///
/// [`PaginationError::InvalidArgument`] when `page_size` is zero.
pub fn pagination_range(
    total_count: usize,
    page_size: usize,
    current_page: usize,
    sibling_count: usize,
) -> Result<Vec<PageItem>, PaginationError> {
    let total = total_pages(total_count, page_size)?;

    // first + last + current + two ellipses, plus the siblings on each side
    let visible_slots = sibling_count.saturating_mul(2).saturating_add(5);
    if total <= visible_slots {
        trace!(total, "pagination: full range");
        return Ok(pages(1..=total).collect());
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total);

    let show_left = left_sibling > 3;
    let show_right = right_sibling < total - 2;

    // Pages in the collapsed edge block: first/last + current + siblings + one spare.
    let edge_block = sibling_count * 2 + 3;

    let items = match (show_left, show_right) {
        (false, true) => {
            trace!(total, edge_block, "pagination: right ellipsis");
            pages(1..=edge_block)
                .chain([PageItem::Ellipsis, PageItem::Page(total)])
                .collect()
        }
        (true, false) => {
            trace!(total, edge_block, "pagination: left ellipsis");
            [PageItem::Page(1), PageItem::Ellipsis]
                .into_iter()
                .chain(pages(total - edge_block + 1..=total))
                .collect()
        }
        (true, true) => {
            trace!(total, left_sibling, right_sibling, "pagination: both ellipses");
            [PageItem::Page(1), PageItem::Ellipsis]
                .into_iter()
                .chain(pages(left_sibling..=right_sibling))
                .chain([PageItem::Ellipsis, PageItem::Page(total)])
                .collect()
        }
        // Neither edge collapsed implies total <= visible_slots, handled above.
        (false, false) => pages(1..=total).collect(),
    };
    Ok(items)
}

/// Pager state for a list: everything a pager control needs to render.
///
/// Only [`Pagination::new`] builds one, so `page_size` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_count: usize,
    page_size: usize,
    current_page: usize,
    sibling_count: usize,
}

impl Pagination {
    /// Pager on page 1 with one sibling on each side.
    pub fn new(total_count: usize, page_size: usize) -> Result<Self, PaginationError> {
        check_page_size(page_size)?;
        Ok(Self {
            total_count,
            page_size,
            current_page: 1,
            sibling_count: 1,
        })
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    pub fn with_siblings(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    pub fn range(&self) -> Result<Vec<PageItem>, PaginationError> {
        pagination_range(
            self.total_count,
            self.page_size,
            self.current_page,
            self.sibling_count,
        )
    }

    /// Item indices shown on the current page.
    pub fn window(&self) -> Result<Range<usize>, PaginationError> {
        page_window(self.total_count, self.page_size, self.current_page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && self.total_pages() > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Previous page, clamped into range.
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous()
            .then(|| clamp_page(self.current_page - 1, self.total_pages()))
    }

    /// Next page, clamped into range.
    pub fn next_page(&self) -> Option<usize> {
        self.has_next()
            .then(|| clamp_page(self.current_page.saturating_add(1), self.total_pages()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn range(total: usize, size: usize, page: usize, siblings: usize) -> Vec<PageItem> {
        pagination_range(total, size, page, siblings).unwrap()
    }

    fn numbers(items: &[PageItem]) -> Vec<usize> {
        items.iter().filter_map(PageItem::page).collect()
    }

    // =========================================================================
    // Documented examples
    // =========================================================================

    #[test]
    fn middle_page_shows_both_ellipses() {
        assert_eq!(
            range(100, 10, 5, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn few_pages_shows_full_range() {
        assert_eq!(range(30, 10, 1, 1), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn first_page_collapses_right() {
        assert_eq!(
            range(100, 10, 1, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_collapses_left() {
        assert_eq!(
            range(100, 10, 10, 1),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn exactly_visible_slots_is_not_collapsed() {
        // 7 pages with one sibling fits 2*1 + 5 slots
        assert_eq!(numbers(&range(70, 10, 4, 1)), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn partial_last_page_counts() {
        assert_eq!(range(21, 10, 1, 1), vec![Page(1), Page(2), Page(3)]);
    }

    // =========================================================================
    // Edge cases
    // =========================================================================

    #[test]
    fn zero_items_is_empty() {
        assert!(range(0, 10, 1, 1).is_empty());
    }

    #[test]
    fn zero_page_size_is_invalid_argument() {
        let err = pagination_range(100, 0, 1, 1).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidArgument(_)));
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn zero_siblings_keeps_only_current() {
        assert_eq!(
            range(200, 10, 10, 0),
            vec![Page(1), Ellipsis, Page(10), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn page_zero_does_not_panic() {
        let items = range(100, 10, 0, 1);
        assert_eq!(items.first(), Some(&Page(1)));
        assert_eq!(items.last(), Some(&Page(10)));
    }

    #[test]
    fn page_past_end_does_not_panic() {
        let items = range(100, 10, 500, 1);
        assert_eq!(items.first(), Some(&Page(1)));
        assert_eq!(items.last(), Some(&Page(10)));
    }

    #[test]
    fn huge_sibling_count_does_not_overflow() {
        let items = range(100, 10, 5, usize::MAX);
        assert_eq!(numbers(&items), (1..=10).collect::<Vec<_>>());
    }

    // =========================================================================
    // Properties over a small input grid
    // =========================================================================

    #[test]
    fn numbers_strictly_ascending_and_bounded() {
        for total in 0..=120 {
            for page in 0..=15 {
                for siblings in 0..=3 {
                    let items = range(total, 7, page, siblings);
                    let nums = numbers(&items);
                    assert!(
                        nums.windows(2).all(|w| w[0] < w[1]),
                        "not ascending: total={total} page={page} siblings={siblings} {nums:?}"
                    );
                    let pages = total.div_ceil(7);
                    if pages > 0 {
                        assert_eq!(nums.first(), Some(&1));
                        assert_eq!(nums.last(), Some(&pages));
                    } else {
                        assert!(items.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn small_totals_never_have_ellipsis() {
        for siblings in 0..=3 {
            let slots = siblings * 2 + 5;
            for pages in 0..=slots {
                let items = range(pages * 5, 5, 1, siblings);
                assert!(items.iter().all(|i| !i.is_ellipsis()));
                assert_eq!(numbers(&items), (1..=pages).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn ellipsis_never_adjacent_or_at_edges() {
        for page in 0..=25 {
            let items = range(200, 10, page, 1);
            assert!(!items[0].is_ellipsis());
            assert!(!items[items.len() - 1].is_ellipsis());
            assert!(
                items
                    .windows(2)
                    .all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis()))
            );
        }
    }

    #[test]
    fn collapsed_range_has_constant_width() {
        // Once collapsed, a pager always renders 2*siblings + 5 slots.
        for page in 1..=20 {
            assert_eq!(range(200, 10, page, 1).len(), 7);
            assert_eq!(range(200, 10, page, 2).len(), 9);
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), Ok(0));
        assert_eq!(total_pages(1, 10), Ok(1));
        assert_eq!(total_pages(10, 10), Ok(1));
        assert_eq!(total_pages(11, 10), Ok(2));
        assert!(total_pages(11, 0).is_err());
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn page_window_slices() {
        assert_eq!(page_window(25, 10, 1), Ok(0..10));
        assert_eq!(page_window(25, 10, 3), Ok(20..25));
        assert_eq!(page_window(25, 10, 4), Ok(25..25));
        assert_eq!(page_window(25, 10, 0), Ok(0..10));
        assert!(page_window(25, 0, 1).is_err());
    }

    #[test]
    fn display_and_json_forms() {
        assert_eq!(Page(4).to_string(), "4");
        assert_eq!(Ellipsis.to_string(), "...");
        let json = serde_json::to_string(&range(100, 10, 5, 1)).unwrap();
        assert_eq!(json, r#"[1,"...",4,5,6,"...",10]"#);
    }

    #[test]
    fn pagination_struct_navigation() {
        let p = Pagination::new(95, 10).unwrap().with_page(5);
        assert_eq!(p.total_pages(), 10);
        assert_eq!(p.previous_page(), Some(4));
        assert_eq!(p.next_page(), Some(6));
        assert_eq!(p.window(), Ok(40..50));
        assert_eq!(p.range().unwrap().len(), 7);

        let first = p.with_page(1);
        assert!(!first.has_previous());
        assert_eq!(first.previous_page(), None);

        let last = p.with_page(10);
        assert!(!last.has_next());
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn pagination_struct_out_of_range_page() {
        let p = Pagination::new(30, 10).unwrap().with_page(8);
        assert!(!p.has_next());
        assert_eq!(p.previous_page(), Some(3));
    }

    #[test]
    fn pagination_struct_rejects_zero_page_size() {
        assert_eq!(
            Pagination::new(10, 0),
            Err(PaginationError::InvalidArgument(
                "page_size must be greater than zero".into()
            ))
        );
    }

    #[test]
    fn pagination_struct_accessors() {
        let p = Pagination::new(25, 10).unwrap().with_page(2).with_siblings(3);
        assert_eq!(p.total_count(), 25);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.sibling_count(), 3);
        assert_eq!(p.total_pages(), 3);
        assert!(p.has_next());
    }

    #[test]
    fn pagination_struct_single_item_per_page() {
        let p = Pagination::new(4, 1).unwrap().with_page(4);
        assert_eq!(p.total_pages(), 4);
        assert!(!p.has_next());
        assert_eq!(p.window(), Ok(3..4));
    }

    #[test]
    fn pagination_struct_empty_list() {
        let p = Pagination::new(0, 10).unwrap();
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert!(p.range().unwrap().is_empty());
    }
}
