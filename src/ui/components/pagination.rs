//! Page arithmetic for in-memory collections.
//!
//! Everything here is pure: a [`Pagination`] only knows the current page,
//! the page size and which collection it was last bound to. The row count
//! is passed in on every call, so the same state can be rendered against a
//! collection that grows or shrinks between frames.

use std::ops::Range;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page size selector, in cycling order.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];

/// Number of page buttons shown before the window collapses into ellipses.
const MAX_VISIBLE_PAGES: usize = 5;

/// A single entry of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (1-based).
    Page(usize),
    /// A gap between page numbers.
    Ellipsis,
}

/// Pagination state for one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-based.
    page: usize,
    /// Rows per page. Always greater than zero.
    items_per_page: usize,
    /// Identity of the collection the state was last bound to.
    source: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Create pagination state starting on page 1.
    ///
    /// A page size of zero is bumped to one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            page: 1,
            items_per_page: items_per_page.max(1),
            source: None,
        }
    }

    /// The current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Total number of pages for `total_rows` rows. Never less than one.
    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.items_per_page).max(1)
    }

    /// Move to `page` if it lies within `[1, total_pages]`.
    ///
    /// Returns `true` if the page changed. Out-of-range requests leave the
    /// state untouched.
    pub fn set_page(&mut self, page: usize, total_rows: usize) -> bool {
        if page < 1 || page > self.total_pages(total_rows) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Advance one page. Returns `true` if the page changed.
    pub fn next_page(&mut self, total_rows: usize) -> bool {
        self.set_page(self.page + 1, total_rows)
    }

    /// Go back one page. Returns `true` if the page changed.
    pub fn prev_page(&mut self, total_rows: usize) -> bool {
        self.set_page(self.page.saturating_sub(1), total_rows)
    }

    /// Jump to the first page.
    pub fn first_page(&mut self, total_rows: usize) -> bool {
        self.set_page(1, total_rows)
    }

    /// Jump to the last page.
    pub fn last_page(&mut self, total_rows: usize) -> bool {
        self.set_page(self.total_pages(total_rows), total_rows)
    }

    /// Whether there is a page before the current one.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether there is a page after the current one.
    pub fn has_next(&self, total_rows: usize) -> bool {
        self.page < self.total_pages(total_rows)
    }

    /// Pull a stale page back into range after the collection shrank.
    pub fn clamp(&mut self, total_rows: usize) {
        let total_pages = self.total_pages(total_rows);
        if self.page > total_pages {
            self.page = total_pages;
        }
    }

    /// Bind the state to a collection identified by `token`.
    ///
    /// When the token differs from the previously bound one, the state resets
    /// to page 1. Returns `true` on reset.
    pub fn bind_source(&mut self, token: u64) -> bool {
        if self.source == Some(token) {
            return false;
        }
        let had_source = self.source.is_some();
        self.source = Some(token);
        self.page = 1;
        had_source
    }

    /// Index range into the collection for the current page.
    ///
    /// The range is always within `0..total_rows`, and empty when the current
    /// page holds no rows.
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.items_per_page).min(total_rows);
        let end = (start + self.items_per_page).min(total_rows);
        start..end
    }

    /// Slice `rows` down to the current page.
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        &rows[self.range(rows.len())]
    }

    /// Change the page size and return to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.page = 1;
    }

    /// Rotate through [`PAGE_SIZE_OPTIONS`], returning the new size.
    ///
    /// A page size outside the options jumps to the first option.
    pub fn cycle_page_size(&mut self) -> usize {
        let next = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == self.items_per_page)
            .map(|i| PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()])
            .unwrap_or(PAGE_SIZE_OPTIONS[0]);
        self.set_items_per_page(next);
        next
    }

    /// The "Showing x to y of z entries" line.
    pub fn summary(&self, total_rows: usize) -> String {
        let range = self.range(total_rows);
        if range.is_empty() {
            return format!("Showing 0 to 0 of {} entries", total_rows);
        }
        format!(
            "Showing {} to {} of {} entries",
            range.start + 1,
            range.end,
            total_rows
        )
    }

    /// The windowed page-number control for the current page.
    pub fn window(&self, total_rows: usize) -> Vec<PageItem> {
        page_window(self.page, self.total_pages(total_rows))
    }
}

/// Build the page-number control for `current` out of `total` pages.
///
/// Up to five pages are listed in full. Beyond that the first and last pages
/// stay visible and the rest collapses around the current page.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(7);
    if current <= 3 {
        items.extend((1..=4).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 3..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_total_pages_rounds_up() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(23), 3);
        assert_eq!(p.total_pages(20), 2);
        assert_eq!(p.total_pages(1), 1);
    }

    #[test]
    fn test_total_pages_empty_is_one() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 1);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let p = Pagination::new(0);
        assert_eq!(p.items_per_page(), 1);
        assert_eq!(p.total_pages(3), 3);
    }

    #[test]
    fn test_last_page_row_count() {
        for (n, k) in [(23usize, 10usize), (20, 10), (7, 3), (1, 5), (50, 25)] {
            let mut p = Pagination::new(k);
            p.last_page(n);
            let expected = if n % k == 0 { k } else { n % k };
            assert_eq!(p.range(n).len(), expected, "n={} k={}", n, k);
        }
    }

    #[test]
    fn test_twenty_three_rows_scenario() {
        let rows: Vec<usize> = (1..=23).collect();
        let mut p = Pagination::new(10);

        assert_eq!(p.page_slice(&rows), &rows[0..10]);
        assert!(p.set_page(3, rows.len()));
        assert_eq!(p.page_slice(&rows), &[21, 22, 23]);
        assert_eq!(p.total_pages(rows.len()), 3);
    }

    #[test]
    fn test_set_page_out_of_range_is_noop() {
        let mut p = Pagination::new(10);
        p.set_page(2, 23);

        assert!(!p.set_page(0, 23));
        assert_eq!(p.page(), 2);
        assert!(!p.set_page(4, 23));
        assert_eq!(p.page(), 2);
        assert!(!p.set_page(usize::MAX, 23));
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut p = Pagination::new(10);
        assert!(!p.prev_page(23));
        assert_eq!(p.page(), 1);
        assert!(!p.has_prev());
    }

    #[test]
    fn test_next_on_last_page_is_noop() {
        let mut p = Pagination::new(10);
        p.last_page(23);
        assert!(!p.next_page(23));
        assert_eq!(p.page(), 3);
        assert!(!p.has_next(23));
    }

    #[test]
    fn test_empty_collection() {
        let rows: Vec<u8> = Vec::new();
        let mut p = Pagination::new(10);

        assert_eq!(p.total_pages(0), 1);
        assert!(p.page_slice(&rows).is_empty());
        assert_eq!(p.summary(0), "Showing 0 to 0 of 0 entries");
        assert!(!p.next_page(0));
        assert!(!p.has_next(0));
    }

    #[test]
    fn test_summary() {
        let mut p = Pagination::new(10);
        assert_eq!(p.summary(23), "Showing 1 to 10 of 23 entries");
        p.set_page(3, 23);
        assert_eq!(p.summary(23), "Showing 21 to 23 of 23 entries");
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Pagination::new(10);
        p.set_page(5, 50);
        p.clamp(12);
        assert_eq!(p.page(), 2);
        p.clamp(0);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_bind_source_resets_on_change() {
        let mut p = Pagination::new(10);
        assert!(!p.bind_source(1));
        p.set_page(3, 50);

        assert!(!p.bind_source(1));
        assert_eq!(p.page(), 3);

        assert!(p.bind_source(2));
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_cycle_page_size() {
        let mut p = Pagination::new(10);
        p.set_page(2, 50);

        assert_eq!(p.cycle_page_size(), 25);
        assert_eq!(p.page(), 1);
        assert_eq!(p.cycle_page_size(), 50);
        assert_eq!(p.cycle_page_size(), 10);
    }

    #[test]
    fn test_cycle_from_custom_size() {
        let mut p = Pagination::new(5);
        assert_eq!(p.cycle_page_size(), 10);
    }

    #[test]
    fn test_window_small_total_lists_all() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(
            page_window(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(page_window(3, 10), page_window(1, 10));
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_window(8, 10), page_window(10, 10));
    }

    #[test]
    fn test_window_six_pages() {
        assert_eq!(
            page_window(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }
}
