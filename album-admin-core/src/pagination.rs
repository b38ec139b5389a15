//! Client-side pagination state, derived from [`NavParams`] and converted
//! back into it. The controller itself is stateless: every function here is a
//! pure mapping, and the only mutable entity is the navigation state owned by
//! the caller. Malformed input is sanitized rather than rejected — a bad
//! query string must never crash a view.

use crate::nav::{NavParams, PAGE_KEY, PAGE_SIZE_KEY};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Width of the page-number window around the current page.
pub const MAX_VISIBLE_PAGES: u32 = 5;
/// Pages skipped by a click on an ellipsis marker.
pub const ELLIPSIS_JUMP: u32 = 5;

/// The pagination view of the navigation state: 1-based page plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub page: u32,
    pub page_size: u32,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl NavState {
    /// Read `page` and `pageSize` out of the navigation parameters.
    /// Missing, non-numeric or non-positive `page` falls back to 1; a
    /// `pageSize` outside [`PAGE_SIZE_OPTIONS`] falls back to 10.
    pub fn read(params: &NavParams) -> Self {
        let page = params
            .get(PAGE_KEY)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let page_size = params
            .get(PAGE_SIZE_KEY)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|s| PAGE_SIZE_OPTIONS.contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        NavState { page, page_size }
    }

    pub fn to_params(&self) -> NavParams {
        NavParams::new()
            .with(PAGE_KEY, self.page.to_string())
            .with(PAGE_SIZE_KEY, self.page_size.to_string())
    }

    /// Navigation state for a page change; the page size is untouched.
    /// Callers are expected to hand in a page already inside
    /// `[1, page_count]` — the boundary buttons disable themselves there.
    pub fn with_page(&self, new_page: u32) -> NavParams {
        NavState {
            page: new_page,
            page_size: self.page_size,
        }
        .to_params()
    }

    /// Navigation state for a page-size change. The current page is kept
    /// as-is, without re-clamping against the new page count; landing past
    /// the end resolves to an empty slice in [`derive_page`].
    pub fn with_page_size(&self, new_page_size: u32) -> NavParams {
        NavState {
            page: self.page,
            page_size: new_page_size,
        }
        .to_params()
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self, page_count: u32) -> bool {
        self.page < page_count
    }
}

/// The slice of `dataset` shown for `(page, page_size)`, clamped to the
/// dataset bounds. An out-of-range page yields an empty slice, never an
/// error.
pub fn derive_page<T>(dataset: &[T], page: u32, page_size: u32) -> &[T] {
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    if start >= dataset.len() {
        return &[];
    }
    let end = start.saturating_add(page_size as usize).min(dataset.len());
    &dataset[start..end]
}

/// Number of pages needed for `len` items. An empty dataset has zero pages,
/// matching the rendered window (no page buttons at all).
pub fn page_count(len: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    (len as u32).div_ceil(page_size)
}

/// One entry of the rendered page window: either a numbered button or a
/// clickable ellipsis. The two ellipsis markers are distinct so each jumps
/// in its own direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    LeftEllipsis,
    RightEllipsis,
}

impl PageItem {
    /// The page a click on this item navigates to, clamped to
    /// `[1, page_count]`.
    pub fn target_page(&self, current: u32, page_count: u32) -> u32 {
        match self {
            PageItem::Page(n) => *n,
            PageItem::LeftEllipsis => current.saturating_sub(ELLIPSIS_JUMP).max(1),
            PageItem::RightEllipsis => (current + ELLIPSIS_JUMP).min(page_count),
        }
    }
}

/// Compute the page-number buttons to show. With `page_count` at most
/// `max_visible`, all pages are listed. Otherwise a window of `max_visible`
/// pages is centered on `current` and clamped so it never slides past
/// `[1, page_count]`; page 1 and the last page are pinned at the edges with
/// ellipsis markers covering the gaps.
pub fn compute_page_window(current: u32, page_count: u32, max_visible: u32) -> Vec<PageItem> {
    if page_count == 0 || max_visible == 0 {
        return Vec::new();
    }
    if page_count <= max_visible {
        return (1..=page_count).map(PageItem::Page).collect();
    }

    let before = max_visible / 2;
    let after = max_visible.div_ceil(2) - 1;

    let mut start = current as i64 - before as i64;
    let mut end = current as i64 + after as i64;
    if start < 1 {
        start = 1;
        end = max_visible as i64;
    }
    if end > page_count as i64 {
        end = page_count as i64;
        start = page_count as i64 - max_visible as i64 + 1;
    }
    let (start, end) = (start as u32, end as u32);

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::LeftEllipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < page_count {
        if end < page_count - 1 {
            items.push(PageItem::RightEllipsis);
        }
        items.push(PageItem::Page(page_count));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavParams;
    use PageItem::{LeftEllipsis, Page, RightEllipsis};

    fn params(query: &str) -> NavParams {
        NavParams::from_query(query)
    }

    #[test]
    fn test_read_defaults_when_missing() {
        let state = NavState::read(&params(""));
        assert_eq!(state, NavState { page: 1, page_size: 10 });
    }

    #[test]
    fn test_read_page_fallbacks() {
        for query in ["page=0", "page=-3", "page=abc", "page=", "pageSize=20"] {
            let state = NavState::read(&params(query));
            assert_eq!(state.page, 1, "query {:?} should default page to 1", query);
        }
        assert_eq!(NavState::read(&params("page=7")).page, 7);
    }

    #[test]
    fn test_read_page_size_fallbacks() {
        for query in ["pageSize=0", "pageSize=15", "pageSize=-10", "pageSize=x", "pageSize=1000"] {
            let state = NavState::read(&params(query));
            assert_eq!(
                state.page_size, 10,
                "query {:?} should default pageSize to 10",
                query
            );
        }
        for size in PAGE_SIZE_OPTIONS {
            let state = NavState::read(&params(&format!("pageSize={}", size)));
            assert_eq!(state.page_size, size);
        }
    }

    #[test]
    fn test_derive_page_bounds() {
        let data: Vec<u32> = (0..95).collect();
        assert_eq!(derive_page(&data, 1, 10), &data[0..10]);
        assert_eq!(derive_page(&data, 10, 10), &data[90..95]);
        assert_eq!(derive_page(&data, 10, 10).len(), 5);
        // out of range is empty, not a panic
        assert!(derive_page(&data, 11, 10).is_empty());
        assert!(derive_page(&data, u32::MAX, 100).is_empty());
        let empty: Vec<u32> = Vec::new();
        assert!(derive_page(&empty, 1, 10).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_dataset() {
        let data: Vec<u32> = (0..103).collect();
        for size in PAGE_SIZE_OPTIONS {
            let count = page_count(data.len(), size);
            let mut rebuilt = Vec::new();
            for page in 1..=count {
                let slice = derive_page(&data, page, size);
                assert!(slice.len() <= size as usize);
                rebuilt.extend_from_slice(slice);
            }
            assert_eq!(rebuilt, data, "pageSize {} must reproduce the dataset", size);
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(100, 0), 0);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            compute_page_window(1, 20, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), RightEllipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_centered() {
        assert_eq!(
            compute_page_window(10, 20, 5),
            vec![
                Page(1),
                LeftEllipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                RightEllipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_window_small_page_count() {
        assert_eq!(compute_page_window(1, 3, 5), vec![Page(1), Page(2), Page(3)]);
        assert!(compute_page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            compute_page_window(20, 20, 5),
            vec![
                Page(1),
                LeftEllipsis,
                Page(16),
                Page(17),
                Page(18),
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn test_window_near_edges_skips_redundant_ellipsis() {
        // window [2..6]: the gap before it is only page 1, so no left ellipsis
        assert_eq!(
            compute_page_window(4, 20, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                RightEllipsis,
                Page(20)
            ]
        );
        // window [15..19]: the gap after it is only page 20, so no right ellipsis
        assert_eq!(
            compute_page_window(17, 20, 5),
            vec![
                Page(1),
                LeftEllipsis,
                Page(15),
                Page(16),
                Page(17),
                Page(18),
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn test_ellipsis_targets() {
        assert_eq!(RightEllipsis.target_page(10, 20), 15);
        assert_eq!(LeftEllipsis.target_page(10, 20), 5);
        // clamped at both ends
        assert_eq!(RightEllipsis.target_page(18, 20), 20);
        assert_eq!(LeftEllipsis.target_page(3, 20), 1);
        assert_eq!(Page(7).target_page(10, 20), 7);
    }

    #[test]
    fn test_page_change_round_trip() {
        let state = NavState::read(&params("page=2&pageSize=20"));
        let next = state.with_page(3);
        assert_eq!(next.to_query(), "page=3&pageSize=20");
        assert_eq!(NavState::read(&next), NavState { page: 3, page_size: 20 });
    }

    #[test]
    fn test_page_size_change_preserves_page() {
        // Documented behavior: no re-clamp of `page` against the new page
        // count; an out-of-range page shows up as an empty slice.
        let state = NavState::read(&params("page=10&pageSize=10"));
        let next = state.with_page_size(100);
        let reread = NavState::read(&next);
        assert_eq!(reread, NavState { page: 10, page_size: 100 });

        let data: Vec<u32> = (0..200).collect();
        assert!(derive_page(&data, reread.page, reread.page_size).is_empty());
    }

    #[test]
    fn test_boundary_helpers() {
        let first = NavState { page: 1, page_size: 10 };
        let last = NavState { page: 5, page_size: 10 };
        assert!(!first.can_go_prev());
        assert!(first.can_go_next(5));
        assert!(last.can_go_prev());
        assert!(!last.can_go_next(5));
        // empty dataset: page 1 is both first and last
        assert!(!first.can_go_next(0));
    }
}
