//! Page arithmetic for the post list and the page-selector window.

/// Number of posts shown on one list page.
pub const PAGE_SIZE: u64 = 5;

/// Selectors rendered when the page count exceeds this are windowed with ellipses.
const FULL_WINDOW: u64 = 5;

/// One slot of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u64),
    Ellipsis,
}

/// Highest page whose offset still fits a signed 64-bit SQL bind parameter.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PAGE_SIZE;

/// Parse the `page` query parameter. Anything missing, non-numeric or below 1 means page 1.
/// Larger pages are clamped to [`MAX_PAGE`].
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&page| page >= 1)
        .map_or(1, |page| page.min(MAX_PAGE))
}

/// Total number of pages needed for `total` posts.
pub fn page_count(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

/// Number of posts to skip before `page`.
pub fn offset(page: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Page selector entries for `current` out of `page_count` pages.
///
/// Small lists show every page. Larger ones keep the first and last page visible
/// and show a window around the current page, with ellipses for the gaps.
pub fn page_entries(current: u64, page_count: u64) -> Vec<PageEntry> {
    use PageEntry::{Ellipsis, Page};

    if page_count <= FULL_WINDOW {
        return (1..=page_count).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(page_count)]
    } else if current >= page_count - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(page_count - 3),
            Page(page_count - 2),
            Page(page_count - 1),
            Page(page_count),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(page_count),
        ]
    }
}

/// Pagination controls for one rendered list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u64,
    pub page_count: u64,
}

impl Pager {
    pub fn new(current: u64, page_count: u64) -> Self {
        Self {
            current,
            page_count,
        }
    }

    pub fn entries(&self) -> Vec<PageEntry> {
        page_entries(self.current, self.page_count)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count
    }

    pub fn is_active(&self, page: u64) -> bool {
        page == self.current
    }
}
