//! Pagination math shared by the terminal UI and the CLI output
//!
//! A result page from the search API carries the total hit count and the
//! page size; [`Pager`] turns that into page numbers and bounds checks.

/// Position within a paged result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: u32,
    total_pages: u32,
}

impl Pager {
    /// Build a pager for `nb_hits` results split into pages of `limit`
    ///
    /// `page` is clamped into the valid range. With no results (or a zero
    /// page size) there are no pages and the current page stays at 1.
    #[must_use]
    pub fn new(page: u32, nb_hits: u64, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(nb_hits.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };
        Self {
            current: page.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    /// Current page (1-based)
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Number of pages
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether there is nothing to page through
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// The next page, if any
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.current < self.total_pages {
            Some(self.current + 1)
        } else {
            None
        }
    }

    /// The previous page, if any
    #[must_use]
    pub const fn prev(&self) -> Option<u32> {
        if self.current > 1 && !self.is_empty() {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Clamp a requested page into range, `None` when there are no pages
    #[must_use]
    pub fn clamp(&self, page: u32) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(page.clamp(1, self.total_pages))
        }
    }
}
