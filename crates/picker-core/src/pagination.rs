//! Page-number pagination utilities.
//!
//! Pages are 1-indexed and have a fixed size per list. Nothing here knows
//! about list contents; callers pass in lengths and get back absolute indices.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Absolute index of the first item on `page`.
///
/// A page of 0 is treated as page 1.
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.max(1).saturating_sub(1).saturating_mul(page_size)
}

/// Number of pages needed to show `total_items`.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Information about the visible portion of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Current page number (1-indexed).
    pub page: usize,
    /// Number of items that fit in one page.
    pub page_size: usize,
    /// Total number of items in the list.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Absolute index of the first visible item.
    pub start: usize,
    /// Absolute index one past the last visible item.
    pub end: usize,
}

impl PageView {
    pub fn new(total_items: usize, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let start = page_offset(page, page_size).min(total_items);
        let end = start.saturating_add(page_size).min(total_items);
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
            start,
            end,
        }
    }

    /// Absolute indices shown on this page.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether this page shows nothing (empty list or page past the end).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether there are pages before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether there are items past this page.
    pub fn has_next(&self) -> bool {
        self.end < self.total_items
    }

    /// Range summary shown under a list, e.g. `"11-20 of 42 items"`.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return format!("0-0 of {} items", self.total_items);
        }
        format!("{}-{} of {} items", self.start + 1, self.end, self.total_items)
    }
}
