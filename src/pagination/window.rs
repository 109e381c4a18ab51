//! Page Window Module
//!
//! Turns a skip/limit cursor over a collection of known size into index
//! bounds, next/previous cursors and "more in either direction" flags.

use std::ops::Range;

use crate::error::PageError;

// == Page Request ==
/// Cursor over a collection sorted by descending photo id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Size of the full collection
    pub total_count: usize,
    /// Index of the first item of the page
    pub skip: u32,
    /// Maximum number of items on the page, always > 0
    pub limit: u32,
}

// == Page Result ==
/// Window bounds and navigation state for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageResult {
    /// First index of the window
    pub window_start: usize,
    /// One past the last index of the window, before clipping to the collection
    pub window_end: usize,
    /// Cursor of the following page
    pub next_skip: i64,
    /// Cursor of the preceding page; negative on the first page
    pub prev_skip: i64,
    /// Older photos exist beyond this page
    pub has_earlier: bool,
    /// This is not the first page
    pub has_later: bool,
}

impl PageRequest {
    /// Creates a page request, rejecting a zero limit.
    pub fn new(total_count: usize, skip: u32, limit: u32) -> Result<Self, PageError> {
        if limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        Ok(Self {
            total_count,
            skip,
            limit,
        })
    }

    // == Window ==
    /// Computes the page window.
    ///
    /// The flags follow the plain arithmetic even when `skip` is past the
    /// end of the collection: such a page is empty but still reports
    /// `has_later`.
    pub fn window(&self) -> PageResult {
        let skip = i64::from(self.skip);
        let limit = i64::from(self.limit);
        let next_skip = skip + limit;
        let total = i64::try_from(self.total_count).unwrap_or(i64::MAX);

        PageResult {
            window_start: self.skip as usize,
            window_end: self.skip as usize + self.limit as usize,
            next_skip,
            prev_skip: skip - limit,
            has_earlier: total - next_skip > 0,
            has_later: skip > 0,
        }
    }
}

impl PageResult {
    /// Index range of the window clipped to a collection of `len` items.
    pub fn visible(&self, len: usize) -> Range<usize> {
        self.window_start.min(len)..self.window_end.min(len)
    }

    /// The items of `items` that fall inside the window.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible(items.len())]
    }

    /// Previous-page cursor clamped to zero, for building links.
    pub fn prev_cursor(&self) -> u32 {
        u32::try_from(self.prev_skip.max(0)).unwrap_or(u32::MAX)
    }
}
