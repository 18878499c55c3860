//! Log page - fixed-size window over a sub's moderation log
//!
//! The page never knows the total number of records. Whether a next page
//! exists is inferred from the window being full, so a log holding an exact
//! multiple of [`PAGE_SIZE`] records reports one empty trailing page.

use serde::Serialize;

/// Number of records per log page
pub const PAGE_SIZE: usize = 50;

/// One page of log entries plus its navigation flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPage<T> {
    /// 1-indexed page number
    pub page_number: u32,
    pub entries: Vec<T>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> LogPage<T> {
    /// Wrap an already fetched window of entries
    ///
    /// `entries` is expected to be the slice for `page_number` (at most
    /// [`PAGE_SIZE`] items). Page 0 is treated as page 1.
    pub fn paginate(entries: Vec<T>, page_number: u32) -> Self {
        let page_number = page_number.max(1);
        Self {
            has_previous: page_number > 1,
            has_next: entries.len() == PAGE_SIZE,
            page_number,
            entries,
        }
    }

    /// Offset of the first record of `page_number` in the full log
    pub fn offset(page_number: u32) -> usize {
        (page_number.max(1) as usize - 1) * PAGE_SIZE
    }

    /// Convert every entry, keeping the page number and flags
    pub fn map_entries<U, F>(self, f: F) -> LogPage<U>
    where
        F: FnMut(T) -> U,
    {
        LogPage {
            page_number: self.page_number,
            entries: self.entries.into_iter().map(f).collect(),
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }

    /// Number of the previous page, if any
    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous.then(|| self.page_number - 1)
    }

    /// Number of the next page, if one may exist
    pub fn next_page(&self) -> Option<u32> {
        self.has_next.then(|| self.page_number.saturating_add(1))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
