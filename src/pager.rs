// Page window over a list of records.
//
// The pager only tracks which slice is visible; drawing and reading
// navigation input live in `ui`.

use std::ops::Range;

/// Navigation input inside a page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    Exit,
    /// Anything else: draw the same page again.
    Redraw,
}

impl Nav {
    pub fn parse(input: &str) -> Nav {
        let input = input.trim();
        match input {
            ">" => Nav::Next,
            "<" => Nav::Prev,
            _ if crate::command::is_exit_alias(input) => Nav::Exit,
            _ => Nav::Redraw,
        }
    }
}

/// Window `[start, end)` over `total` records, `page_size` at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    start: usize,
    end: usize,
    page: usize,
    total: usize,
    page_size: usize,
}

impl Pager {
    /// Start on the first page. `page_size` of zero is treated as one.
    pub fn new(total: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Pager {
            start: 0,
            end: total.min(page_size),
            page: 1,
            total,
            page_size,
        }
    }

    /// Visible slice of the underlying list.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Move forward one page. Returns false on the last page.
    pub fn next(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.start = self.end;
        self.end = (self.end + self.page_size).min(self.total);
        self.page += 1;
        true
    }

    /// Move back one page. Returns false on the first page.
    pub fn prev(&mut self) -> bool {
        if self.is_first_page() {
            return false;
        }
        self.end = self.start;
        self.start = self.start.saturating_sub(self.page_size);
        self.page -= 1;
        true
    }

    /// Apply a navigation command. Returns false when the view should close.
    pub fn apply(&mut self, nav: Nav) -> bool {
        match nav {
            Nav::Next => {
                self.next();
            }
            Nav::Prev => {
                self.prev();
            }
            Nav::Redraw => {}
            Nav::Exit => return false,
        }
        true
    }
}
