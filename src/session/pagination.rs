//! Page arithmetic over a stage's question list.

use std::ops::Range;

/// Page windows for `question_count` questions, `page_size` per page.
///
/// Every page argument is clamped into range; moving past either end stays
/// on the boundary page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    question_count: usize,
    page_size: usize,
}

impl Pager {
    /// A zero page size is treated as one question per page.
    pub fn new(question_count: usize, page_size: usize) -> Self {
        Self {
            question_count,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages; at least 1, even for an empty stage.
    pub fn page_count(&self) -> usize {
        self.question_count.div_ceil(self.page_size).max(1)
    }

    pub fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.min(self.last_page())
    }

    /// Question indices shown on `page`, as a half-open range.
    pub fn window(&self, page: usize) -> Range<usize> {
        let start = (self.clamp(page) * self.page_size).min(self.question_count);
        let end = (start + self.page_size).min(self.question_count);
        start..end
    }

    pub fn next(&self, page: usize) -> usize {
        self.clamp(page.saturating_add(1))
    }

    pub fn prev(&self, page: usize) -> usize {
        self.clamp(page).saturating_sub(1)
    }

    /// Page containing question `index`.
    pub fn page_of(&self, index: usize) -> usize {
        self.clamp(index / self.page_size)
    }

    pub fn is_first(&self, page: usize) -> bool {
        self.clamp(page) == 0
    }

    pub fn is_last(&self, page: usize) -> bool {
        self.clamp(page) == self.last_page()
    }
}
