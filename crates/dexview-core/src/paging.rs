//! Progressive "load more" pagination over the displayed subset.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;

/// How many entries of the displayed subset are currently revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    page_size: usize,
    visible: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size);
    }

    /// Back to the first page. Call whenever the filter changes.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}
