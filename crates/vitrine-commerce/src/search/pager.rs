//! Shelf pagination.

use tracing::debug;

use crate::catalog::Product;
use crate::error::Result;
use crate::render::{Affordance, RenderSink};

/// Products shown per page of the shelf.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Pagination cursor over the filtered products.
///
/// The cursor is the number of products visible. "Show more" grows it by one
/// page for a single render and then snaps it back to one page, so an
/// expansion never carries over into the next filter or sort change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfPager {
    page_size: usize,
    cursor: usize,
}

impl ShelfPager {
    /// Create a pager. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            cursor: page_size,
        }
    }

    /// Number of products currently visible.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Products within the cursor.
    pub fn visible<'a>(&self, filtered: &'a [Product]) -> &'a [Product] {
        &filtered[..self.cursor.min(filtered.len())]
    }

    /// Check if products remain beyond the cursor.
    pub fn has_more(&self, filtered: &[Product]) -> bool {
        self.cursor < filtered.len()
    }

    /// Replace the shelf with the visible products.
    pub fn render(&self, filtered: &[Product], sink: &mut dyn RenderSink) -> Result<()> {
        sink.replace_shelf(self.visible(filtered))
    }

    /// Move the cursor back to one page.
    pub fn reset(&mut self) {
        self.cursor = self.page_size;
    }

    /// Redraw after the filtered view changed.
    ///
    /// Resets the cursor, renders one page and shows "show more" only when
    /// there are products beyond it.
    pub fn refresh(&mut self, filtered: &[Product], sink: &mut dyn RenderSink) -> Result<()> {
        self.reset();
        self.render(filtered, sink)?;
        sink.set_visible(Affordance::ShowMore, self.has_more(filtered))
    }

    /// Show one more page, hide "show more", then snap the cursor back.
    pub fn expand(&mut self, filtered: &[Product], sink: &mut dyn RenderSink) -> Result<()> {
        self.cursor = self.cursor.saturating_add(self.page_size);
        debug!(cursor = self.cursor, filtered = filtered.len(), "expanding shelf");
        let rendered = self.render(filtered, sink);
        self.reset();
        rendered?;
        sink.set_visible(Affordance::ShowMore, false)
    }
}

impl Default for ShelfPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
