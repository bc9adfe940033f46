use super::config::PaginationConfig;

/// Counts the pages revealed so far. Starts at one.
#[derive(Debug, Clone)]
pub struct PageCursor {
    pages: usize,
    config: PaginationConfig,
}

impl PageCursor {
    pub fn new(config: PaginationConfig) -> Self {
        Self { pages: 1, config }
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size()
    }

    /// Number of items `pages × page_size` covers
    pub fn revealed_limit(&self) -> usize {
        self.pages.saturating_mul(self.page_size())
    }

    /// Offset of the next page to reveal
    pub fn next_page_start(&self) -> usize {
        self.revealed_limit()
    }

    pub fn advance(&mut self) {
        self.pages = self.pages.saturating_add(1);
    }
}
