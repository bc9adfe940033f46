pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for client-side pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    page_size: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// A page size of zero is bumped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}
