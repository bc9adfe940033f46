use crate::domain::{Catalog, Product};

/// Current search text. Empty means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    needle: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Case-insensitive substring match against the title
    pub fn matches(&self, product: &Product) -> bool {
        product.title.to_lowercase().contains(&self.needle)
    }

    /// Positions of the first `limit` matches, always taken from the full catalog
    pub fn matching_positions(&self, catalog: &Catalog, limit: usize) -> Vec<usize> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, product)| self.matches(product))
            .map(|(position, _)| position)
            .take(limit)
            .collect()
    }
}
