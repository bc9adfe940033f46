use super::models::Product;
use std::ops::Range;

/// Full product collection, in the order the endpoint returned it.
///
/// Fetched once and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Product> {
        self.products.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Positions `start..start + len`, clamped to the catalog bounds
    pub fn clamped_range(&self, start: usize, len: usize) -> Range<usize> {
        let start = start.min(self.len());
        let end = start.saturating_add(len).min(self.len());
        start..end
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
