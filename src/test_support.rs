//! Fixtures shared by unit tests.

use anyhow::{Result, anyhow};

use crate::domain::{Catalog, Product};
use crate::view::CatalogSource;

/// Products titled `Product 1` .. `Product {count}`, priced at their id
pub fn catalog_of(count: u64) -> Catalog {
    (1..=count)
        .map(|id| product(id, &format!("Product {}", id)))
        .collect::<Vec<_>>()
        .into()
}

/// One product per title, ids starting at 1
pub fn catalog_with_titles(titles: &[&str]) -> Catalog {
    titles
        .iter()
        .zip(1..)
        .map(|(title, id)| product(id, title))
        .collect::<Vec<_>>()
        .into()
}

fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: id as f64,
        description: format!("Description of {}", title),
        image: format!("https://img.example/{}.jpg", id),
    }
}

pub struct StaticSource {
    catalog: Catalog,
}

impl StaticSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for StaticSource {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

pub struct FailingSource;

impl CatalogSource for FailingSource {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        Err(anyhow!("connection refused"))
    }
}
