use crate::config::settings::CatalogSettings;
use crate::domain::{Catalog, Product};
use crate::http::HttpClient;
use crate::view::CatalogSource;
use anyhow::{Context, Result};
use log::info;

/// Client for the fake store products endpoint
pub struct FakeStoreClient {
    client: HttpClient,
    endpoint: String,
}

impl FakeStoreClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    /// Fetch the whole product collection in one request
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        info!("Fetching products from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).await?;

        if !response.status().is_success() {
            anyhow::bail!("Catalog endpoint returned status: {}", response.status());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read body from: {}", self.endpoint))?;
        let products = parse_products(&body)?;

        info!("Fetched {} products", products.len());
        Ok(products)
    }
}

impl CatalogSource for FakeStoreClient {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::new(self.fetch_products().await?))
    }
}

/// Parse the endpoint's JSON array of products
pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    serde_json::from_str(body).context("Failed to parse product catalog")
}
