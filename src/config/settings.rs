use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationConfig};

pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub endpoint: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: "ProductCatalog/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub page_size: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Settings are passed explicitly to the services that need them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogSettings,
    pub view: ViewSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            view: ViewSettings::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.catalog.endpoint = endpoint;
        }
        self
    }

    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        if let Some(page_size) = page_size {
            self.view.page_size = page_size;
        }
        self
    }

    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig::new().with_page_size(self.view.page_size)
    }
}
