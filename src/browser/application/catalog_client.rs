use crate::browser::domain::models::{
    CatalogEndpoints, CatalogKind, MediaItem, RawMediaRecord, normalize_records,
};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Read side of the catalog service.
pub trait CatalogApi: Send + Sync {
    fn fetch_catalog(&self) -> Result<Vec<MediaItem>>;
    fn search(&self, query: &str) -> Result<Vec<MediaItem>>;
}

pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
    endpoints: CatalogEndpoints,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str, kind: CatalogKind, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("catalog-browser/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints: kind.endpoints(),
        })
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, self.endpoints.detail_path(id))
    }

    fn get_records(&self, path: &str, query: Option<&str>) -> Result<Vec<MediaItem>> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }

        let response = request
            .send()
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Unexpected status from {url}"))?;

        let records: Vec<RawMediaRecord> = response
            .json()
            .with_context(|| format!("Invalid JSON from {url}"))?;

        Ok(normalize_records(records))
    }
}

impl CatalogApi for HttpCatalogClient {
    fn fetch_catalog(&self) -> Result<Vec<MediaItem>> {
        let items = self.get_records(self.endpoints.list_path, None)?;
        tracing::info!(count = items.len(), "catalog fetched");
        Ok(items)
    }

    fn search(&self, query: &str) -> Result<Vec<MediaItem>> {
        let items = self.get_records(self.endpoints.search_path, Some(query))?;
        tracing::debug!(query, count = items.len(), "remote search finished");
        Ok(items)
    }
}
