use crate::browser::application::catalog_client::CatalogApi;
use crate::browser::domain::models::MediaItem;
use anyhow::{Result, anyhow};
use std::sync::Mutex;

/// In-memory stand-in for the catalog service.
pub struct FakeCatalogApi {
    catalog: Option<Vec<MediaItem>>,
    remote: Option<Vec<MediaItem>>,
    remote_fails_after: Option<usize>,
    search_calls: Mutex<Vec<String>>,
}

impl FakeCatalogApi {
    /// `None` for either side makes that endpoint fail.
    pub fn new(catalog: Option<Vec<MediaItem>>, remote: Option<Vec<MediaItem>>) -> Self {
        Self {
            catalog,
            remote,
            remote_fails_after: None,
            search_calls: Mutex::new(Vec::new()),
        }
    }

    /// Search succeeds for the first `calls` requests, then fails.
    pub fn failing_search_after(mut self, calls: usize) -> Self {
        self.remote_fails_after = Some(calls);
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }
}

impl CatalogApi for FakeCatalogApi {
    fn fetch_catalog(&self) -> Result<Vec<MediaItem>> {
        self.catalog
            .clone()
            .ok_or_else(|| anyhow!("listing unavailable"))
    }

    fn search(&self, query: &str) -> Result<Vec<MediaItem>> {
        let mut calls = self.search_calls.lock().unwrap();
        calls.push(query.to_string());
        if self.remote_fails_after.is_some_and(|limit| calls.len() > limit) {
            return Err(anyhow!("search unavailable"));
        }
        self.remote
            .clone()
            .ok_or_else(|| anyhow!("search unavailable"))
    }
}

pub fn create_items(count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|i| {
            MediaItem::new(
                &format!("id{i}"),
                &format!("Title {i}"),
                "",
                &format!("http://img/{i}.jpg"),
            )
        })
        .collect()
}
