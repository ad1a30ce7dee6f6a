use crate::browser::application::catalog_client::CatalogApi;
use crate::browser::domain::filter::LocalFilter;
use crate::browser::domain::models::{
    MediaItem, SearchOutcome, SearchRequest, SearchResponse, StatusLabel,
};
use anyhow::Result;
use std::sync::Arc;

pub struct SearchService {
    api: Arc<dyn CatalogApi>,
}

impl SearchService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub fn load_catalog(&self) -> Result<Vec<MediaItem>> {
        self.api.fetch_catalog()
    }

    /// Runs one remote search. Errors are folded into the response so the
    /// caller can fall back to local results for the same session.
    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        let outcome = match self.api.search(&request.query) {
            Ok(results) => SearchOutcome::Remote(results),
            Err(e) => {
                tracing::warn!(id = request.id, query = %request.query, "remote search failed: {e:#}");
                SearchOutcome::Failed(format!("{e:#}"))
            }
        };

        SearchResponse {
            id: request.id,
            outcome,
        }
    }

    /// One-shot search used outside the interactive loop: remote results when
    /// the service answers, local filter results otherwise.
    pub fn search_with_fallback(
        &self,
        query: &str,
        catalog: &[MediaItem],
    ) -> (Vec<MediaItem>, StatusLabel) {
        let response = self.search(SearchRequest {
            id: 0,
            query: query.to_string(),
        });

        match response.outcome {
            SearchOutcome::Remote(results) => (results, StatusLabel::SearchApi),
            SearchOutcome::Failed(_) => (
                LocalFilter::filter(catalog, query),
                StatusLabel::SearchLocalFallback,
            ),
        }
    }
}
