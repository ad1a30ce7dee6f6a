use crate::browser::application::catalog_client::CatalogApi;
use crate::browser::application::search_service::SearchService;
use crate::browser::constants::MIN_QUERY_CHARS;
use crate::browser::domain::models::{CatalogKind, MediaItem, StatusLabel};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a non-interactive search.
#[derive(Debug)]
pub struct QueryReport {
    pub query: String,
    pub kind: CatalogKind,
    pub status: StatusLabel,
    pub catalog_size: usize,
    pub items: Vec<MediaItem>,
    pub duration: Duration,
}

/// Loads the catalog and runs one search with the same rules as the
/// interactive browser: short queries list the whole catalog, remote results
/// win, local filtering covers remote failures.
pub fn run_query(
    api: Arc<dyn CatalogApi>,
    kind: CatalogKind,
    query: &str,
    show_progress: bool,
) -> Result<QueryReport> {
    let start = Instant::now();
    let service = SearchService::new(api);

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    spinner.set_message(format!("Loading {}...", kind.noun()));
    let catalog = match service.load_catalog() {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(?kind, "failed to load catalog: {e:#}");
            Vec::new()
        }
    };

    let (items, status) = if query.trim().chars().count() < MIN_QUERY_CHARS {
        (catalog.clone(), StatusLabel::Ready)
    } else {
        spinner.set_message(format!("Searching {} for \"{query}\"...", kind.noun()));
        service.search_with_fallback(query, &catalog)
    };
    spinner.finish_and_clear();

    Ok(QueryReport {
        query: query.to_string(),
        kind,
        status,
        catalog_size: catalog.len(),
        items,
        duration: start.elapsed(),
    })
}

/// One text line per item: title, english title, id.
pub fn format_item(item: &MediaItem, use_color: bool) -> String {
    use colored::Colorize;

    let english = if item.has_english_title() {
        format!(" ({})", item.title_english)
    } else {
        String::new()
    };

    if use_color {
        format!(
            "{}{} {}",
            item.display_title().bright_green(),
            english.bright_yellow(),
            format!("[{}]", item.id).dimmed()
        )
    } else {
        format!("{}{} [{}]", item.display_title(), english, item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::test_support::{FakeCatalogApi, create_items};

    #[test]
    fn test_remote_results() {
        let remote = vec![MediaItem::new("r1", "Remote", "", "")];
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(5)), Some(remote.clone())));

        let report = run_query(api, CatalogKind::Movies, "remote", false).unwrap();
        assert_eq!(report.status, StatusLabel::SearchApi);
        assert_eq!(report.items, remote);
        assert_eq!(report.catalog_size, 5);
    }

    #[test]
    fn test_local_fallback() {
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(12)), None));

        let report = run_query(api, CatalogKind::Shows, "Title 1", false).unwrap();
        assert_eq!(report.status, StatusLabel::SearchLocalFallback);
        assert_eq!(report.items.len(), 3);
    }

    #[test]
    fn test_short_query_lists_catalog_without_search() {
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(4)), Some(Vec::new())));

        let report = run_query(api.clone(), CatalogKind::Movies, " x ", false).unwrap();
        assert_eq!(report.status, StatusLabel::Ready);
        assert_eq!(report.items.len(), 4);
        assert!(api.search_calls().is_empty());
    }

    #[test]
    fn test_listing_failure_still_searches() {
        let api = Arc::new(FakeCatalogApi::new(None, None));

        let report = run_query(api, CatalogKind::Movies, "anything", false).unwrap();
        assert_eq!(report.catalog_size, 0);
        assert!(report.items.is_empty());
        assert_eq!(report.status, StatusLabel::SearchLocalFallback);
    }

    #[test]
    fn test_format_item_plain() {
        let item = MediaItem::new("tt2", "Sen to Chihiro", "Spirited Away", "");
        assert_eq!(format_item(&item, false), "Sen to Chihiro (Spirited Away) [tt2]");

        let untitled = MediaItem::new("x", "", "", "");
        assert_eq!(format_item(&untitled, false), "Untitled [x]");
    }
}
