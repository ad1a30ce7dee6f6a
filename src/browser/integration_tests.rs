#[cfg(test)]
mod tests {
    use crate::browser::BrowserConfig;
    use crate::browser::constants::EXIT_PROMPT;
    use crate::browser::controller::Controller;
    use crate::browser::domain::models::{MediaItem, StatusLabel};
    use crate::browser::test_support::{FakeCatalogApi, create_items};
    use crate::browser::ui::events::Message;
    use crate::browser::ui::navigation::SuggestionView;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    const WORKER_TIMEOUT: Duration = Duration::from_secs(5);

    fn controller_with(api: Arc<FakeCatalogApi>) -> Controller {
        let mut controller = Controller::new(&BrowserConfig::default(), api);
        controller.start(Instant::now());
        assert!(controller.wait_for_worker(WORKER_TIMEOUT));
        controller
    }

    /// Types `query`, lets the debounce fire and waits for the remote answer.
    fn search(controller: &mut Controller, query: &str, now: Instant) -> Instant {
        controller.on_query_change_at(query.to_string(), now);
        let fire_at = now + Duration::from_millis(250);
        controller.tick(fire_at);
        assert!(controller.wait_for_worker(WORKER_TIMEOUT));
        fire_at
    }

    #[test]
    fn test_catalog_loads_through_worker() {
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(120)), None));
        let controller = controller_with(api);

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.visible_count, 120);
        assert_eq!(snapshot.page_count, 3);
        assert_eq!(snapshot.status, StatusLabel::Ready);
    }

    #[test]
    fn test_burst_of_keystrokes_runs_one_search() {
        let api = Arc::new(FakeCatalogApi::new(
            Some(create_items(20)),
            Some(create_items(2)),
        ));
        let mut controller = controller_with(api.clone());

        let t0 = Instant::now();
        for i in 0..10u64 {
            let now = t0 + Duration::from_millis(i * 5);
            controller.on_query_change_at(format!("query{i}"), now);
            controller.tick(now);
        }
        assert_eq!(controller.snapshot().status, StatusLabel::Searching);
        assert!(controller.search_pending());

        controller.tick(t0 + Duration::from_millis(150));
        assert!(controller.search_pending());

        controller.tick(t0 + Duration::from_millis(245));
        assert!(!controller.search_pending());
        assert!(controller.wait_for_worker(WORKER_TIMEOUT));

        assert_eq!(api.search_calls(), vec!["query9".to_string()]);
        assert_eq!(controller.state().search.last_session_id, 1);
        assert_eq!(controller.snapshot().status, StatusLabel::SearchApi);
        assert_eq!(controller.snapshot().visible_count, 2);
    }

    #[test]
    fn test_remote_results_replace_grid_but_not_suggestions() {
        let remote = vec![MediaItem::new("r1", "Remote Hit", "", "")];
        let api = Arc::new(FakeCatalogApi::new(
            Some(create_items(12)),
            Some(remote.clone()),
        ));
        let mut controller = controller_with(api);

        search(&mut controller, "title 1", Instant::now());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, StatusLabel::SearchApi);
        assert_eq!(snapshot.page_items, remote);
        match snapshot.suggestions {
            SuggestionView::Results { items, highlighted } => {
                let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
                assert_eq!(ids, vec!["id1", "id10", "id11"]);
                assert_eq!(highlighted, None);
            }
            other => panic!("unexpected suggestions: {other:?}"),
        }
    }

    #[test]
    fn test_remote_failure_falls_back_to_local_results() {
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(12)), None));
        let mut controller = controller_with(api.clone());

        search(&mut controller, "title 1", Instant::now());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, StatusLabel::SearchLocalFallback);
        assert_eq!(snapshot.visible_count, 3);
        assert!(!snapshot.is_searching);
        assert_eq!(api.search_calls(), vec!["title 1".to_string()]);
    }

    #[test]
    fn test_no_matches_and_failing_remote() {
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(12)), None));
        let mut controller = controller_with(api);

        search(&mut controller, "zz", Instant::now());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.suggestions, SuggestionView::NoResults);
        assert!(snapshot.page_items.is_empty());
        assert_eq!(snapshot.status, StatusLabel::SearchLocalFallback);
    }

    #[test]
    fn test_outage_on_repeated_query_falls_back_to_local_results() {
        let remote = vec![MediaItem::new("r1", "Remote Hit", "", "")];
        let api = Arc::new(
            FakeCatalogApi::new(Some(create_items(12)), Some(remote)).failing_search_after(1),
        );
        let mut controller = controller_with(api.clone());

        let t1 = search(&mut controller, "title 1", Instant::now());
        assert_eq!(controller.snapshot().status, StatusLabel::SearchApi);

        search(&mut controller, "title 1", t1 + Duration::from_millis(10));

        assert_eq!(api.search_calls().len(), 2);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, StatusLabel::SearchLocalFallback);
        assert_eq!(snapshot.visible_count, 3);
    }

    #[test]
    fn test_short_query_resets_without_remote_call() {
        let api = Arc::new(FakeCatalogApi::new(
            Some(create_items(60)),
            Some(create_items(1)),
        ));
        let mut controller = controller_with(api.clone());

        let now = search(&mut controller, "title 5", Instant::now());
        assert_eq!(controller.snapshot().visible_count, 1);

        controller.on_query_change_at("t".to_string(), now);
        controller.tick(now + Duration::from_millis(250));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.visible_count, 60);
        assert_eq!(snapshot.status, StatusLabel::Ready);
        assert_eq!(snapshot.suggestions, SuggestionView::Hidden);
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(api.search_calls().len(), 1);
    }

    #[test]
    fn test_selection_cancels_pending_search() {
        let api = Arc::new(FakeCatalogApi::new(Some(create_items(12)), None));
        let mut controller = controller_with(api.clone());

        let now = search(&mut controller, "title 1", Instant::now());
        controller.on_query_change_at("title 11".to_string(), now);
        assert!(controller.search_pending());

        controller.handle_message(Message::SuggestionDown);
        controller.handle_message(Message::SuggestionDown);
        controller.handle_message(Message::CommitSuggestion);
        assert!(!controller.search_pending());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, StatusLabel::Selected);
        assert_eq!(snapshot.query, "Title 10");
        assert_eq!(snapshot.page_items[0].id, "id10");
        assert_eq!(snapshot.suggestions, SuggestionView::Hidden);

        controller.tick(now + Duration::from_secs(1));
        assert_eq!(api.search_calls().len(), 1);
    }

    #[test]
    fn test_catalog_load_failure_leaves_empty_grid() {
        let api = Arc::new(FakeCatalogApi::new(None, None));
        let mut controller = Controller::new(&BrowserConfig::default(), api);
        let t0 = Instant::now();
        controller.start(t0);
        assert!(controller.wait_for_worker(WORKER_TIMEOUT));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.visible_count, 0);
        assert_eq!(snapshot.page_count, 1);
        assert_eq!(snapshot.message.as_deref(), Some("Failed to load movies"));

        controller.tick(Instant::now() + Duration::from_secs(4));
        assert_eq!(controller.snapshot().message, None);
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let api = Arc::new(FakeCatalogApi::new(Some(Vec::new()), None));
        let mut controller = controller_with(api);
        let t0 = Instant::now();

        assert!(!controller.handle_ctrl_c(t0));
        assert_eq!(controller.snapshot().message.as_deref(), Some(EXIT_PROMPT));

        // Too slow: treated as a fresh first press
        assert!(!controller.handle_ctrl_c(t0 + Duration::from_secs(2)));
        assert!(!controller.should_quit());

        assert!(controller.handle_ctrl_c(t0 + Duration::from_millis(2500)));
        assert!(controller.should_quit());
    }

    #[test]
    fn test_quit_message() {
        let api = Arc::new(FakeCatalogApi::new(Some(Vec::new()), None));
        let mut controller = controller_with(api);

        controller.handle_message(Message::Quit);
        assert!(controller.should_quit());
    }
}
