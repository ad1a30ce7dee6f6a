#[cfg(test)]
mod tests {
    use super::super::catalog_store::*;
    use super::super::models::{MediaItem, StatusLabel};

    fn create_items(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem::new(&format!("id{i}"), &format!("Title {i}"), "", ""))
            .collect()
    }

    #[test]
    fn test_load_resets_view() {
        let mut store = CatalogStore::new(50);
        store.load(create_items(120));
        store.go_next();
        store.set_status(StatusLabel::SearchApi);

        store.load(create_items(10));

        assert_eq!(store.all_items().len(), 10);
        assert_eq!(store.visible_items(), store.all_items());
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.status(), StatusLabel::Ready);
    }

    #[test]
    fn test_select_by_id_searches_full_catalog() {
        let mut store = CatalogStore::new(50);
        store.load(create_items(5));
        store.show_results(vec![MediaItem::new("id0", "Title 0", "", "")], StatusLabel::SearchApi);

        let selected = store.select_by_id("id3").cloned();

        assert_eq!(selected.map(|item| item.id), Some("id3".to_string()));
        assert_eq!(store.visible_items().len(), 1);
        assert_eq!(store.visible_items()[0].id, "id3");
        assert_eq!(store.status(), StatusLabel::Selected);
        assert_eq!(store.current_page(), 1);
    }

    #[test]
    fn test_select_by_id_miss_is_noop() {
        let mut store = CatalogStore::new(50);
        store.load(create_items(120));
        store.go_next();

        assert!(store.select_by_id("missing").is_none());

        assert_eq!(store.visible_items().len(), 120);
        assert_eq!(store.current_page(), 2);
        assert_eq!(store.status(), StatusLabel::Ready);
    }

    #[test]
    fn test_select_by_id_duplicate_ids_first_wins() {
        let mut store = CatalogStore::new(50);
        store.load(vec![
            MediaItem::new("dup", "First", "", ""),
            MediaItem::new("dup", "Second", "", ""),
        ]);

        let selected = store.select_by_id("dup").cloned();

        assert_eq!(selected.map(|item| item.title), Some("First".to_string()));
    }

    #[test]
    fn test_pagination_follows_visible_items() {
        let mut store = CatalogStore::new(50);
        store.load(create_items(120));
        assert_eq!(store.page_count(), 3);

        store.show_results(create_items(7), StatusLabel::SearchLocalFallback);

        assert_eq!(store.page_count(), 1);
        assert_eq!(store.page_items().len(), 7);
        assert!(!store.can_go_next());
        assert!(!store.go_next());
        assert_eq!(store.all_items().len(), 120);
    }

    #[test]
    fn test_page_navigation() {
        let mut store = CatalogStore::new(50);
        store.load(create_items(120));

        assert_eq!(store.page_items()[0].id, "id0");
        assert!(store.go_last());
        assert_eq!(store.current_page(), 3);
        assert_eq!(store.page_items().len(), 20);
        assert!(store.go_prev());
        assert_eq!(store.page_items()[0].id, "id50");
        assert!(store.go_first());
        assert!(!store.can_go_prev());
    }
}
