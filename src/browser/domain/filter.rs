use crate::browser::domain::models::MediaItem;

pub struct LocalFilter;

impl LocalFilter {
    /// Case-insensitive substring match over title, english title and id.
    /// Keeps the catalog order.
    pub fn filter(items: &[MediaItem], query: &str) -> Vec<MediaItem> {
        let query_lower = query.to_lowercase();

        items
            .iter()
            .filter(|item| Self::matches(item, &query_lower))
            .cloned()
            .collect()
    }

    fn matches(item: &MediaItem, query_lower: &str) -> bool {
        item.title.to_lowercase().contains(query_lower)
            || item.title_english.to_lowercase().contains(query_lower)
            || item.id.to_lowercase().contains(query_lower)
    }
}
