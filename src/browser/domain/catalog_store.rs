use crate::browser::domain::models::{MediaItem, StatusLabel};
use crate::browser::domain::paginator::Paginator;

/// Full collection plus the subset the grid currently pages through.
#[derive(Clone, Debug)]
pub struct CatalogStore {
    all_items: Vec<MediaItem>,
    visible_items: Vec<MediaItem>,
    paginator: Paginator,
    status: StatusLabel,
}

impl CatalogStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_items: Vec::new(),
            visible_items: Vec::new(),
            paginator: Paginator::new(page_size),
            status: StatusLabel::Ready,
        }
    }

    pub fn load(&mut self, items: Vec<MediaItem>) {
        self.all_items = items;
        self.show_all();
    }

    /// Looks the id up in the full collection, not the visible subset.
    /// Returns `None` and leaves everything untouched on a miss.
    pub fn select_by_id(&mut self, id: &str) -> Option<&MediaItem> {
        let item = self.all_items.iter().find(|item| item.id == id)?.clone();
        self.show_results(vec![item], StatusLabel::Selected);
        self.visible_items.first()
    }

    pub fn show_all(&mut self) {
        self.visible_items = self.all_items.clone();
        self.paginator.reset();
        self.status = StatusLabel::Ready;
    }

    pub fn show_results(&mut self, items: Vec<MediaItem>, status: StatusLabel) {
        self.visible_items = items;
        self.paginator.reset();
        self.status = status;
    }

    pub fn set_status(&mut self, status: StatusLabel) {
        self.status = status;
    }

    pub fn status(&self) -> StatusLabel {
        self.status
    }

    pub fn all_items(&self) -> &[MediaItem] {
        &self.all_items
    }

    pub fn visible_items(&self) -> &[MediaItem] {
        &self.visible_items
    }

    pub fn page_items(&self) -> &[MediaItem] {
        self.paginator.slice(&self.visible_items)
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count(self.visible_items.len())
    }

    pub fn can_go_prev(&self) -> bool {
        self.paginator.can_go_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.paginator.can_go_next(self.visible_items.len())
    }

    pub fn go_prev(&mut self) -> bool {
        self.paginator.go_prev()
    }

    pub fn go_next(&mut self) -> bool {
        self.paginator.go_next(self.visible_items.len())
    }

    pub fn go_first(&mut self) -> bool {
        self.paginator.go_first()
    }

    pub fn go_last(&mut self) -> bool {
        self.paginator.go_last(self.visible_items.len())
    }
}
