use crate::browser::constants::MAX_SUGGESTIONS;
use crate::browser::domain::models::MediaItem;
use smallvec::SmallVec;

pub type SuggestionItems = SmallVec<[MediaItem; MAX_SUGGESTIONS]>;

/// What the dropdown under the search box currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SuggestionView {
    Hidden,
    NoResults,
    Results {
        items: Vec<MediaItem>,
        highlighted: Option<usize>,
    },
}

/// Keyboard navigator over the suggestion dropdown. `highlighted == None`
/// means nothing is highlighted.
#[derive(Clone, Debug, Default)]
pub struct SuggestionPanel {
    items: SuggestionItems,
    highlighted: Option<usize>,
    visible: bool,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the panel with the first rows of `results`. An empty slice opens
    /// it in the "no results" state.
    pub fn show(&mut self, results: &[MediaItem]) {
        self.items = results.iter().take(MAX_SUGGESTIONS).cloned().collect();
        self.highlighted = None;
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.items.clear();
        self.highlighted = None;
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Navigation only applies while there is at least one row.
    pub fn is_active(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_item(&self) -> Option<&MediaItem> {
        self.highlighted.and_then(|index| self.items.get(index))
    }

    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        if self.visible {
            self.items.get(index)
        } else {
            None
        }
    }

    pub fn move_down(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let last = self.items.len() - 1;
        let next = match self.highlighted {
            None => 0,
            Some(index) => (index + 1).min(last),
        };
        let moved = self.highlighted != Some(next);
        self.highlighted = Some(next);
        moved
    }

    pub fn move_up(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let previous = match self.highlighted {
            None | Some(0) => None,
            Some(index) => Some(index - 1),
        };
        let moved = self.highlighted != previous;
        self.highlighted = previous;
        moved
    }

    pub fn view(&self) -> SuggestionView {
        if !self.visible {
            SuggestionView::Hidden
        } else if self.items.is_empty() {
            SuggestionView::NoResults
        } else {
            SuggestionView::Results {
                items: self.items.to_vec(),
                highlighted: self.highlighted,
            }
        }
    }
}
