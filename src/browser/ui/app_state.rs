use crate::browser::constants::*;
use crate::browser::domain::catalog_store::CatalogStore;
use crate::browser::domain::filter::LocalFilter;
use crate::browser::domain::models::{
    CatalogKind, Focus, MediaItem, SearchOutcome, SearchRequest, SearchResponse, SearchSession,
    StatusLabel,
};
use crate::browser::ui::commands::Command;
use crate::browser::ui::events::Message;
use crate::browser::ui::navigation::{SuggestionPanel, SuggestionView};

pub struct AppState {
    pub kind: CatalogKind,
    pub base_url: String,
    pub focus: Focus,
    pub catalog: CatalogStore,
    pub search: SearchState,
    pub suggestions: SuggestionPanel,
    pub grid: GridState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    /// Latest issued session; `None` when no search is active.
    pub session: Option<SearchSession>,
    /// Sequence number of the most recently issued session.
    pub last_session_id: u64,
}

pub struct GridState {
    /// Index into the current page.
    pub cursor: usize,
}

pub struct UiState {
    pub message: Option<String>,
    pub show_help: bool,
    pub is_loading: bool,
}

/// Immutable view of the state at one point in time. This is all the
/// renderer gets to see.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSnapshot {
    pub kind: CatalogKind,
    pub focus: Focus,
    pub query: String,
    pub status: StatusLabel,
    pub visible_count: usize,
    pub current_page: usize,
    pub page_count: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub page_items: Vec<MediaItem>,
    pub grid_cursor: usize,
    pub suggestions: SuggestionView,
    pub is_searching: bool,
    pub is_loading: bool,
    pub message: Option<String>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(kind: CatalogKind, base_url: &str, page_size: usize) -> Self {
        Self {
            kind,
            base_url: base_url.trim_end_matches('/').to_string(),
            focus: Focus::Search,
            catalog: CatalogStore::new(page_size),
            search: SearchState {
                query: String::new(),
                session: None,
                last_session_id: 0,
            },
            suggestions: SuggestionPanel::new(),
            grid: GridState { cursor: 0 },
            ui: UiState {
                message: None,
                show_help: false,
                is_loading: false,
            },
        }
    }

    /// Marks the catalog as loading and asks for the listing.
    pub fn start(&mut self) -> Command {
        self.ui.is_loading = true;
        Command::LoadCatalog
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::CatalogLoaded(items) => {
                tracing::info!(count = items.len(), kind = ?self.kind, "catalog loaded");
                self.ui.is_loading = false;
                self.catalog.load(items);
                self.grid.cursor = 0;
                // A search issued before the listing arrived ran against an
                // empty catalog; reissue it so suggestions and grid agree
                if let Some(query) = self.search.session.as_ref().map(|s| s.query.clone()) {
                    return self.run_search(query);
                }
                Command::None
            }
            Message::CatalogLoadFailed(error) => {
                tracing::error!(kind = ?self.kind, "failed to load catalog: {error}");
                self.ui.is_loading = false;
                self.catalog.load(Vec::new());
                self.grid.cursor = 0;
                self.ui.message = Some(format!("Failed to load {}", self.kind.noun()));
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::QueryChanged(query) => {
                self.search.query = query.clone();
                self.focus = Focus::Search;
                self.catalog.set_status(StatusLabel::Searching);
                Command::ScheduleSearch(query)
            }
            Message::SearchTriggered(query) => self.run_search(query),
            Message::SearchFinished(response) => {
                self.apply_search_response(response);
                Command::None
            }
            Message::SuggestionDown => {
                self.suggestions.move_down();
                Command::None
            }
            Message::SuggestionUp => {
                self.suggestions.move_up();
                Command::None
            }
            Message::CommitSuggestion => {
                if !self.suggestions.is_active() {
                    return Command::None;
                }
                match self.suggestions.highlighted_item().map(|item| item.id.clone()) {
                    Some(id) => self.commit_selection(&id),
                    None => Command::None,
                }
            }
            Message::ClickSuggestion(index) => {
                match self.suggestions.item(index).map(|item| item.id.clone()) {
                    Some(id) => self.commit_selection(&id),
                    None => Command::None,
                }
            }
            Message::DismissSuggestions => {
                self.suggestions.dismiss();
                self.focus = Focus::Grid;
                Command::None
            }
            Message::ClickOutside => {
                self.suggestions.dismiss();
                Command::None
            }
            Message::PrevPage => {
                if self.catalog.go_prev() {
                    self.grid.cursor = 0;
                }
                Command::None
            }
            Message::NextPage => {
                if self.catalog.go_next() {
                    self.grid.cursor = 0;
                }
                Command::None
            }
            Message::FirstPage => {
                if self.catalog.go_first() {
                    self.grid.cursor = 0;
                }
                Command::None
            }
            Message::LastPage => {
                if self.catalog.go_last() {
                    self.grid.cursor = 0;
                }
                Command::None
            }
            Message::MoveGridCursor(delta) => {
                let len = self.catalog.page_items().len();
                if len > 0 {
                    let target = self.grid.cursor as isize + delta;
                    self.grid.cursor = target.clamp(0, len as isize - 1) as usize;
                }
                Command::None
            }
            Message::ClickGridCell(index) => {
                if index < self.catalog.page_items().len() {
                    self.grid.cursor = index;
                    self.focus = Focus::Grid;
                }
                Command::None
            }
            Message::ShowDetailLink => match self.detail_url() {
                Some(url) => {
                    self.ui.message = Some(url);
                    Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                }
                None => Command::None,
            },
            Message::CopyDetailLink => match self.detail_url() {
                Some(url) => Command::CopyToClipboard(url),
                None => Command::None,
            },
            Message::FocusSearch => {
                self.focus = Focus::Search;
                Command::None
            }
            Message::FocusGrid => {
                self.suggestions.dismiss();
                self.focus = Focus::Grid;
                Command::None
            }
            Message::ShowHelp => {
                self.ui.show_help = true;
                Command::None
            }
            Message::CloseHelp => {
                self.ui.show_help = false;
                Command::None
            }
            Message::SetStatus(text) => {
                self.ui.message = Some(text);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    fn run_search(&mut self, query: String) -> Command {
        if query.trim().chars().count() < MIN_QUERY_CHARS {
            // Clearing the search also invalidates any outstanding session
            self.search.session = None;
            self.catalog.show_all();
            self.suggestions.dismiss();
            self.grid.cursor = 0;
            return Command::None;
        }

        let local_results = LocalFilter::filter(self.catalog.all_items(), &query);
        self.suggestions.show(&local_results);
        self.catalog.set_status(StatusLabel::Ready);

        self.search.last_session_id += 1;
        let id = self.search.last_session_id;
        tracing::debug!(id, query = %query, local = local_results.len(), "search session issued");

        self.search.session = Some(SearchSession {
            id,
            query: query.clone(),
            local_results,
            remote_pending: true,
        });

        Command::ExecuteSearch(SearchRequest { id, query })
    }

    fn apply_search_response(&mut self, response: SearchResponse) {
        let Some(session) = self
            .search
            .session
            .as_mut()
            .filter(|session| session.id == response.id)
        else {
            tracing::debug!(
                id = response.id,
                latest = self.search.last_session_id,
                "discarding stale search response"
            );
            return;
        };

        session.remote_pending = false;
        match response.outcome {
            SearchOutcome::Remote(results) => {
                self.catalog.show_results(results, StatusLabel::SearchApi);
            }
            SearchOutcome::Failed(error) => {
                tracing::warn!(id = response.id, "falling back to local results: {error}");
                let local_results = session.local_results.clone();
                self.catalog
                    .show_results(local_results, StatusLabel::SearchLocalFallback);
            }
        }
        self.grid.cursor = 0;
    }

    fn commit_selection(&mut self, id: &str) -> Command {
        let selected_title = self
            .catalog
            .select_by_id(id)
            .map(|item| item.display_title().to_string());
        self.suggestions.dismiss();

        match selected_title {
            Some(title) => {
                tracing::debug!(id, "suggestion selected");
                // A response for the superseded session must not replace the selection
                self.search.session = None;
                self.search.query = title;
                self.grid.cursor = 0;
                Command::CancelScheduledSearch
            }
            None => {
                tracing::debug!(id, "selected id not in catalog");
                Command::None
            }
        }
    }

    pub fn cursor_item(&self) -> Option<&MediaItem> {
        self.catalog.page_items().get(self.grid.cursor)
    }

    pub fn detail_url(&self) -> Option<String> {
        self.cursor_item().map(|item| {
            format!(
                "{}{}",
                self.base_url,
                self.kind.endpoints().detail_path(&item.id)
            )
        })
    }

    pub fn is_searching(&self) -> bool {
        self.search
            .session
            .as_ref()
            .is_some_and(|session| session.remote_pending)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            kind: self.kind,
            focus: self.focus,
            query: self.search.query.clone(),
            status: self.catalog.status(),
            visible_count: self.catalog.visible_items().len(),
            current_page: self.catalog.current_page(),
            page_count: self.catalog.page_count(),
            can_go_prev: self.catalog.can_go_prev(),
            can_go_next: self.catalog.can_go_next(),
            page_items: self.catalog.page_items().to_vec(),
            grid_cursor: self.grid.cursor,
            suggestions: self.suggestions.view(),
            is_searching: self.is_searching(),
            is_loading: self.ui.is_loading,
            message: self.ui.message.clone(),
            show_help: self.ui.show_help,
        }
    }
}
