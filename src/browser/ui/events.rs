use crate::browser::domain::models::{MediaItem, SearchResponse};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Catalog events
    CatalogLoaded(Vec<MediaItem>),
    CatalogLoadFailed(String),

    // Search events
    QueryChanged(String),
    SearchTriggered(String), // debounce timer fired with this query
    SearchFinished(SearchResponse),

    // Suggestion panel
    SuggestionDown,
    SuggestionUp,
    CommitSuggestion,
    DismissSuggestions, // Escape: also releases input focus
    ClickSuggestion(usize),
    ClickOutside,

    // Grid
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    MoveGridCursor(isize),
    ClickGridCell(usize),
    ShowDetailLink,
    CopyDetailLink,

    // Focus
    FocusSearch,
    FocusGrid,

    // UI events
    ShowHelp,
    CloseHelp,
    SetStatus(String),
    ClearStatus,
    Quit,
}
