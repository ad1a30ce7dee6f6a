use crate::browser::domain::models::SearchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    LoadCatalog,
    ScheduleSearch(String), // debounced, replaces any pending query
    CancelScheduledSearch,
    ExecuteSearch(SearchRequest),
    CopyToClipboard(String),
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}
