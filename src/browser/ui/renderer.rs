use crate::browser::constants::{SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::browser::domain::models::{CatalogKind, Focus};
use crate::browser::ui::app_state::ViewSnapshot;
use crate::browser::ui::components::{
    Component, catalog_grid::CatalogGrid, contains, help_dialog::HelpDialog,
    search_bar::SearchBar, status_bar::StatusBar, suggestion_list::SuggestionList,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Paints a `ViewSnapshot` and remembers where things landed so mouse
/// events can be mapped back to rows and cells.
pub struct Renderer {
    search_bar: SearchBar,
    suggestion_list: SuggestionList,
    catalog_grid: CatalogGrid,
    help_dialog: HelpDialog,
    search_area: Rect,
}

impl Renderer {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            search_bar: SearchBar::new(kind.noun()),
            suggestion_list: SuggestionList::new(kind.noun()),
            catalog_grid: CatalogGrid::new(kind.noun()),
            help_dialog: HelpDialog::new(kind.noun()),
            search_area: Rect::default(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, snapshot: &ViewSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());
        self.search_area = chunks[0];

        self.search_bar.set_query(snapshot.query.clone());
        self.search_bar.set_focused(snapshot.focus == Focus::Search);
        self.search_bar.set_searching(snapshot.is_searching);

        self.catalog_grid.set_items(snapshot.page_items.clone());
        self.catalog_grid.set_cursor(snapshot.grid_cursor);
        self.catalog_grid.set_focused(snapshot.focus == Focus::Grid);
        self.catalog_grid.set_title(Self::grid_title(snapshot));

        self.suggestion_list.set_view(snapshot.suggestions.clone());

        self.search_bar.render(f, chunks[0]);
        self.catalog_grid.render(f, chunks[1]);
        StatusBar::render(f, chunks[2], snapshot);
        // Drawn last so it overlaps the grid
        self.suggestion_list.render(f, chunks[1]);

        if snapshot.show_help {
            self.help_dialog.render(f, f.area());
        }
    }

    fn grid_title(snapshot: &ViewSnapshot) -> String {
        let prev = if snapshot.can_go_prev { "◀ " } else { "" };
        let next = if snapshot.can_go_next { " ▶" } else { "" };
        format!(
            " {}{} | PAGE {}/{}{} ",
            prev,
            snapshot.kind.counter_label(),
            snapshot.current_page,
            snapshot.page_count,
            next
        )
    }

    pub fn grid_columns(&self) -> usize {
        self.catalog_grid.columns()
    }

    pub fn suggestion_row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.suggestion_list.row_at(column, row)
    }

    /// The search input plus the open suggestion panel.
    pub fn in_search_region(&self, column: u16, row: u16) -> bool {
        contains(self.search_area, column, row)
            || self
                .suggestion_list
                .area()
                .is_some_and(|area| contains(area, column, row))
    }

    pub fn grid_cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.catalog_grid.cell_at(column, row)
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }

    pub fn get_catalog_grid_mut(&mut self) -> &mut CatalogGrid {
        &mut self.catalog_grid
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
