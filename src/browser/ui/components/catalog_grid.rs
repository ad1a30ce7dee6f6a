use crate::browser::constants::{GRID_CELL_HEIGHT, GRID_CELL_WIDTH};
use crate::browser::domain::models::MediaItem;
use crate::browser::ui::components::styles::Styles;
use crate::browser::ui::components::{Component, contains};
use crate::browser::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Poster-less grid of the current page. Cells are fixed size; the number of
/// columns follows the terminal width and rows scroll to keep the cursor in
/// view.
pub struct CatalogGrid {
    items: Vec<MediaItem>,
    cursor: usize,
    focused: bool,
    title: String,
    empty_text: String,
    columns: usize,
    scroll_row: usize,
    last_inner: Option<Rect>,
}

impl CatalogGrid {
    pub fn new(noun: &'static str) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            focused: false,
            title: String::new(),
            empty_text: format!("No {noun} to show"),
            columns: 1,
            scroll_row: 0,
            last_inner: None,
        }
    }

    pub fn set_items(&mut self, items: Vec<MediaItem>) {
        if items != self.items {
            self.scroll_row = 0;
        }
        self.items = items;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Columns used by the last render; drives Up/Down cursor steps.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.last_inner?;
        if !contains(inner, column, row) {
            return None;
        }
        let grid_column = ((column - inner.x) / GRID_CELL_WIDTH) as usize;
        let grid_row = ((row - inner.y) / GRID_CELL_HEIGHT) as usize;
        if grid_column >= self.columns {
            return None;
        }
        let index = (self.scroll_row + grid_row) * self.columns + grid_column;
        (index < self.items.len()).then_some(index)
    }

    fn update_scroll(&mut self, visible_rows: usize) {
        let cursor_row = self.cursor / self.columns;
        if cursor_row < self.scroll_row {
            self.scroll_row = cursor_row;
        } else if cursor_row >= self.scroll_row + visible_rows {
            self.scroll_row = cursor_row + 1 - visible_rows;
        }
    }

    fn render_cell(&self, f: &mut Frame, item: &MediaItem, area: Rect, selected: bool) {
        let title_style = if selected {
            Styles::selected()
        } else {
            Styles::normal()
        };
        let english = if item.has_english_title() {
            item.title_english.clone()
        } else {
            String::new()
        };
        let lines = vec![
            Line::from(Span::styled(item.display_title().to_string(), title_style)),
            Line::from(Span::styled(english, Styles::dimmed())),
            Line::from(Span::styled(format!("ID: {}", item.id), Styles::dimmed())),
        ];

        let border_style = if selected && self.focused {
            Styles::focused_border()
        } else {
            Styles::dimmed()
        };
        let cell = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(cell, area);
    }
}

impl Component for CatalogGrid {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(self.title.clone(), Styles::title()))
            .borders(Borders::ALL)
            .border_style(if self.focused {
                Styles::focused_border()
            } else {
                Styles::dimmed()
            });
        let inner = block.inner(area);
        f.render_widget(block, area);
        self.last_inner = Some(inner);

        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_text.as_str())
                .style(Styles::dimmed())
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        self.columns = ((inner.width / GRID_CELL_WIDTH) as usize).max(1);
        let visible_rows = ((inner.height / GRID_CELL_HEIGHT) as usize).max(1);
        self.update_scroll(visible_rows);

        let first = self.scroll_row * self.columns;
        let last = (first + visible_rows * self.columns).min(self.items.len());
        for index in first..last {
            let row = (index / self.columns - self.scroll_row) as u16;
            let column = (index % self.columns) as u16;
            let cell_area = Rect::new(
                inner.x + column * GRID_CELL_WIDTH,
                inner.y + row * GRID_CELL_HEIGHT,
                GRID_CELL_WIDTH.min(inner.width),
                GRID_CELL_HEIGHT.min(inner.height),
            )
            .intersection(inner);
            if cell_area.is_empty() {
                continue;
            }
            self.render_cell(f, &self.items[index], cell_area, index == self.cursor);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let row_step = self.columns as isize;
        match key.code {
            KeyCode::Left => Some(Message::MoveGridCursor(-1)),
            KeyCode::Right => Some(Message::MoveGridCursor(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveGridCursor(-row_step)),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveGridCursor(row_step)),
            KeyCode::PageUp | KeyCode::Char('h') | KeyCode::Char('[') => Some(Message::PrevPage),
            KeyCode::PageDown | KeyCode::Char('l') | KeyCode::Char(']') => Some(Message::NextPage),
            KeyCode::Home => Some(Message::FirstPage),
            KeyCode::End => Some(Message::LastPage),
            KeyCode::Enter => Some(Message::ShowDetailLink),
            KeyCode::Char('y') => Some(Message::CopyDetailLink),
            KeyCode::Char('/') | KeyCode::Tab => Some(Message::FocusSearch),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }
}
