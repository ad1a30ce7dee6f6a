use crate::browser::domain::models::MediaItem;
use crate::browser::ui::components::styles::Styles;
use crate::browser::ui::components::{Component, contains};
use crate::browser::ui::events::Message;
use crate::browser::ui::navigation::SuggestionView;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Dropdown drawn over the grid, right under the search bar.
pub struct SuggestionList {
    view: SuggestionView,
    noun: &'static str,
    last_area: Option<Rect>,
}

impl SuggestionList {
    pub fn new(noun: &'static str) -> Self {
        Self {
            view: SuggestionView::Hidden,
            noun,
            last_area: None,
        }
    }

    pub fn set_view(&mut self, view: SuggestionView) {
        self.view = view;
    }

    /// Rows needed including borders, or zero when hidden.
    pub fn desired_height(&self) -> u16 {
        match &self.view {
            SuggestionView::Hidden => 0,
            SuggestionView::NoResults => 3,
            SuggestionView::Results { items, .. } => items.len() as u16 + 2,
        }
    }

    /// Area painted by the last `render`, if the panel was visible.
    pub fn area(&self) -> Option<Rect> {
        self.last_area
    }

    /// Maps a screen position to a suggestion row.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_area?;
        let SuggestionView::Results { items, .. } = &self.view else {
            return None;
        };
        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        if !contains(inner, column, row) {
            return None;
        }
        let index = (row - inner.y) as usize;
        (index < items.len()).then_some(index)
    }

    fn row_line(item: &MediaItem, highlighted: bool) -> Line<'static> {
        let mut spans = vec![Span::styled(item.display_title().to_string(), Styles::normal())];
        if item.has_english_title() {
            spans.push(Span::styled(
                format!(" ({})", item.title_english),
                Styles::dimmed(),
            ));
        }
        spans.push(Span::styled(format!("  ID: {}", item.id), Styles::dimmed()));

        let line = Line::from(spans);
        if highlighted {
            line.style(Styles::selected())
        } else {
            line
        }
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let height = self.desired_height().min(area.height);
        if height == 0 {
            self.last_area = None;
            return;
        }
        let panel = Rect::new(area.x, area.y, area.width, height);
        self.last_area = Some(panel);

        let lines = match &self.view {
            SuggestionView::Hidden => Vec::new(),
            SuggestionView::NoResults => vec![Line::from(Span::styled(
                format!("No {} found", self.noun),
                Styles::dimmed(),
            ))],
            SuggestionView::Results { items, highlighted } => items
                .iter()
                .enumerate()
                .map(|(index, item)| Self::row_line(item, *highlighted == Some(index)))
                .collect(),
        };

        f.render_widget(Clear, panel);
        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::focused_border()),
        );
        f.render_widget(list, panel);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Down => Some(Message::SuggestionDown),
            KeyCode::Up => Some(Message::SuggestionUp),
            KeyCode::Enter => Some(Message::CommitSuggestion),
            KeyCode::Esc => Some(Message::DismissSuggestions),
            _ => None,
        }
    }
}
