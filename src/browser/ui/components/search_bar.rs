use crate::browser::ui::components::Component;
use crate::browser::ui::components::styles::Styles;
use crate::browser::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line query editor with readline-style shortcuts.
pub struct SearchBar {
    query: String,
    cursor_position: usize, // in chars
    noun: &'static str,
    focused: bool,
    is_searching: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new("items")
    }
}

impl SearchBar {
    pub fn new(noun: &'static str) -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            noun,
            focused: true,
            is_searching: false,
        }
    }

    /// Only resets the cursor when the text actually changes, so external
    /// state syncs on every frame do not fight the user's cursor.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(index, _)| index)
            .unwrap_or(self.query.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Removes chars in `[start, end)` and leaves the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_index(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn handle_control(&mut self, code: KeyCode) -> Option<Message> {
        match code {
            KeyCode::Char('a') => {
                self.cursor_position = 0;
                None
            }
            KeyCode::Char('e') => {
                self.cursor_position = self.char_count();
                None
            }
            KeyCode::Char('b') => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Char('f') => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Char('h') => self.backspace(),
            KeyCode::Char('d') => self.delete_range(self.cursor_position, self.cursor_position + 1),
            KeyCode::Char('w') => {
                let start = self.find_prev_word_boundary(self.cursor_position);
                self.delete_range(start, self.cursor_position)
            }
            KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
            KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
            _ => None,
        }
    }

    fn backspace(&mut self) -> Option<Message> {
        if self.cursor_position == 0 {
            return None;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let split = self.byte_index(self.cursor_position);
        let (before, rest) = self.query.split_at(split);

        let mut spans = vec![Span::raw(before.to_string())];
        if self.focused {
            let mut rest_chars = rest.chars();
            let under_cursor = rest_chars.next().unwrap_or(' ');
            spans.push(Span::styled(under_cursor.to_string(), cursor_style));
            spans.push(Span::raw(rest_chars.as_str().to_string()));
        } else {
            spans.push(Span::raw(rest.to_string()));
        }

        let mut title = format!("Search {}", self.noun);
        if self.is_searching {
            title.push_str(" [searching...]");
        }

        let border_style = if self.focused {
            Styles::focused_border()
        } else {
            Styles::dimmed()
        };

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control(key.code);
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_range(self.cursor_position, self.cursor_position + 1),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
