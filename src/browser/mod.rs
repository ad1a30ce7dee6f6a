use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod application;
pub mod constants;
pub mod controller;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub(crate) mod test_support;

use self::application::catalog_client::{CatalogApi, HttpCatalogClient};
use self::constants::{
    DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, PAGE_SIZE,
    SEARCH_DEBOUNCE_MS,
};
use self::controller::Controller;
use self::domain::models::{CatalogKind, Focus};
use self::ui::{
    components::Component, events::Message, navigation::SuggestionView, renderer::Renderer,
};

/// Runtime settings for one browser session.
#[derive(Clone, Debug)]
pub struct BrowserConfig {
    pub base_url: String,
    pub kind: CatalogKind,
    pub timeout: Duration,
    pub page_size: usize,
    pub debounce: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            kind: CatalogKind::Movies,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            page_size: PAGE_SIZE,
            debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
        }
    }
}

pub struct CatalogBrowser {
    controller: Controller,
    renderer: Renderer,
}

impl CatalogBrowser {
    pub fn new(config: BrowserConfig) -> Result<Self> {
        let client = HttpCatalogClient::new(&config.base_url, config.kind, config.timeout)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    pub fn with_api(config: BrowserConfig, api: Arc<dyn CatalogApi>) -> Self {
        Self {
            controller: Controller::new(&config, api),
            renderer: Renderer::new(config.kind),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.controller.start(Instant::now());
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let snapshot = self.controller.snapshot();
            terminal.draw(|f| {
                self.renderer.render(f, &snapshot);
            })?;

            self.controller.tick(Instant::now());
            if self.controller.should_quit() {
                break;
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_input(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.controller.should_quit() {
                break;
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.controller.handle_ctrl_c(Instant::now());
            return;
        }

        let snapshot = self.controller.snapshot();
        if snapshot.show_help {
            if let Some(msg) = self.renderer.get_help_dialog_mut().handle_key(key) {
                self.controller.handle_message(msg);
            }
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.controller.handle_message(Message::ShowHelp);
            return;
        }

        let message = match snapshot.focus {
            Focus::Search => self.handle_search_input(key, &snapshot.suggestions),
            Focus::Grid => self.renderer.get_catalog_grid_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.controller.handle_message(msg);
        }
    }

    fn handle_search_input(
        &mut self,
        key: KeyEvent,
        suggestions: &SuggestionView,
    ) -> Option<Message> {
        let panel_open = *suggestions != SuggestionView::Hidden;
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc if panel_open => {
                self.renderer.get_suggestion_list_mut().handle_key(key)
            }
            KeyCode::Esc | KeyCode::Tab => Some(Message::FocusGrid),
            KeyCode::PageUp => Some(Message::PrevPage),
            KeyCode::PageDown => Some(Message::NextPage),
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        if let Some(index) = self.renderer.suggestion_row_at(column, row) {
            self.controller.handle_message(Message::ClickSuggestion(index));
        } else if self.renderer.in_search_region(column, row) {
            self.controller.handle_message(Message::FocusSearch);
        } else {
            self.controller.handle_message(Message::ClickOutside);
            if let Some(index) = self.renderer.grid_cell_at(column, row) {
                self.controller.handle_message(Message::ClickGridCell(index));
            }
        }
    }
}
