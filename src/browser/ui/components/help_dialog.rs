use crate::browser::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::browser::ui::components::Component;
use crate::browser::ui::components::styles::Styles;
use crate::browser::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog {
    noun: &'static str,
}

impl HelpDialog {
    pub fn new(noun: &'static str) -> Self {
        Self { noun }
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(title, Styles::label())])
    }

    fn get_help_text(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                format!("Catalog Browser - {}", self.noun),
                Styles::title(),
            )]),
            Line::from(""),
            Self::section("Search box:"),
            Line::from("  type        - Filter as you type (2+ characters)"),
            Line::from("  ↑/↓         - Move through suggestions"),
            Line::from("  Enter       - Select highlighted suggestion"),
            Line::from("  Esc         - Close suggestions and focus the grid"),
            Line::from("  Tab         - Focus the grid"),
            Line::from("  PgUp/PgDn   - Previous / next page"),
            Line::from("  Ctrl+A/E/W/U/K - Line editing"),
            Line::from(""),
            Self::section("Grid:"),
            Line::from("  ←/→/↑/↓     - Move the cursor"),
            Line::from("  h/l, [/]    - Previous / next page"),
            Line::from("  Home/End    - First / last page"),
            Line::from("  Enter       - Show detail link"),
            Line::from("  y           - Copy detail link to clipboard"),
            Line::from("  / or Tab    - Back to search"),
            Line::from("  q           - Quit"),
            Line::from(""),
            Self::section("Mouse:"),
            Line::from("  click a suggestion or cell to select it"),
            Line::from("  click elsewhere to close suggestions"),
            Line::from(""),
            Line::from("Ctrl+C twice quits from anywhere."),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = self.get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Styles::title()),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
