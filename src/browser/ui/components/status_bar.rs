use crate::browser::domain::models::StatusLabel;
use crate::browser::ui::app_state::ViewSnapshot;
use crate::browser::ui::components::styles::Styles;
use crate::browser::domain::models::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const SEARCH_HINTS: &str =
    "↑/↓: Suggestions | Enter: Select | Esc: Close | PgUp/PgDn: Page | Tab: Grid | ?: Help";
const GRID_HINTS: &str =
    "←/→/↑/↓: Move | h/l: Page | Enter: Link | y: Copy link | /: Search | q: Quit | ?: Help";

/// Two lines: counters on top, message or key hints below.
pub struct StatusBar;

impl StatusBar {
    pub fn status_line(snapshot: &ViewSnapshot) -> String {
        let status = if snapshot.is_loading {
            "LOADING".to_string()
        } else {
            snapshot.status.to_string()
        };
        format!(
            "STATUS: {status}  {}: {}  PAGES: {}  PAGE {}",
            snapshot.kind.counter_label(),
            snapshot.visible_count,
            snapshot.page_count,
            snapshot.current_page,
        )
    }

    fn status_style(status: StatusLabel) -> Style {
        match status {
            StatusLabel::SearchApi | StatusLabel::Selected => Styles::success(),
            StatusLabel::SearchLocalFallback => Styles::warning(),
            StatusLabel::Ready | StatusLabel::Searching => Styles::label(),
        }
    }

    pub fn render(f: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let counters = Paragraph::new(Line::from(Span::styled(
            Self::status_line(snapshot),
            Self::status_style(snapshot.status),
        )));
        f.render_widget(counters, chunks[0]);

        let hint = match (&snapshot.message, snapshot.focus) {
            (Some(message), _) => Paragraph::new(message.as_str()).style(Styles::label()),
            (None, Focus::Search) => Paragraph::new(SEARCH_HINTS).style(Styles::dimmed()),
            (None, Focus::Grid) => Paragraph::new(GRID_HINTS).style(Styles::dimmed()),
        };
        f.render_widget(hint.alignment(Alignment::Center), chunks[1]);
    }
}
