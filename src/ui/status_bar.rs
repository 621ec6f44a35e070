use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::AppState;

pub(super) struct StatusBarWidget {
    status_line: String,
}

impl StatusBarWidget {
    pub(super) fn from_state(state: &AppState) -> Self {
        Self {
            status_line: state.status_line(),
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.status_line),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )))
        .render(area, buf);
    }
}

pub(super) struct MessageLineWidget {
    message: String,
}

impl MessageLineWidget {
    pub(super) fn from_state(state: &AppState) -> Self {
        Self {
            message: state.message.clone(),
        }
    }
}

impl Widget for MessageLineWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::raw(format!(" {}", self.message)))).render(area, buf);
    }
}
