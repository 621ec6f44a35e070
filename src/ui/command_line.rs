use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::{AppState, Focus};

pub(super) const PROMPT: &str = " CMD> ";

pub(super) struct CommandLineWidget {
    line: String,
    focused: bool,
}

impl CommandLineWidget {
    pub(super) fn from_state(state: &AppState) -> Self {
        Self {
            line: state.command_line.clone(),
            focused: state.focus == Focus::Command,
        }
    }
}

impl Widget for CommandLineWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt_style = if self.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(PROMPT, prompt_style),
            Span::raw(self.line),
        ]))
        .render(area, buf);
    }
}
