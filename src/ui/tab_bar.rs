use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::state::AppState;

const LABEL_WINDOW: usize = 2;

pub(super) struct TabBarWidget {
    spans: Vec<Span<'static>>,
}

impl TabBarWidget {
    pub(super) fn from_state(state: &AppState) -> Self {
        let labels = state.tab_labels_windowed(LABEL_WINDOW);
        let mut spans = Vec::new();
        for (index, (label, active)) in labels.iter().enumerate() {
            let style = if *active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", label), style));
            if index + 1 != labels.len() {
                spans.push(Span::raw("|"));
            }
        }
        Self { spans }
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans)).render(area, buf);
    }
}
