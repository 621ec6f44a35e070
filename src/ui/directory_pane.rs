use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::state::{AppState, Focus};

pub(super) struct DirectoryPaneWidget {
    title: String,
    rows: Vec<(String, bool)>,
    cursor: usize,
    loaded: bool,
    focused: bool,
}

impl DirectoryPaneWidget {
    pub(super) fn from_state(state: &AppState) -> Self {
        let dir = &state.active().dir;
        let title = dir
            .root
            .as_ref()
            .map(|root| root.display().to_string())
            .unwrap_or_else(|| "Directory".to_string());

        let rows = dir
            .entries
            .iter()
            .map(|entry| {
                let mut name = entry
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| entry.display().to_string());
                if entry.is_dir() {
                    name.push('/');
                }
                (name, entry.is_dir())
            })
            .collect();

        Self {
            title,
            rows,
            cursor: dir.cursor,
            loaded: dir.root.is_some(),
            focused: state.focus == Focus::Directory,
        }
    }
}

impl Widget for DirectoryPaneWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(border_style);

        if !self.loaded {
            Paragraph::new("No directory loaded")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let lines = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, (name, is_dir))| {
                let selected = index == self.cursor;
                let marker = if selected { "> " } else { "  " };
                let mut style = if *is_dir {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                if selected {
                    style = style.add_modifier(Modifier::BOLD);
                    if self.focused {
                        style = style.bg(Color::DarkGray);
                    }
                }
                Line::from(Span::styled(format!("{}{}", marker, name), style))
            })
            .collect::<Vec<_>>();

        // Keep the cursor row inside the visible window.
        let inner_height = area.height.saturating_sub(2) as usize;
        let scroll = if inner_height > 0 {
            self.cursor.saturating_sub(inner_height - 1)
        } else {
            0
        };

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(block)
            .render(area, buf);
    }
}
