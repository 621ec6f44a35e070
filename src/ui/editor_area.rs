use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::state::{AppState, Focus};

pub(super) struct EditorAreaWidget {
    title: String,
    text: String,
    scroll: u16,
    focused: bool,
}

impl EditorAreaWidget {
    /// Builds the widget and, when the editor pane has focus, the terminal
    /// cursor position inside it.
    pub(super) fn from_state(state: &AppState, area: Rect) -> (Self, Option<Position>) {
        let tab = state.active();
        let focused = state.focus == Focus::Editor;
        let (row, col) = tab.buffer.cursor_row_col();

        let inner_height = area.height.saturating_sub(2);
        let inner_width = area.width.saturating_sub(2);
        let scroll = row.saturating_sub(inner_height.saturating_sub(1));

        let cursor = (focused && inner_height > 0).then(|| {
            Position::new(
                area.x + 1 + col.min(inner_width.saturating_sub(1)),
                area.y + 1 + (row - scroll),
            )
        });

        let widget = Self {
            title: format!(" {} [{}] ", tab.name, tab.mode.label()),
            text: tab.buffer.get_text().to_string(),
            scroll,
            focused,
        };
        (widget, cursor)
    }
}

impl Widget for EditorAreaWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(self.text)
            .scroll((self.scroll, 0))
            .block(
                Block::bordered()
                    .title(self.title)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
