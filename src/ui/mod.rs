mod command_line;
mod directory_pane;
mod editor_area;
mod metadata_pane;
mod status_bar;
mod tab_bar;

use ratatui::layout::{Constraint, Layout, Position};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use command_line::CommandLineWidget;
use directory_pane::DirectoryPaneWidget;
use editor_area::EditorAreaWidget;
use metadata_pane::MetadataPaneWidget;
use status_bar::{MessageLineWidget, StatusBarWidget};
use tab_bar::TabBarWidget;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame<'_>, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let body =
            Layout::horizontal([Constraint::Length(40), Constraint::Min(1)]).split(chunks[1]);
        let side = Layout::vertical([Constraint::Min(1), Constraint::Length(9)]).split(body[0]);

        let (editor, editor_cursor) = EditorAreaWidget::from_state(state, body[1]);

        frame.render_widget(TabBarWidget::from_state(state), chunks[0]);
        frame.render_widget(DirectoryPaneWidget::from_state(state), side[0]);
        frame.render_widget(MetadataPaneWidget::from_state(state), side[1]);
        frame.render_widget(editor, body[1]);
        frame.render_widget(MessageLineWidget::from_state(state), chunks[2]);
        frame.render_widget(StatusBarWidget::from_state(state), chunks[3]);
        frame.render_widget(CommandLineWidget::from_state(state), chunks[4]);

        match state.focus {
            Focus::Editor => {
                if let Some(position) = editor_cursor {
                    frame.set_cursor_position(position);
                }
            }
            Focus::Command => {
                let prefix = command_line::PROMPT.width() as u16;
                let col = prefix + state.command_line.width() as u16;
                frame.set_cursor_position(Position::new(
                    chunks[4].x + col.min(chunks[4].width.saturating_sub(1)),
                    chunks[4].y,
                ));
            }
            Focus::Directory => {}
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
