use std::io;
use std::path::PathBuf;

use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::trace;

use crate::action_handler::ActionHandler;
use crate::command::Command;
use crate::input::InputHandler;
use crate::state::AppState;
use crate::ui::Renderer;

pub struct App {
    state: AppState,
    renderer: Renderer,
    action_handler: ActionHandler,
    input_handler: InputHandler,
}

impl App {
    pub fn new(initial_dir: Option<PathBuf>) -> Self {
        let mut state = AppState::new();
        let action_handler = ActionHandler;
        if let Some(dir) = initial_dir {
            // Same path as the `u` command: the argument becomes the
            // session root.
            action_handler.run_command(&mut state, Command::LoadDir { path: dir });
        }

        Self {
            state,
            renderer: Renderer::new(),
            action_handler,
            input_handler: InputHandler::new(),
        }
    }

    /// One event at a time, processed to completion before the next is
    /// read. Filesystem work happens inline; there is no background IO.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle("quill"))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        loop {
            terminal.draw(|frame| self.renderer.render(frame, &self.state))?;
            trace!("redraw");

            let evt = event::read()?;
            let Some(action) = self.input_handler.action(&self.state, &evt) else {
                continue;
            };
            if self.action_handler.apply(&mut self.state, action).is_break() {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(())
    }
}
