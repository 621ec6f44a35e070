use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::action::{
    AppAction, CommandLineAction, DirAction, EditAction, FileAction, FocusAction, SystemAction,
    TabAction,
};
use crate::command::{self, Command, Parsed};
use crate::file_ops::{self, FileOpError};
use crate::state::{AccessMode, AppState, HELP_TEXT, TabSwitchDirection};

/// Interprets actions and command lines against the session state. Every
/// failure ends in a status message; nothing here aborts the session, and
/// no error path leaves the tab list or a directory cursor out of range.
pub struct ActionHandler;

impl ActionHandler {
    pub fn apply(&self, state: &mut AppState, action: AppAction) -> ControlFlow<()> {
        match action {
            AppAction::Focus(FocusAction::NextPane) => state.focus = state.focus.next(),
            AppAction::Focus(FocusAction::PrevPane) => state.focus = state.focus.prev(),
            AppAction::Dir(DirAction::Navigate { delta }) => {
                state.active_mut().dir.move_cursor(delta);
            }
            AppAction::Dir(DirAction::EnterSelected) => self.enter_selected(state),
            AppAction::Dir(DirAction::Ascend) => self.ascend(state),
            AppAction::Dir(DirAction::OpenSelected { mode }) => self.open_selected(state, mode),
            AppAction::Tab(TabAction::New) => state.open_new_tab(None),
            AppAction::Tab(TabAction::CloseActive) => state.close_active_tab(),
            AppAction::Tab(TabAction::SwitchPrev) => state.switch_tab(TabSwitchDirection::Prev),
            AppAction::Tab(TabAction::SwitchNext) => state.switch_tab(TabSwitchDirection::Next),
            AppAction::Edit(edit) => self.apply_edit(state, edit),
            AppAction::CommandLine(CommandLineAction::InsertChar(ch)) => {
                state.command_line.push(ch);
            }
            AppAction::CommandLine(CommandLineAction::Backspace) => {
                let _ = state.command_line.pop();
            }
            AppAction::CommandLine(CommandLineAction::Submit) => {
                let line = std::mem::take(&mut state.command_line);
                self.execute_command(state, &line);
            }
            AppAction::File(FileAction::SaveActive) => self.save_active(state),
            AppAction::System(SystemAction::Quit) => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    pub fn execute_command(&self, state: &mut AppState, line: &str) {
        match command::parse(line) {
            Parsed::Unrecognized => {}
            Parsed::Invalid { message } => state.set_message(message),
            Parsed::Command(cmd) => self.run_command(state, cmd),
        }
    }

    pub fn run_command(&self, state: &mut AppState, cmd: Command) {
        match cmd {
            Command::Help => {
                let tab = state.active_mut();
                tab.buffer.set_text(HELP_TEXT);
                tab.file = None;
                tab.mode = AccessMode::Read;
                state.set_message("Help loaded");
            }
            Command::RenameTab { name } => {
                state.rename_active_tab(name.clone());
                state.set_message(format!("Tab renamed to {}", name));
            }
            Command::JumpTab { name } => {
                if !state.jump_to_tab(&name) {
                    state.set_message(format!("No tab named '{}'", name));
                }
            }
            Command::LoadDir { path } => self.load_directory(state, &path),
            Command::AppendTo { path } => {
                let text = state.active().buffer.get_text().to_string();
                self.finish_fs_command(state, file_ops::append(&path, &text));
            }
            Command::Write { path, force: false } => {
                if path.exists() {
                    let name = file_name(&path);
                    state.set_message(format!(
                        "Refusing to overwrite existing file: '{}'. \
                         Use 'w!' to force or 'ow {}' to keep a backup.",
                        name, name
                    ));
                    return;
                }
                let text = state.active().buffer.get_text().to_string();
                self.finish_fs_command(state, file_ops::write(&path, &text));
            }
            Command::Write { path, force: true } => {
                let text = state.active().buffer.get_text().to_string();
                let result =
                    file_ops::write(&path, &text).map(|message| format!("{} (forced)", message));
                self.finish_fs_command(state, result);
            }
            Command::OverwriteWithBackup { path } => {
                let text = state.active().buffer.get_text().to_string();
                let result = Self::overwrite_keeping_backup(&path, &text);
                self.finish_fs_command(state, result);
            }
            Command::MakeDir { path } => {
                self.finish_fs_command(state, file_ops::make_dir(&path));
            }
            Command::Remove { path } => {
                self.finish_fs_command(state, file_ops::remove(&path));
            }
            Command::SaveAs { path } => {
                let text = state.active().buffer.get_text().to_string();
                match file_ops::write(&path, &text) {
                    Ok(message) => {
                        let tab = state.active_mut();
                        tab.file = Some(path.clone());
                        tab.mode = AccessMode::Write;
                        state.set_message(message);
                    }
                    Err(err) => state.set_message(err.to_string()),
                }
                state.reload_active_dir();
            }
        }
    }

    /// Save against the tab's bound file, dispatched on its access mode.
    fn save_active(&self, state: &mut AppState) {
        let (path, mode, text) = {
            let tab = state.active();
            let Some(path) = tab.file.clone() else {
                state.set_message("No file bound to current tab");
                return;
            };
            (path, tab.mode, tab.buffer.get_text().to_string())
        };

        let result = match mode {
            AccessMode::Read => {
                state.set_message("Tab is read-only");
                return;
            }
            AccessMode::Write => file_ops::write(&path, &text),
            AccessMode::Append => file_ops::append(&path, &text),
            AccessMode::Overwrite => file_ops::overwrite_with_backup(&path, &text),
        };
        self.finish_fs_command(state, result);
    }

    fn load_directory(&self, state: &mut AppState, path: &Path) {
        if !path.is_dir() {
            state.set_message("Invalid directory");
            return;
        }
        match state.active_mut().dir.load(path) {
            Ok(()) => {
                info!("loaded directory: {}", path.display());
                state.session_root = Some(path.to_path_buf());
                state.set_message(format!("Loaded directory: {}", path.display()));
            }
            Err(err) => state.set_message(err.to_string()),
        }
    }

    fn enter_selected(&self, state: &mut AppState) {
        let Some(selected) = state.active().dir.selected().cloned() else {
            return;
        };
        if selected.is_dir() {
            match state.active_mut().dir.load(&selected) {
                Ok(()) => state.set_message(format!("Entered: {}", selected.display())),
                Err(err) => state.set_message(err.to_string()),
            }
            return;
        }
        self.open_file(state, &selected, AccessMode::Read);
    }

    fn open_selected(&self, state: &mut AppState, mode: AccessMode) {
        let Some(selected) = state.active().dir.selected().cloned() else {
            return;
        };
        if !selected.is_file() {
            return;
        }
        self.open_file(state, &selected, mode);
    }

    fn open_file(&self, state: &mut AppState, path: &Path, mode: AccessMode) {
        match file_ops::read(path) {
            Ok(content) => {
                let tab = state.active_mut();
                tab.buffer.set_text(content);
                tab.file = Some(path.to_path_buf());
                tab.mode = mode;
                state.set_message(format!("Opened: {}", file_name(path)));
            }
            Err(err) => {
                error!("open file failed: {}", err);
                state.set_message(err.to_string());
            }
        }
    }

    /// Parent navigation stops at the session root loaded via `u`. Path
    /// equality only; symlink aliasing is not seen through.
    fn ascend(&self, state: &mut AppState) {
        let Some(root) = state.active().dir.root.clone() else {
            return;
        };
        if state.session_root.as_deref() == Some(root.as_path()) {
            state.set_message("cannot navigate above initial directory");
            return;
        }
        let Some(parent) = root.parent().map(Path::to_path_buf) else {
            return;
        };
        match state.active_mut().dir.load(&parent) {
            Ok(()) => state.set_message(format!("Entered: {}", parent.display())),
            Err(err) => state.set_message(err.to_string()),
        }
    }

    fn apply_edit(&self, state: &mut AppState, edit: EditAction) {
        let editable = state.active().is_editable();
        let buffer = &mut state.active_mut().buffer;
        match edit {
            EditAction::MoveLeft => buffer.move_left(),
            EditAction::MoveRight => buffer.move_right(),
            EditAction::MoveUp => buffer.move_up(),
            EditAction::MoveDown => buffer.move_down(),
            EditAction::InsertChar(ch) if editable => buffer.insert_char(ch),
            EditAction::InsertNewline if editable => buffer.insert_newline(),
            EditAction::Backspace if editable => buffer.backspace(),
            EditAction::InsertChar(_) | EditAction::InsertNewline | EditAction::Backspace => {}
        }
    }

    /// The `ow` command: move any existing file aside under a backup name
    /// (timestamped when `.bak` is taken), then write fresh content.
    fn overwrite_keeping_backup(path: &Path, text: &str) -> Result<String, FileOpError> {
        let backup_name = if path.exists() {
            let backup = file_ops::backup_target(path);
            std::fs::rename(path, &backup).map_err(|source| FileOpError::Io {
                operation: "backup",
                path: path.display().to_string(),
                source,
            })?;
            Some(file_name(&backup))
        } else {
            None
        };

        let written = file_ops::write(path, text)?;
        Ok(format!(
            "{} (backup: {})",
            written,
            backup_name.as_deref().unwrap_or("none")
        ))
    }

    /// Report the outcome, then re-list the active directory so the pane
    /// reflects whatever the command did on disk.
    fn finish_fs_command(&self, state: &mut AppState, result: Result<String, FileOpError>) {
        match result {
            Ok(message) => state.set_message(message),
            Err(err) => state.set_message(err.to_string()),
        }
        state.reload_active_dir();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
