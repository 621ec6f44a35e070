use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::action::{
    AppAction, CommandLineAction, DirAction, EditAction, FileAction, FocusAction, SystemAction,
    TabAction,
};
use crate::state::{AccessMode, AppState, Focus};

/// Maps terminal events to actions. Global chords are resolved first, then
/// the key is routed by which pane has focus.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn action(&self, state: &AppState, event: &Event) -> Option<AppAction> {
        let Event::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::ALT) {
            return Self::alt_chord(key);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                return Some(AppAction::File(FileAction::SaveActive));
            }
            return None;
        }
        match key.code {
            KeyCode::Tab => return Some(AppAction::Focus(FocusAction::NextPane)),
            KeyCode::BackTab => return Some(AppAction::Focus(FocusAction::PrevPane)),
            _ => {}
        }

        match state.focus {
            Focus::Directory => Self::directory_key(key),
            Focus::Editor => Self::editor_key(state, key),
            Focus::Command => Self::command_key(key),
        }
    }

    fn alt_chord(key: &KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Char('n') => Some(AppAction::Tab(TabAction::New)),
            KeyCode::Char('w') => Some(AppAction::Tab(TabAction::CloseActive)),
            KeyCode::Char('h') => Some(AppAction::Tab(TabAction::SwitchPrev)),
            KeyCode::Char('l') => Some(AppAction::Tab(TabAction::SwitchNext)),
            KeyCode::Char('q') => Some(AppAction::System(SystemAction::Quit)),
            _ => None,
        }
    }

    fn directory_key(key: &KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Up => Some(AppAction::Dir(DirAction::Navigate { delta: -1 })),
            KeyCode::Down => Some(AppAction::Dir(DirAction::Navigate { delta: 1 })),
            KeyCode::Enter => Some(AppAction::Dir(DirAction::EnterSelected)),
            KeyCode::Backspace => Some(AppAction::Dir(DirAction::Ascend)),
            KeyCode::Char('a') => Some(AppAction::Dir(DirAction::OpenSelected {
                mode: AccessMode::Append,
            })),
            KeyCode::Char('w') => Some(AppAction::Dir(DirAction::OpenSelected {
                mode: AccessMode::Write,
            })),
            KeyCode::Char('o') => Some(AppAction::Dir(DirAction::OpenSelected {
                mode: AccessMode::Overwrite,
            })),
            _ => None,
        }
    }

    fn editor_key(state: &AppState, key: &KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Left => return Some(AppAction::Edit(EditAction::MoveLeft)),
            KeyCode::Right => return Some(AppAction::Edit(EditAction::MoveRight)),
            KeyCode::Up => return Some(AppAction::Edit(EditAction::MoveUp)),
            KeyCode::Down => return Some(AppAction::Edit(EditAction::MoveDown)),
            _ => {}
        }

        // Read-mode tabs drop edits silently, like a read-only buffer.
        if !state.active().is_editable() {
            return None;
        }
        match key.code {
            KeyCode::Enter => Some(AppAction::Edit(EditAction::InsertNewline)),
            KeyCode::Backspace => Some(AppAction::Edit(EditAction::Backspace)),
            KeyCode::Char(ch) => Some(AppAction::Edit(EditAction::InsertChar(ch))),
            _ => None,
        }
    }

    fn command_key(key: &KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Enter => Some(AppAction::CommandLine(CommandLineAction::Submit)),
            KeyCode::Backspace => Some(AppAction::CommandLine(CommandLineAction::Backspace)),
            KeyCode::Char(ch) => Some(AppAction::CommandLine(CommandLineAction::InsertChar(ch))),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::InputHandler;
    use crate::action::{AppAction, DirAction, FileAction, TabAction};
    use crate::state::{AccessMode, AppState, Focus};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn alt_chords_should_map_to_tab_actions_regardless_of_focus() {
        let handler = InputHandler::new();
        let mut state = AppState::new();
        state.focus = Focus::Editor;

        let action = handler.action(&state, &key(KeyCode::Char('n'), KeyModifiers::ALT));
        assert_eq!(action, Some(AppAction::Tab(TabAction::New)));
    }

    #[test]
    fn ctrl_s_should_save_active() {
        let handler = InputHandler::new();
        let state = AppState::new();

        let action = handler.action(&state, &key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(action, Some(AppAction::File(FileAction::SaveActive)));
    }

    #[test]
    fn directory_focus_should_map_open_mode_keys() {
        let handler = InputHandler::new();
        let mut state = AppState::new();
        state.focus = Focus::Directory;

        let action = handler.action(&state, &key(KeyCode::Char('o'), KeyModifiers::NONE));
        assert_eq!(
            action,
            Some(AppAction::Dir(DirAction::OpenSelected {
                mode: AccessMode::Overwrite,
            }))
        );
    }

    #[test]
    fn editor_focus_should_drop_edits_in_read_mode() {
        let handler = InputHandler::new();
        let mut state = AppState::new();
        state.focus = Focus::Editor;
        assert_eq!(state.active().mode, AccessMode::Read);

        let action = handler.action(&state, &key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(action, None);
    }
}
