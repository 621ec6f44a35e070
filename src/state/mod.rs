use std::path::PathBuf;

mod buffer;
mod dir;
mod tab;

pub use buffer::StringBuffer;
pub use dir::{DirError, DirState};

pub const HELP_TEXT: &str = "\
Welcome to Quill!

--- Commands ---
:rename NAME        Rename current tab
:NAME               Jump to tab named NAME
u PATH              Open directory PATH in the file pane
a FILE              Append editor content to FILE
w FILE              Write editor content to FILE (refuses existing files)
w! FILE             Force write, overwriting FILE
ow FILE             Overwrite FILE keeping a .bak backup
mkdir PATH          Create directory PATH
rm PATH             Remove file or directory PATH
saveas FILE         Save editor content as FILE and bind the tab to it

--- Keys ---
Ctrl+s              Save current file
Alt+n               New tab
Alt+w               Close current tab
Alt+h / Alt+l       Switch tab left/right
Alt+q               Quit
Tab / Shift+Tab     Switch between panes

--- Notes ---
Arrow keys navigate the directory pane; Enter opens files or enters
directories; a/w/o open the selected file in append/write/overwrite mode.
Existing files are never overwritten silently.
";

/// Per-tab access intent. Governs whether the buffer is editable and which
/// file primitive a save uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
    Append,
    Overwrite,
}

impl AccessMode {
    pub fn label(self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::Append => "append",
            AccessMode::Overwrite => "overwrite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Directory,
    Editor,
    Command,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Directory => Focus::Editor,
            Focus::Editor => Focus::Command,
            Focus::Command => Focus::Directory,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Directory => Focus::Command,
            Focus::Editor => Focus::Directory,
            Focus::Command => Focus::Editor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSwitchDirection {
    Prev,
    Next,
}

/// One editing context: a buffer, an optional bound file with its access
/// mode, and an independent directory browser.
#[derive(Debug)]
pub struct TabState {
    pub name: String,
    pub file: Option<PathBuf>,
    pub mode: AccessMode,
    pub dir: DirState,
    pub buffer: StringBuffer,
}

impl TabState {
    fn with_help(name: String) -> Self {
        Self {
            name,
            file: None,
            mode: AccessMode::Read,
            dir: DirState::new(),
            buffer: StringBuffer::new(HELP_TEXT),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.mode != AccessMode::Read
    }
}

/// The whole session. `tabs` is never empty and `active_tab` always
/// indexes into it; `message` holds only the most recent status string.
#[derive(Debug)]
pub struct AppState {
    pub tabs: Vec<TabState>,
    pub active_tab: usize,
    pub session_root: Option<PathBuf>,
    pub focus: Focus,
    pub command_line: String,
    pub message: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tabs: vec![TabState::with_help("Untitled 1".to_string())],
            active_tab: 0,
            session_root: None,
            focus: Focus::Command,
            command_line: String::new(),
            message: "Press 'u' to load a directory | Tab to switch panes | Alt+q to quit"
                .to_string(),
        }
    }

    pub fn active(&self) -> &TabState {
        self.tabs
            .get(self.active_tab)
            .expect("invariant: active tab index in range")
    }

    pub fn active_mut(&mut self) -> &mut TabState {
        self.tabs
            .get_mut(self.active_tab)
            .expect("invariant: active tab index in range")
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn reload_active_dir(&mut self) {
        self.active_mut().dir.reload();
    }

    pub fn status_line(&self) -> String {
        let tab = self.active();
        let file = tab
            .file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "None".to_string());
        format!(
            "Tab {}/{} | Mode: {} | File: {}",
            self.active_tab + 1,
            self.tabs.len(),
            tab.mode.label(),
            file
        )
    }

    /// Tab labels around the active one, the way a tab strip shows them:
    /// at most `window` neighbours each side, ellipses for the rest. The
    /// second element marks the active tab.
    pub fn tab_labels_windowed(&self, window: usize) -> Vec<(String, bool)> {
        let total = self.tabs.len();
        let start = self.active_tab.saturating_sub(window);
        let end = (self.active_tab + window + 1).min(total);

        let mut labels = Vec::new();
        if start > 0 {
            labels.push(("…".to_string(), false));
        }
        for (index, tab) in self.tabs.iter().enumerate().take(end).skip(start) {
            labels.push((tab.name.clone(), index == self.active_tab));
        }
        if end < total {
            labels.push(("…".to_string(), false));
        }
        labels
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
