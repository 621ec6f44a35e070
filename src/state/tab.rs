use super::{AppState, TabState, TabSwitchDirection};

impl AppState {
    /// Appends a fresh read-mode tab holding the help document and makes
    /// it active.
    pub fn open_new_tab(&mut self, name: Option<String>) {
        let name = name.unwrap_or_else(|| format!("Untitled {}", self.tabs.len() + 1));
        self.tabs.push(TabState::with_help(name));
        self.active_tab = self.tabs.len() - 1;
        self.set_message("New tab");
    }

    /// No-op when this is the only tab; the session always has at least
    /// one. Otherwise the tab to the left becomes active.
    pub fn close_active_tab(&mut self) {
        if self.tabs.len() <= 1 {
            return;
        }
        self.tabs.remove(self.active_tab);
        self.active_tab = self.active_tab.saturating_sub(1);
        self.set_message("Tab closed");
    }

    pub fn switch_tab(&mut self, direction: TabSwitchDirection) {
        let len = self.tabs.len();
        self.active_tab = match direction {
            TabSwitchDirection::Next => (self.active_tab + 1) % len,
            TabSwitchDirection::Prev => (self.active_tab + len - 1) % len,
        };
    }

    /// Exact-name linear search, first match wins. Returns whether a tab
    /// was found; the caller reports the failure message.
    pub fn jump_to_tab(&mut self, name: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.name == name) {
            Some(index) => {
                self.active_tab = index;
                true
            }
            None => false,
        }
    }

    pub fn rename_active_tab(&mut self, name: impl Into<String>) {
        self.active_mut().name = name.into();
    }
}
