use crate::state::AccessMode;

/// The closed vocabulary of things the presentation layer can ask the core
/// to do. Every user gesture maps to exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Focus(FocusAction),
    Dir(DirAction),
    Tab(TabAction),
    Edit(EditAction),
    CommandLine(CommandLineAction),
    File(FileAction),
    System(SystemAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    NextPane,
    PrevPane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirAction {
    Navigate { delta: isize },
    EnterSelected,
    Ascend,
    OpenSelected { mode: AccessMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    New,
    CloseActive,
    SwitchPrev,
    SwitchNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    InsertChar(char),
    InsertNewline,
    Backspace,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandLineAction {
    InsertChar(char),
    Backspace,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    SaveActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    Quit,
}
