use std::fs;

use quill::action::{AppAction, DirAction, FileAction};
use quill::action_handler::ActionHandler;
use quill::state::{AccessMode, AppState, HELP_TEXT};
use tempfile::TempDir;

fn session() -> (ActionHandler, AppState, TempDir) {
    let tmp = TempDir::new().unwrap();
    let handler = ActionHandler;
    let mut state = AppState::new();
    handler.execute_command(&mut state, &format!("u {}", tmp.path().display()));
    assert!(state.message.starts_with("Loaded directory:"), "{}", state.message);
    (handler, state, tmp)
}

fn set_text(state: &mut AppState, text: &str) {
    state.active_mut().buffer.set_text(text);
}

#[test]
fn write_refuses_existing_file_until_forced() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("notes.txt");
    fs::write(&path, "original").unwrap();
    set_text(&mut state, "replacement");

    handler.execute_command(&mut state, &format!("w {}", path.display()));
    assert!(state.message.contains("Refusing to overwrite"), "{}", state.message);
    assert!(state.message.contains("'w!' to force"), "{}", state.message);
    assert_eq!(fs::read_to_string(&path).unwrap(), "original");

    handler.execute_command(&mut state, &format!("w! {}", path.display()));
    assert!(state.message.contains("(forced)"), "{}", state.message);
    assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
}

#[test]
fn write_creates_missing_file_and_listing_picks_it_up() {
    let (handler, mut state, tmp) = session();
    assert!(state.active().dir.entries.is_empty());
    set_text(&mut state, "fresh");

    let path = tmp.path().join("new.txt");
    handler.execute_command(&mut state, &format!("w {}", path.display()));

    assert_eq!(state.message, "Written to new.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    assert_eq!(state.active().dir.entries, vec![path]);
}

#[test]
fn ow_renames_existing_file_to_plain_bak() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("doc.txt");
    fs::write(&path, "old").unwrap();
    set_text(&mut state, "new");

    handler.execute_command(&mut state, &format!("ow {}", path.display()));

    assert!(state.message.contains("(backup: doc.txt.bak)"), "{}", state.message);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert_eq!(
        fs::read_to_string(tmp.path().join("doc.txt.bak")).unwrap(),
        "old"
    );
}

#[test]
fn ow_timestamps_the_backup_when_bak_is_taken() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("doc.txt");
    fs::write(&path, "v2").unwrap();
    fs::write(tmp.path().join("doc.txt.bak"), "v1").unwrap();
    set_text(&mut state, "v3");

    handler.execute_command(&mut state, &format!("ow {}", path.display()));

    assert!(state.message.contains("(backup: doc.txt.bak."), "{}", state.message);
    assert_eq!(fs::read_to_string(&path).unwrap(), "v3");
    // The plain .bak keeps the older generation.
    assert_eq!(
        fs::read_to_string(tmp.path().join("doc.txt.bak")).unwrap(),
        "v1"
    );
    let stamped = fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(|entry| {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            name.starts_with("doc.txt.bak.").then_some(name)
        })
        .count();
    assert_eq!(stamped, 1);
}

#[test]
fn mkdir_reports_already_existing_directory() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("drafts");

    handler.execute_command(&mut state, &format!("mkdir {}", path.display()));
    assert!(path.is_dir());
    assert_eq!(state.message, format!("Directory created: {}", path.display()));

    handler.execute_command(&mut state, &format!("mkdir {}", path.display()));
    assert_eq!(
        state.message,
        format!("Directory already exists: {}", path.display())
    );
}

#[test]
fn rm_removes_a_directory_tree_and_reports_missing_paths() {
    let (handler, mut state, tmp) = session();
    let dir = tmp.path().join("bundle");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("inner.txt"), "x").unwrap();

    handler.execute_command(&mut state, &format!("rm {}", dir.display()));
    assert!(!dir.exists());
    assert_eq!(state.message, format!("Removed: {}", dir.display()));

    handler.execute_command(&mut state, &format!("rm {}", dir.display()));
    assert_eq!(
        state.message,
        format!("Path does not exist: {}", dir.display())
    );
}

#[test]
fn ascend_stops_at_the_directory_loaded_with_u() {
    let (handler, mut state, tmp) = session();

    handler.apply(&mut state, AppAction::Dir(DirAction::Ascend));
    assert_eq!(state.message, "cannot navigate above initial directory");
    assert_eq!(state.active().dir.root.as_deref(), Some(tmp.path()));
}

#[test]
fn ascend_returns_from_a_subdirectory() {
    let (handler, mut state, tmp) = session();
    let sub = tmp.path().join("inner");
    fs::create_dir(&sub).unwrap();

    state.reload_active_dir();
    handler.apply(&mut state, AppAction::Dir(DirAction::EnterSelected));
    assert_eq!(state.active().dir.root.as_deref(), Some(sub.as_path()));

    handler.apply(&mut state, AppAction::Dir(DirAction::Ascend));
    assert_eq!(state.active().dir.root.as_deref(), Some(tmp.path()));
    assert_eq!(state.message, format!("Entered: {}", tmp.path().display()));
}

#[test]
fn saveas_binds_the_file_and_switches_to_write_mode() {
    let (handler, mut state, tmp) = session();
    set_text(&mut state, "draft body");
    let path = tmp.path().join("draft.txt");

    handler.execute_command(&mut state, &format!("saveas {}", path.display()));

    assert_eq!(state.message, "Written to draft.txt");
    let tab = state.active();
    assert_eq!(tab.file.as_deref(), Some(path.as_path()));
    assert_eq!(tab.mode, AccessMode::Write);
    assert!(tab.is_editable());
    assert_eq!(fs::read_to_string(&path).unwrap(), "draft body");
}

#[test]
fn save_active_dispatches_on_the_access_mode() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("log.txt");
    set_text(&mut state, "one");
    handler.execute_command(&mut state, &format!("saveas {}", path.display()));

    set_text(&mut state, "two");
    handler.apply(&mut state, AppAction::File(FileAction::SaveActive));
    assert_eq!(fs::read_to_string(&path).unwrap(), "two");

    state.active_mut().mode = AccessMode::Append;
    set_text(&mut state, "+three");
    handler.apply(&mut state, AppAction::File(FileAction::SaveActive));
    assert_eq!(fs::read_to_string(&path).unwrap(), "two+three");
}

#[test]
fn save_active_refuses_read_mode_and_unbound_tabs() {
    let (handler, mut state, tmp) = session();

    handler.apply(&mut state, AppAction::File(FileAction::SaveActive));
    assert_eq!(state.message, "No file bound to current tab");

    let path = tmp.path().join("ro.txt");
    fs::write(&path, "untouched").unwrap();
    {
        let tab = state.active_mut();
        tab.file = Some(path.clone());
        tab.mode = AccessMode::Read;
    }
    handler.apply(&mut state, AppAction::File(FileAction::SaveActive));
    assert_eq!(state.message, "Tab is read-only");
    assert_eq!(fs::read_to_string(&path).unwrap(), "untouched");
}

#[test]
fn rename_then_colon_name_jumps_back_to_the_tab() {
    let (handler, mut state, _tmp) = session();
    handler.execute_command(&mut state, ":rename draft");
    assert_eq!(state.message, "Tab renamed to draft");

    state.open_new_tab(None);
    assert_eq!(state.active_tab, 1);

    handler.execute_command(&mut state, ":draft");
    assert_eq!(state.active_tab, 0);
    assert_eq!(state.active().name, "draft");

    handler.execute_command(&mut state, ":ghost");
    assert_eq!(state.message, "No tab named 'ghost'");
    assert_eq!(state.active_tab, 0);
}

#[test]
fn help_unbinds_the_tab_and_restores_the_help_text() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("draft.txt");
    set_text(&mut state, "body");
    handler.execute_command(&mut state, &format!("saveas {}", path.display()));
    assert!(state.active().file.is_some());

    handler.execute_command(&mut state, ":help");

    assert_eq!(state.message, "Help loaded");
    let tab = state.active();
    assert_eq!(tab.file, None);
    assert_eq!(tab.mode, AccessMode::Read);
    assert_eq!(tab.buffer.get_text(), HELP_TEXT);
}

#[test]
fn unknown_input_leaves_the_message_untouched() {
    let (handler, mut state, _tmp) = session();
    state.set_message("previous status");

    handler.execute_command(&mut state, "hello world");
    handler.execute_command(&mut state, "");
    handler.execute_command(&mut state, "w");

    assert_eq!(state.message, "previous status");
}

#[test]
fn u_rejects_paths_that_are_not_directories() {
    let (handler, mut state, tmp) = session();
    let file = tmp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    handler.execute_command(&mut state, &format!("u {}", file.display()));
    assert_eq!(state.message, "Invalid directory");
    // The session root and listing stay on the last good directory.
    assert_eq!(state.session_root.as_deref(), Some(tmp.path()));
    assert_eq!(state.active().dir.root.as_deref(), Some(tmp.path()));
}

#[test]
fn append_command_extends_the_target_file() {
    let (handler, mut state, tmp) = session();
    let path = tmp.path().join("log.txt");
    fs::write(&path, "start|").unwrap();
    set_text(&mut state, "more");

    handler.execute_command(&mut state, &format!("a {}", path.display()));

    assert_eq!(state.message, "Appended to log.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "start|more");
}
