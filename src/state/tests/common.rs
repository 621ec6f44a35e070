use crate::state::AppState;

pub(super) fn test_state() -> AppState {
    AppState::new()
}
