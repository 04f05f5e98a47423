use super::*;

#[test]
fn ui_state_defaults_to_light_theme_with_closed_nav() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
}

#[test]
fn ui_state_flags_are_independent() {
    let state = UiState { dark_mode: true, nav_open: false };
    assert!(state.dark_mode);
    assert!(!state.nav_open);
}
