//! Local UI chrome state (theme and mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation flags out of the content model so the header
//! controls can evolve independently of what the pages render.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the header chrome: theme and the mobile nav drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}
