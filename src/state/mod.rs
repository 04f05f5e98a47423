//! Shared application state and the experience timeline model.

pub mod experience;
pub mod ui;
