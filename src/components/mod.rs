//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the experience timeline while
//! reading shared state from Leptos context providers.

pub mod experience_card;
pub mod experience_section;
pub mod site_footer;
pub mod site_header;
