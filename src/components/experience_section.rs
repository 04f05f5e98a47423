//! Experience section: derives display order and renders the card list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the one place card order is applied. `state::experience` computes
//! the order from parsed date labels; rendering consumes the sorted list in a
//! single page-load pass and never rearranges live nodes afterwards.

#[cfg(test)]
#[path = "experience_section_test.rs"]
mod experience_section_test;

use leptos::prelude::*;

use crate::components::experience_card::ExperienceCard;
use crate::content;
use crate::state::experience::{ExperienceEntry, build_entries, sort_entries};

/// Experience timeline section. Renders nothing when no cards are authored.
#[component]
pub fn ExperienceSection() -> impl IntoView {
    let entries = ordered_entries();
    if entries.is_empty() {
        return None;
    }

    Some(view! {
        <section id="experience" class="xp">
            <h2 class="xp__title">"Experience"</h2>
            <div class="xp-cards">
                {entries
                    .into_iter()
                    .map(|entry| view! { <ExperienceCard entry=entry/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    })
}

/// Build and order the card entries for display.
fn ordered_entries() -> Vec<ExperienceEntry> {
    let mut entries = build_entries(content::experience_items());
    sort_entries(&mut entries);
    entries
}
