//! Single experience card.

use leptos::prelude::*;

use crate::state::experience::ExperienceEntry;

/// One experience card. Ongoing engagements carry the `current` marker class
/// for styling; the date label itself is always rendered verbatim.
#[component]
pub fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    let ongoing = entry.range.ongoing;
    let tags = entry.item.tags;

    view! {
        <article class="xp-card" class:current=ongoing>
            <h3 class="xp-card__role">{entry.item.role}</h3>
            <p class="xp-card__org">{entry.item.organization}</p>
            <p class="xp-dates">{entry.item.dates_label}</p>
            <p class="xp-card__summary">{entry.item.summary}</p>
            <ul class="xp-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <li class="xp-card__tag">{tag}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
