//! Home page: hero copy and the experience timeline.

use leptos::prelude::*;

use crate::components::experience_section::ExperienceSection;
use crate::content;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__name">{content::SITE_NAME}</h1>
            <p class="hero__tagline">{content::TAGLINE}</p>
        </section>
        <ExperienceSection/>
    }
}
