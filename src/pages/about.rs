//! About page with short bio copy.

use leptos::prelude::*;

use crate::content;

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1 class="about__title">"About"</h1>
            {content::about_paragraphs()
                .into_iter()
                .map(|paragraph| view! { <p class="about__para">{paragraph}</p> })
                .collect::<Vec<_>>()}
        </section>
    }
}
