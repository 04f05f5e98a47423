//! Site footer.

use leptos::prelude::*;

use crate::content;

/// Footer with the copyright line.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">{format!("© 2026 {}", content::SITE_NAME)}</p>
        </footer>
    }
}
