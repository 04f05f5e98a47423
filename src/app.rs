//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content;
use crate::pages::{about::AboutPage, home::HomePage};
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Applies the stored theme before the first paint, provides shared UI state,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initial theme: stored choice, else OS preference.
    let dark_mode = theme::read_preference();
    theme::apply(dark_mode);

    let ui = RwSignal::new(UiState { dark_mode, nav_open: false });
    provide_context(ui);

    view! {
        <Stylesheet id="folio" href="/assets/site.css"/>
        <Title text=content::SITE_NAME/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
