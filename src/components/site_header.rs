//! Site header with navigation, mobile drawer toggle, and theme switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Header chrome reads and writes `UiState` from context. Path matching for
//! the active link lives in `util::nav` so it stays testable off-target.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content;
use crate::state::ui::UiState;
use crate::util::{nav, theme};

/// Links shown in the primary navigation.
const NAV_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/about", "About")];

/// Site header: brand, nav links, mobile drawer toggle, theme toggle.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_nav_toggle = move |_| ui.update(|u| u.nav_open = !u.nav_open);
    let on_theme_toggle = move |_| {
        let next = theme::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">{content::SITE_NAME}</a>

            <button
                class="site-header__nav-toggle"
                on:click=on_nav_toggle
                aria-label="Toggle navigation"
                aria-expanded=move || bool_attr(ui.get().nav_open)
            >
                "☰"
            </button>

            <nav class=move || nav_drawer_class(ui.get().nav_open)>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let target = *href;
                        view! {
                            <a
                                class="site-nav__link"
                                class:active=move || nav::is_active(&pathname.get(), target)
                                href=target
                                on:click=move |_| ui.update(|u| u.nav_open = false)
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <button
                class="site-header__theme-toggle"
                on:click=on_theme_toggle
                title="Toggle theme"
                aria-pressed=move || bool_attr(ui.get().dark_mode)
            >
                {move || theme_toggle_glyph(ui.get().dark_mode)}
            </button>
        </header>
    }
}

/// Class list for the nav drawer; `--open` mirrors the mobile toggle state.
fn nav_drawer_class(open: bool) -> &'static str {
    if open { "site-nav site-nav--open" } else { "site-nav" }
}

fn theme_toggle_glyph(dark: bool) -> &'static str {
    if dark { "☀" } else { "☾" }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
