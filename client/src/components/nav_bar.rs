//! Fixed navigation bar with scroll-spy, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the window `scroll` and `keydown` listeners for the page. Both are
//! removed on unmount. Nav state is read from context so the hero and footer
//! can share `navigate`.

use leptos::ev;
use leptos::prelude::*;

use crate::consts::PREFERS_DARK_QUERY;
use crate::content::SECTIONS;
use crate::state::nav::{MENU_TOGGLE_ID, MOBILE_MENU_ID, NavState};
use crate::state::theme::ThemeState;
use crate::util::theme::LocalThemeStore;
use crate::util::viewport::{BrowserViewport, Viewport};

/// Smooth-scroll to section `id` and close the mobile menu.
pub fn navigate_to(nav: RwSignal<NavState>, id: &'static str) {
    nav.update(|n| n.navigate(&BrowserViewport, id));
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();

    Effect::new(move || {
        let os_dark = BrowserViewport.matches_media(PREFERS_DARK_QUERY);
        theme.set(ThemeState::init(&LocalThemeStore, os_dark));
        nav.maybe_update(|n| n.on_scroll(&BrowserViewport));
    });

    let scroll = window_event_listener(ev::scroll, move |_| {
        nav.maybe_update(|n| n.on_scroll(&BrowserViewport));
    });
    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" || !nav.with_untracked(|n| n.menu_open) {
            return;
        }
        nav.update(|n| {
            n.on_escape(&BrowserViewport);
        });
    });
    on_cleanup(move || {
        scroll.remove();
        keys.remove();
    });

    let on_toggle_theme = move |_| {
        theme.update(|t| {
            t.toggle(&LocalThemeStore);
        });
    };

    let links = move |class: &'static str| {
        SECTIONS
            .iter()
            .map(|section| {
                let id = section.id;
                view! {
                    <li>
                        <button
                            class=class
                            class:active=move || nav.get().is_active(id)
                            aria-current=move || nav.get().is_active(id).then_some("true")
                            on:click=move |_| navigate_to(nav, id)
                        >
                            {section.label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar" class:scrolled=move || nav.get().scrolled>
            <nav class="navbar__inner" aria-label="Main navigation">
                <button class="navbar__brand" on:click=move |_| navigate_to(nav, "home")>
                    <span class="navbar__logo" aria-hidden="true">"◆"</span>
                    "AstraX "
                    <span class="accent">"Fusion Tech"</span>
                </button>

                <ul class="navbar__links">{links("navbar__link")}</ul>

                <div class="navbar__actions">
                    <button
                        class="theme-toggle"
                        aria-label=move || {
                            if theme.get().mode.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                        }
                        on:click=on_toggle_theme
                    >
                        {move || if theme.get().mode.is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button
                        id=MENU_TOGGLE_ID
                        class="navbar__menu-toggle"
                        aria-label="Toggle menu"
                        aria-controls=MOBILE_MENU_ID
                        aria-expanded=move || if nav.get().menu_open { "true" } else { "false" }
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            <div id=MOBILE_MENU_ID class="navbar__mobile" class:open=move || nav.get().menu_open>
                <ul>{links("navbar__mobile-link")}</ul>
            </div>
        </header>
    }
}
