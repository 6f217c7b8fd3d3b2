//! Hero banner with parallax background and call-to-action buttons.

use leptos::ev;
use leptos::prelude::*;

use crate::components::nav_bar::navigate_to;
use crate::consts::PREFERS_REDUCED_MOTION_QUERY;
use crate::content::{CONTACT_SECTION, HERO_TAGS, SERVICES_SECTION};
use crate::state::hero::{parallax_enabled, parallax_offset};
use crate::state::nav::NavState;
use crate::util::viewport::{BrowserViewport, Viewport};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let offset = RwSignal::new(0.0_f64);

    // Parallax is decided once per mount; resizing does not re-enable it.
    let enabled = StoredValue::new(false);
    Effect::new(move || {
        let vp = BrowserViewport;
        enabled.set_value(parallax_enabled(vp.width(), vp.matches_media(PREFERS_REDUCED_MOTION_QUERY)));
    });

    let scroll = window_event_listener(ev::scroll, move |_| {
        if enabled.get_value() {
            offset.set(parallax_offset(BrowserViewport.scroll_y()));
        }
    });
    on_cleanup(move || scroll.remove());

    view! {
        <section id="home" class="hero" aria-label="Hero section">
            <div
                class="hero__backdrop"
                aria-hidden="true"
                style:transform=move || format!("translateY({}px)", offset.get())
            ></div>
            <div class="hero__content">
                <p class="hero__eyebrow">"Cybersecurity · Training · Development"</p>
                <h1 class="hero__title">
                    <span>"Securing Digital "</span>
                    <span class="gradient-text">"Infrastructure."</span>
                    <span>" Empowering Future "</span>
                    <span class="gradient-text">"Tech Leaders."</span>
                </h1>
                <p class="hero__lead">
                    "We offer " <strong>"cybersecurity solutions"</strong> ", hands-on "
                    <strong>"security training programs"</strong> ", and modern "
                    <strong>"web development"</strong> ", all under one roof."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| navigate_to(nav, SERVICES_SECTION)>
                        "Explore Services"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| navigate_to(nav, CONTACT_SECTION)>
                        "Contact Us"
                    </button>
                </div>
                <ul class="hero__tags">
                    {HERO_TAGS.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
                </ul>
            </div>
            <button
                class="hero__scroll"
                aria-label="Scroll down to services"
                on:click=move |_| navigate_to(nav, SERVICES_SECTION)
            >
                <span>"Scroll"</span>
            </button>
        </section>
    }
}
