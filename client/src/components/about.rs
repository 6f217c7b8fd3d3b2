//! About section: mission copy, achievements, and company values.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::nav_bar::navigate_to;
use crate::components::reveal::use_reveal_on_scroll;
use crate::content::{ACHIEVEMENTS, CONTACT_SECTION, VALUES};
use crate::state::nav::NavState;

#[component]
pub fn About() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let root = NodeRef::<Section>::new();
    use_reveal_on_scroll(root);

    view! {
        <section id="about" class="section" node_ref=root aria-labelledby="about-heading">
            <header class="section__header reveal">
                <h2 id="about-heading">"About " <span class="gradient-text">"AstraX Fusion Tech"</span></h2>
            </header>
            <div class="about">
                <div class="about__copy reveal-left">
                    <p>
                        "AstraX Fusion Tech is a young security company helping startups and small "
                        "businesses defend what they build."
                    </p>
                    <p>
                        "We pair offensive security testing with practical training, so teams learn "
                        "to find and fix weaknesses themselves."
                    </p>
                    <ul class="about__achievements">
                        {ACHIEVEMENTS.iter().map(|a| view! { <li>"✓ " {*a}</li> }).collect_view()}
                    </ul>
                    <button class="btn btn--primary" on:click=move |_| navigate_to(nav, CONTACT_SECTION)>
                        "Work With Us"
                    </button>
                </div>
                <dl class="about__facts reveal-right">
                    <div><dt>"Our Promise"</dt><dd class="gradient-text">"Security First"</dd></div>
                    <div><dt>"Our Focus"</dt><dd class="gradient-text">"SMBs & Startups"</dd></div>
                    <div><dt>"Founded"</dt><dd class="gradient-text">"2026"</dd></div>
                </dl>
            </div>
            <div class="card-grid">
                {VALUES
                    .iter()
                    .map(|v| {
                        view! {
                            <article class="card reveal">
                                <span class="card__icon" aria-hidden="true">{v.icon}</span>
                                <h3 class="card__title">{v.title}</h3>
                                <p class="card__desc">{v.desc}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
