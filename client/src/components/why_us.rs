//! Why-us section with the consultation call to action.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::nav_bar::navigate_to;
use crate::components::reveal::use_reveal_on_scroll;
use crate::content::{CONTACT_SECTION, REASONS};
use crate::state::nav::NavState;

#[component]
pub fn WhyUs() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let root = NodeRef::<Section>::new();
    use_reveal_on_scroll(root);

    view! {
        <section id="why-us" class="section section--alt" node_ref=root aria-labelledby="why-us-heading">
            <header class="section__header reveal">
                <h2 id="why-us-heading">"Why Choose " <span class="gradient-text">"Us?"</span></h2>
                <p>"Security partners who explain what they find and stay until it is fixed."</p>
            </header>
            <div class="card-grid">
                {REASONS
                    .iter()
                    .map(|r| {
                        view! {
                            <article class="card reveal">
                                <span class="card__icon" aria-hidden="true">{r.icon}</span>
                                <h3 class="card__title">{r.title}</h3>
                                <p class="card__desc">{r.desc}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="banner reveal">
                <h3>"Ready to secure your business?"</h3>
                <p>"Book a free consultation and get a tailored security roadmap."</p>
                <button class="btn btn--light" on:click=move |_| navigate_to(nav, CONTACT_SECTION)>
                    "Get Free Consultation"
                </button>
            </div>
        </section>
    }
}
