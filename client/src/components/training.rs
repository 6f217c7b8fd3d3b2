//! Training programs section.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::nav_bar::navigate_to;
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::tab_switcher::TabSwitcher;
use crate::content::{CONTACT_SECTION, TRAINING};
use crate::state::nav::NavState;

#[component]
pub fn Training() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let root = NodeRef::<Section>::new();
    use_reveal_on_scroll(root);

    view! {
        <section id="training" class="section section--alt" node_ref=root aria-labelledby="training-heading">
            <header class="section__header reveal">
                <h2 id="training-heading">"Level Up Your " <span class="gradient-text">"Skills"</span></h2>
                <p>"Hands-on programs taught by practitioners, from first principles to job-ready."</p>
            </header>
            <div class="reveal">
                <TabSwitcher
                    categories=TRAINING
                    label="Training categories"
                    id_prefix="training-"
                    show_tagline=true
                />
            </div>
            <div class="section__cta reveal">
                <p>"Not sure which track fits your team? Tell us what you need."</p>
                <button class="btn btn--primary" on:click=move |_| navigate_to(nav, CONTACT_SECTION)>
                    "Enquire About Training"
                </button>
            </div>
        </section>
    }
}
