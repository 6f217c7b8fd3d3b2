//! Services section: cybersecurity and web development catalogs.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::reveal::use_reveal_on_scroll;
use crate::components::tab_switcher::TabSwitcher;
use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    let root = NodeRef::<Section>::new();
    use_reveal_on_scroll(root);

    view! {
        <section id="services" class="section" node_ref=root aria-labelledby="services-heading">
            <header class="section__header reveal">
                <h2 id="services-heading">"Our " <span class="gradient-text">"Services"</span></h2>
                <p>"Protect what you build, and build it right the first time."</p>
            </header>
            <div class="reveal">
                <TabSwitcher categories=SERVICES label="Service categories"/>
            </div>
        </section>
    }
}
