//! Site footer: brand blurb, link columns, newsletter box, legal links.

use leptos::prelude::*;

use crate::components::nav_bar::navigate_to;
use crate::content::{FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use crate::state::nav::NavState;

#[component]
pub fn Footer() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <button class="navbar__brand" on:click=move |_| navigate_to(nav, "home")>
                        "AstraX " <span class="accent">"Fusion Tech"</span>
                    </button>
                    <p>
                        "Cybersecurity services, security training, and secure web development "
                        "for startups and growing businesses."
                    </p>
                    <ul class="social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|s| view! { <li><a href=s.href aria-label=s.label>{s.icon}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|(title, links)| {
                        view! {
                            <nav class="footer__column" aria-label=*title>
                                <h4>{*title}</h4>
                                <ul>
                                    {links.iter().map(|l| view! { <li><a href="#">{*l}</a></li> }).collect_view()}
                                </ul>
                            </nav>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer__newsletter">
                <div>
                    <h4>"Stay Ahead of Threats"</h4>
                    <p>"Threat alerts, training tips & industry updates."</p>
                </div>
                <div class="footer__newsletter-form">
                    <input type="email" placeholder="Enter your email" aria-label="Email for newsletter"/>
                    <button class="btn btn--primary" type="button">"Subscribe"</button>
                </div>
            </div>
            <div class="footer__bottom">
                <p>"© AstraX Fusion Tech. All rights reserved."</p>
                <ul class="footer__legal">
                    {LEGAL_LINKS.iter().map(|l| view! { <li><a href="#">{*l}</a></li> }).collect_view()}
                </ul>
            </div>
        </footer>
    }
}
