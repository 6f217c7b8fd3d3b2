//! The single-page site.

use leptos::prelude::*;

use crate::components::{
    about::About, contact_form::Contact, footer::Footer, hero::Hero, loading_gate::LoadingGateOverlay,
    nav_bar::NavBar, services::Services, training::Training, why_us::WhyUs,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <LoadingGateOverlay/>
        <a href="#main-content" class="skip-link">"Skip to main content"</a>
        <NavBar/>
        <main id="main-content">
            <Hero/>
            <Services/>
            <Training/>
            <About/>
            <WhyUs/>
            <Contact/>
        </main>
        <Footer/>
    }
}
