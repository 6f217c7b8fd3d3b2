//! Accessible tab list over a static category catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the services and training sections. Each instance owns its own
//! [`TabSelection`]; instances never talk to each other. Keyboard handling
//! follows the WAI-ARIA tabs pattern with automatic activation.

use leptos::prelude::*;

use crate::content::TabCategory;
use crate::state::tabs::{TabKey, TabSelection, panel_dom_id, tab_dom_id};
use crate::util::viewport::BrowserViewport;

#[component]
pub fn TabSwitcher(
    categories: &'static [TabCategory],
    /// Accessible name of the tab list.
    label: &'static str,
    /// Prepended to tab/panel ids so several switchers can share a page.
    #[prop(optional)]
    id_prefix: &'static str,
    #[prop(optional)] show_tagline: bool,
) -> impl IntoView {
    let selection = RwSignal::new(TabSelection::new(categories.len()));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if TabKey::from_key(&ev.key()).is_none() {
            return;
        }
        ev.prevent_default();
        let tab_id = |i: usize| categories.get(i).map(|c| tab_dom_id(id_prefix, c.id));
        selection.update(|s| {
            s.on_key_focus(&ev.key(), &BrowserViewport, tab_id);
        });
    };

    let tabs = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <button
                    id=tab_dom_id(id_prefix, category.id)
                    class="tabs__tab"
                    class:active=move || selection.get().is_active(i)
                    role="tab"
                    aria-selected=move || if selection.get().is_active(i) { "true" } else { "false" }
                    aria-controls=panel_dom_id(id_prefix, category.id)
                    tabindex=move || selection.get().tab_index(i)
                    on:click=move |_| {
                        selection.update(|s| {
                            s.select(i);
                        });
                    }
                >
                    <span class="tabs__icon" aria-hidden="true">{category.icon}</span>
                    {category.label}
                </button>
            }
        })
        .collect_view();

    // Only the active category is mounted; switching replaces it.
    let panel = move || {
        let category = categories.get(selection.get().index())?;
        let tagline = category.tagline.filter(|_| show_tagline);
        Some(view! {
            <div
                id=panel_dom_id(id_prefix, category.id)
                class="tabs__panel"
                role="tabpanel"
                aria-labelledby=tab_dom_id(id_prefix, category.id)
                tabindex="0"
                style=format!("--accent: {}", category.accent)
            >
                {tagline.map(|text| view! { <p class="tabs__tagline">{text}</p> })}
                <div class="card-grid">
                    {category
                        .items
                        .iter()
                        .map(|item| {
                            view! {
                                <article class="card">
                                    <span class="card__icon" aria-hidden="true">{item.icon}</span>
                                    <h3 class="card__title">{item.title}</h3>
                                    <p class="card__desc">{item.desc}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        })
    };

    view! {
        <div class="tabs">
            <div class="tabs__list" role="tablist" aria-label=label on:keydown=on_keydown>
                {tabs}
            </div>
            {panel}
        </div>
    }
}
