//! Contact section: channels, social links, and the message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form state is local to the component. Submission runs on a spawned task;
//! an `alive` flag cleared on unmount keeps a late completion from writing to
//! a disposed signal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::html::Section;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::reveal::use_reveal_on_scroll;
use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::net::contact::ContactTransport;
use crate::state::contact::{ContactFormState, Field};

#[component]
pub fn Contact() -> impl IntoView {
    let root = NodeRef::<Section>::new();
    use_reveal_on_scroll(root);

    view! {
        <section id="contact" class="section" node_ref=root aria-labelledby="contact-heading">
            <header class="section__header reveal">
                <h2 id="contact-heading">"Contact " <span class="gradient-text">"Us"</span></h2>
                <p>"Tell us about your project. We usually reply within one business day."</p>
            </header>
            <div class="contact">
                <aside class="contact__info reveal-left">
                    <ul class="contact__channels">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|c| {
                                view! {
                                    <li>
                                        <a href=c.href class="contact__channel">
                                            <span aria-hidden="true">{c.icon}</span>
                                            <span class="contact__label">{c.label}</span>
                                            <span class="contact__value">{c.value}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="contact__follow">"Follow Us"</p>
                    <ul class="social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|s| {
                                view! {
                                    <li>
                                        <a href=s.href aria-label=s.label>{s.icon}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="contact__note">
                        <strong>"Secure & Confidential"</strong>
                        <p>"All communications are encrypted."</p>
                    </div>
                </aside>
                <div class="contact__form reveal-right">
                    <ContactForm/>
                </div>
            </div>
        </section>
    }
}

fn field_control(
    form: RwSignal<ContactFormState>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.field_error(field));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let value = move || form.with(|f| f.fields.get(field).to_owned());
    let invalid = move || if error().is_some() { "true" } else { "false" };
    let described_by = move || error().map(|_| field.error_id());

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.dom_id()
                name=field.as_str()
                rows="5"
                placeholder=placeholder
                prop:value=value
                aria-invalid=invalid
                aria-describedby=described_by
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.dom_id()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                prop:value=value
                aria-invalid=invalid
                aria-describedby=described_by
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field" class:invalid=move || error().is_some()>
            <label for=field.dom_id()>{label}</label>
            {control}
            {move || {
                error().map(|msg| view! { <p id=field.error_id() class="form-field__error" role="alert">{msg}</p> })
            }}
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = Arc::clone(&alive);
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let result = ContactTransport::default().send(&payload).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            form.try_update(|f| f.finish_submit(result));
        });
    };

    let on_reset = move |_| form.update(ContactFormState::reset);

    view! {
        <Show
            when=move || form.with(|f| f.submitted)
            fallback=move || {
                view! {
                    <form class="form" novalidate=true on:submit=on_submit.clone()>
                        <div class="form__row">
                            {field_control(form, Field::Name, "Full Name *", "text", "John Doe")}
                            {field_control(form, Field::Email, "Email Address *", "email", "john@example.com")}
                        </div>
                        {field_control(form, Field::Subject, "Subject", "text", "Penetration testing enquiry")}
                        {field_control(form, Field::Message, "Message *", "text", "Tell us about your project...")}
                        {move || {
                            form.with(|f| f.send_error.clone())
                                .map(|msg| view! { <p class="form__error" role="alert">{msg}</p> })
                        }}
                        <button
                            type="submit"
                            class="btn btn--primary btn--block"
                            disabled=move || form.with(|f| f.loading)
                            aria-busy=move || if form.with(|f| f.loading) { "true" } else { "false" }
                        >
                            {move || if form.with(|f| f.loading) { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                }
            }
        >
            <div class="form__success" role="status">
                <span class="form__success-icon" aria-hidden="true">"✓"</span>
                <h3>"Message Sent!"</h3>
                <p>"Thanks for reaching out. We'll get back to you within 24 hours."</p>
                <button class="btn btn--outline" on:click=on_reset>
                    "Send Another Message"
                </button>
            </div>
        </Show>
    }
}
