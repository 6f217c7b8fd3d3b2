//! Page sections and reusable widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the single-page site. Shared state (nav, theme) comes
//! from Leptos context; everything else is owned locally.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod loading_gate;
pub mod nav_bar;
pub mod reveal;
pub mod services;
pub mod tab_switcher;
pub mod training;
pub mod why_us;
