//! Viewport/DOM adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types (`nav`, `tabs`, `loading`) only talk to the page through the
//! [`Viewport`] trait, so index math and transitions can be unit-tested with
//! an in-memory fake. [`BrowserViewport`] is the real implementation; outside
//! the `hydrate` build every query returns a neutral default.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Minimal view of the document needed by the interactive widgets.
pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Inner width of the viewport in CSS pixels.
    fn width(&self) -> f64;

    /// Top offset of the element with `id`, or `None` if it is not mounted.
    fn section_top(&self, id: &str) -> Option<f64>;

    /// Smooth-scroll the element with `id` into view. Missing targets are ignored.
    fn scroll_to_section(&self, id: &str);

    /// Move keyboard focus to the element with `element_id`.
    fn focus(&self, element_id: &str);

    /// Evaluate a CSS media query.
    fn matches_media(&self, query: &str) -> bool;
}

/// [`Viewport`] backed by `web_sys::window()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn width(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            match web_sys::window().map(|w| w.inner_width()) {
                Some(Ok(width)) => width.as_f64().unwrap_or(0.0),
                _ => 0.0,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn section_top(&self, id: &str) -> Option<f64> {
        #[cfg(feature = "hydrate")]
        {
            let el = web_sys::window()?.document()?.get_element_by_id(id)?;
            let el = el.dyn_ref::<web_sys::HtmlElement>()?;
            Some(f64::from(el.offset_top()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn scroll_to_section(&self, id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            else {
                log::debug!("scroll target #{id} not found");
                return;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn focus(&self, element_id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(element_id))
            else {
                log::debug!("focus target #{element_id} not found");
                return;
            };
            if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
                if let Err(e) = el.focus() {
                    log::debug!("focus #{element_id} failed: {e:?}");
                }
            }
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn matches_media(&self, query: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            match web_sys::window().map(|w| w.match_media(query)) {
                Some(Ok(Some(mq))) => mq.matches(),
                _ => false,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}
