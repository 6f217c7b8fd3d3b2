//! `IntersectionObserver` bridge for reveal-on-scroll.
//!
//! Each call to [`attach`] observes every marked descendant of one section
//! root. The ratio bookkeeping lives in [`RevealTracker`]; this module only
//! moves classes and manages the JS handles.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
use crate::state::reveal::RevealTracker;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observation. Dropping it disconnects the observer.
pub struct RevealHandle {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

fn reveal(el: &Element) {
    if let Err(e) = el.class_list().add_1(REVEAL_VISIBLE_CLASS) {
        log::debug!("failed to mark element visible: {e:?}");
    }
}

fn marked_elements(root: &Element) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Observe the marked elements under `root`.
///
/// If the platform cannot create an observer, every element is revealed
/// immediately.
pub fn attach(root: &Element) -> RevealHandle {
    let targets = marked_elements(root);
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let elements = Rc::new(targets);

    let cb_tracker = Rc::clone(&tracker);
    let cb_elements = Rc::clone(&elements);
    let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = cb_elements.iter().position(|el| *el == target) else {
                continue;
            };
            if cb_tracker.borrow_mut().record(index, entry.intersection_ratio()) {
                reveal(&target);
                observer.unobserve(&target);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in elements.iter() {
                observer.observe(el);
            }
            log::debug!("observing {} reveal targets", elements.len());
            RevealHandle { observer: Some(observer), _callback: Some(callback) }
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
            for index in tracker.borrow_mut().reveal_all() {
                if let Some(el) = elements.get(index) {
                    reveal(el);
                }
            }
            RevealHandle { observer: None, _callback: None }
        }
    }
}
