//! Reveal-on-scroll hook for section roots.

use leptos::html::Section;
use leptos::prelude::*;

/// Fade in the `.reveal*` descendants of `root` as they enter the viewport.
///
/// The observer lives as long as the calling component and is disconnected
/// when it unmounts.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_reveal_on_scroll(root: NodeRef<Section>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::reveal_observer::{RevealHandle, attach};

        let handle = StoredValue::new_local(None::<RevealHandle>);
        Effect::new(move || {
            let Some(el) = root.get() else {
                return;
            };
            handle.set_value(Some(attach(&el)));
        });
        on_cleanup(move || {
            drop(handle.try_update_value(Option::take));
        });
    }
}
