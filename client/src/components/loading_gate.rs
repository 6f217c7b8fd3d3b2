//! Startup splash overlay.
//!
//! Drives [`LoadingGate`] with one `Timeout` per scheduled step. The page is
//! rendered underneath from the start; the overlay only covers it.

use leptos::prelude::*;

use crate::state::loading::LoadingGate;

#[component]
pub fn LoadingGateOverlay() -> impl IntoView {
    let gate = RwSignal::new(LoadingGate::new(false));

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::consts::PREFERS_REDUCED_MOTION_QUERY;
        use crate::util::viewport::{BrowserViewport, Viewport};

        let timers = StoredValue::new_local(Vec::<Timeout>::new());
        Effect::new(move || {
            let fresh = LoadingGate::new(BrowserViewport.matches_media(PREFERS_REDUCED_MOTION_QUERY));
            gate.set(fresh);
            let handles = fresh
                .schedule()
                .iter()
                .map(|step| {
                    let phase = step.phase;
                    Timeout::new(step.delay_ms, move || {
                        if gate.try_update(|g| g.advance(phase)) == Some(false) {
                            log::debug!("loading gate ignored transition to {phase:?}");
                        }
                    })
                })
                .collect();
            timers.set_value(handles);
        });
        // Dropping a `Timeout` cancels it.
        on_cleanup(move || {
            drop(timers.try_update_value(std::mem::take));
        });
    }

    view! {
        <Show when=move || gate.with(LoadingGate::is_mounted)>
            <div
                class="loading-gate"
                class:fading=move || gate.with(LoadingGate::is_fading)
                role="progressbar"
                aria-label="Loading AstraX Fusion Tech"
                aria-busy="true"
            >
                <div class="loading-gate__logo" aria-hidden="true">"◆"</div>
                <p class="loading-gate__name">"AstraX " <span class="accent">"Fusion Tech"</span></p>
                <div class="loading-gate__bar" aria-hidden="true"><span></span></div>
            </div>
        </Show>
    }
}
