//! Startup splash lifecycle.
//!
//! DESIGN
//! ======
//! The splash is an explicit state machine instead of chained timeouts: the
//! component schedules one timer per step of [`LoadingGate::schedule`], and
//! each timer calls the guarded [`LoadingGate::advance`]. A late or duplicate
//! timer cannot move the gate backwards or skip a phase.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use crate::consts::{LOADING_FADE_DELAY_MS, LOADING_REDUCED_MOTION_MS, LOADING_UNMOUNT_DELAY_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadingPhase {
    #[default]
    Visible,
    FadingOut,
    /// Terminal: the splash is gone for the rest of the page load.
    Unmounted,
}

/// A scheduled transition, `delay_ms` after mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateStep {
    pub delay_ms: u32,
    pub phase: LoadingPhase,
}

const ANIMATED: &[GateStep] = &[
    GateStep { delay_ms: LOADING_FADE_DELAY_MS, phase: LoadingPhase::FadingOut },
    GateStep { delay_ms: LOADING_UNMOUNT_DELAY_MS, phase: LoadingPhase::Unmounted },
];

const REDUCED_MOTION: &[GateStep] =
    &[GateStep { delay_ms: LOADING_REDUCED_MOTION_MS, phase: LoadingPhase::Unmounted }];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingGate {
    phase: LoadingPhase,
    reduced_motion: bool,
}

impl LoadingGate {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self { phase: LoadingPhase::Visible, reduced_motion }
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Every transition this gate will take, with delays measured from mount.
    #[must_use]
    pub fn schedule(&self) -> &'static [GateStep] {
        if self.reduced_motion { REDUCED_MOTION } else { ANIMATED }
    }

    /// The next pending step, if the gate is not yet unmounted.
    #[must_use]
    pub fn next_transition(&self) -> Option<GateStep> {
        self.schedule().iter().copied().find(|step| step.phase > self.phase)
    }

    /// Move to `to` if it is the legal successor of the current phase.
    pub fn advance(&mut self, to: LoadingPhase) -> bool {
        let allowed = self.next_transition().is_some_and(|step| step.phase == to);
        if allowed {
            self.phase = to;
        }
        allowed
    }

    /// Still part of the render tree.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != LoadingPhase::Unmounted
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.phase == LoadingPhase::FadingOut
    }
}
