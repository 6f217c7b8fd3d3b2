//! Browser-facing helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so the state models stay testable natively.

#[cfg(feature = "hydrate")]
pub mod reveal_observer;
pub mod theme;
pub mod viewport;
