//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup; the only member is the contact sink.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::services::contact::{ContactSink, LogSink};

#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<dyn ContactSink>,
}

impl AppState {
    #[must_use]
    pub fn new(contact: Arc<dyn ContactSink>) -> Self {
        Self { contact }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(LogSink))
    }
}
