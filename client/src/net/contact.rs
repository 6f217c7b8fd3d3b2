//! Contact message delivery.
//!
//! Client-side (hydrate): either a simulated delay or a JSON `POST` via
//! `gloo-net`, selected by [`ContactTransport`]. Server-side (SSR): the
//! simulated path succeeds immediately and the HTTP path reports that it is
//! browser-only.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings. The form shows them inline and
//! keeps the user's input so they can retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{CONTACT_ENDPOINT, CONTACT_SIMULATED_LATENCY_MS};
use crate::state::contact::{ContactFields, Field};

/// JSON body returned by `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<Field, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, ..Self::default() }
    }

    #[must_use]
    pub fn invalid(errors: BTreeMap<Field, String>) -> Self {
        Self { ok: false, errors, error: None }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { ok: false, errors: BTreeMap::new(), error: Some(error.into()) }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn send_failed_message(status: u16, body: Option<&ContactResponse>) -> String {
    let Some(body) = body else {
        return format!("send failed: {status}");
    };
    if let Some(error) = &body.error {
        return error.clone();
    }
    if body.errors.is_empty() {
        return format!("send failed: {status}");
    }
    body.errors.values().cloned().collect::<Vec<_>>().join(", ")
}

/// How a validated message leaves the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactTransport {
    /// Wait, then report success. Nothing is sent anywhere.
    Simulated { latency_ms: u32 },
    /// `POST` the fields as JSON.
    Http { endpoint: String },
}

impl Default for ContactTransport {
    fn default() -> Self {
        if cfg!(feature = "contact-endpoint") {
            Self::Http { endpoint: CONTACT_ENDPOINT.to_owned() }
        } else {
            Self::Simulated { latency_ms: CONTACT_SIMULATED_LATENCY_MS }
        }
    }
}

impl ContactTransport {
    /// Deliver `fields`.
    ///
    /// # Errors
    ///
    /// Returns a display string if the request fails or the server rejects
    /// the message.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    pub async fn send(self, fields: &ContactFields) -> Result<(), String> {
        match self {
            Self::Simulated { latency_ms } => {
                #[cfg(feature = "hydrate")]
                gloo_timers::future::TimeoutFuture::new(latency_ms).await;
                Ok(())
            }
            Self::Http { endpoint } => post_json(&endpoint, fields).await,
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn post_json(endpoint: &str, fields: &ContactFields) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(fields)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = match resp.json::<ContactResponse>().await {
            Ok(body) => Some(body),
            Err(e) => {
                log::debug!("contact error body unreadable: {e}");
                None
            }
        };
        log::warn!("contact endpoint rejected message: {status}");
        Err(send_failed_message(status, body.as_ref()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
