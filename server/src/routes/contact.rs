//! `POST /api/contact`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use astrax_client::net::contact::ContactResponse;
use astrax_client::state::contact::ContactFields;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

/// Validate and deliver a contact message.
///
/// 200 on success, 422 with per-field errors, 502 if the sink fails. A body
/// that is not a JSON contact message gets the extractor's status with a
/// JSON error body.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactFields>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let fields = match payload {
        Ok(Json(fields)) => fields,
        Err(rejection) => return rejection_response(&rejection),
    };
    match contact::submit(state.contact.as_ref(), fields).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::accepted())),
        Err(e) => contact_error_response(e),
    }
}

pub(crate) fn rejection_response(rejection: &JsonRejection) -> (StatusCode, Json<ContactResponse>) {
    tracing::debug!(error = %rejection.body_text(), "contact body rejected");
    (rejection.status(), Json(ContactResponse::failed("request body must be a JSON contact message")))
}

pub(crate) fn contact_error_response(err: ContactError) -> (StatusCode, Json<ContactResponse>) {
    match err {
        ContactError::Invalid(errors) => {
            let errors = errors.into_iter().map(|(field, msg)| (field, msg.to_owned())).collect();
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ContactResponse::invalid(errors)))
        }
        ContactError::Delivery(msg) => {
            tracing::warn!(error = %msg, "contact delivery failed");
            (StatusCode::BAD_GATEWAY, Json(ContactResponse::failed("message could not be delivered")))
        }
    }
}
