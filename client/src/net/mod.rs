//! Network access.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` delivers contact-form messages and defines the response schema
//! shared with the server's `/api/contact` handler.

pub mod contact;
