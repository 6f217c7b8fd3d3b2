//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules so route handlers stay focused on
//! protocol translation.

pub mod contact;
