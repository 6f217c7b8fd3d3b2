//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! The site is one route. The page only lays out sections; behavior lives in
//! `components` and `state`.

pub mod home;
