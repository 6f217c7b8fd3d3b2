//! Client-side state models.
//!
//! DESIGN
//! ======
//! One module per interactive widget (`nav`, `tabs`, `contact`, etc.). Each
//! model is plain data with methods and no DOM access, so components stay
//! thin and the behavior is covered by native unit tests.

pub mod contact;
pub mod hero;
pub mod loading;
pub mod nav;
pub mod reveal;
pub mod tabs;
pub mod theme;
