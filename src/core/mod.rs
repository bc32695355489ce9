//! Core types shared by every pipeline stage.
//!
//! Currently this is the fatal error taxonomy ([`HeroiconsError`]) and the
//! user-facing [`ErrorContext`] produced by [`user_friendly_error`].

pub mod error;

pub use error::{ErrorContext, HeroiconsError, user_friendly_error};
