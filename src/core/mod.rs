//! Core types shared by every part of bbdocgen.
//!
//! At the moment this is the error layer: [`DocgenError`] for typed failures,
//! [`ErrorContext`] for terminal display, and [`user_friendly_error`] to turn an
//! [`anyhow::Error`] into something a user can act on.

pub mod error;

pub use error::{DocgenError, ErrorContext, user_friendly_error};
