//! Domain rules for the quiz application.
//!
//! This crate has no I/O: it holds the id types, the shared error type, and
//! the pure functions (slugs, validation, scoring, shuffling) used by the
//! repository and HTTP layers.

pub mod error;
pub mod question;
pub mod quiz;
pub mod scoring;
pub mod types;
