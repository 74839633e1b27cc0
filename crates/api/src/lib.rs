//! MCQuiz web server library.
//!
//! Exposes the building blocks (config, state, error handling, contexts,
//! views, routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
