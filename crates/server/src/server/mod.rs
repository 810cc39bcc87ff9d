//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with the set/get routes for each trust level.
//! - Inject shared application state (`AppState`) into handlers.
//! - Map cookie-layer errors to HTTP responses.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
