//! Greeter: static greeting and health probe service for the DevOps workshop.
//!
//! Every workshop session shares the same responder; a `Session` preset picks
//! the greeting text and the port used when `PORT` is unset.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, Session};
pub use routes::create_router;
pub use state::AppState;
