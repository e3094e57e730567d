//! HTTP server module.
//!
//! Binds the listening socket, serves the router, and drains connections on
//! SIGTERM/SIGINT. A failed bind is fatal and surfaces as `ServerError::Bind`.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
