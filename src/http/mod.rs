//! HTTP server module.
//!
//! Serves plain HTTP; TLS is terminated by the host platform or a reverse
//! proxy in front of the probes.
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT with a configurable drain window

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
