//! Startup errors.
//!
//! Request handlers are infallible; everything that can go wrong happens
//! before the listener accepts its first connection.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
