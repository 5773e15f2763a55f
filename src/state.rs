//! Shared application state for request handlers.

use crate::config::VersionConfig;
use crate::version::VersionSource;

/// Shared application state, cheap to clone across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub version: VersionSource,
}

impl AppState {
    /// Creates state whose version lookup reads the process environment.
    pub fn new(config: &VersionConfig) -> Self {
        Self::with_version(VersionSource::from_env(config))
    }

    /// Creates state with an explicit version source.
    pub fn with_version(version: VersionSource) -> Self {
        Self { version }
    }
}
