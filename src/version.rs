//! Version lookup for `GET /version`.
//!
//! The lookup is injected rather than read from ambient process state inside
//! the handler, so the router can be exercised with any environment. The
//! value is re-resolved on every call and never cached.

use std::fmt;
use std::sync::Arc;

use crate::config::VersionConfig;

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Resolves the deployed version from a named variable with a fallback.
#[derive(Clone)]
pub struct VersionSource {
    env_var: Arc<str>,
    default: Arc<str>,
    empty_is_unset: bool,
    lookup: Arc<Lookup>,
}

impl VersionSource {
    /// Reads the process environment on every call.
    ///
    /// A value that is not valid Unicode counts as unset.
    pub fn from_env(config: &VersionConfig) -> Self {
        Self::with_lookup(config, |name| std::env::var(name).ok())
    }

    /// Uses `lookup` in place of the process environment.
    pub fn with_lookup<F>(config: &VersionConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            env_var: Arc::from(config.env_var.as_str()),
            default: Arc::from(config.default.as_str()),
            empty_is_unset: config.empty_is_unset,
            lookup: Arc::new(lookup),
        }
    }

    /// Name of the variable being read.
    pub fn variable(&self) -> &str {
        &self.env_var
    }

    /// The version to report right now.
    pub fn current(&self) -> String {
        match (self.lookup)(&self.env_var) {
            Some(value) if value.is_empty() && self.empty_is_unset => self.default.to_string(),
            Some(value) => value,
            None => self.default.to_string(),
        }
    }
}

impl fmt::Debug for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionSource")
            .field("env_var", &self.env_var)
            .field("default", &self.default)
            .field("empty_is_unset", &self.empty_is_unset)
            .finish_non_exhaustive()
    }
}
