//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! probe cache headers, the version variable, logging defaults and paths.
//! `AppConfig` is the root configuration struct; every section is optional
//! and falls back to the defaults below.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Probe Responses
// =============================================================================

/// Probe answers must never be served from an intermediary cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Version Lookup
// =============================================================================

/// Environment variable served by `GET /version`
pub const DEFAULT_VERSION_ENV_VAR: &str = "APP_VERSION";

/// Version reported when the variable is unset
pub const DEFAULT_VERSION: &str = "v1";

// =============================================================================
// HTTP Server
// =============================================================================

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Seconds to drain in-flight requests after SIGTERM/SIGINT
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info", env!("CARGO_CRATE_NAME"));

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Where `/version` reads its value from
    #[serde(default)]
    pub version: VersionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }
}

/// Version lookup settings
#[derive(Debug, Clone, Deserialize)]
pub struct VersionConfig {
    /// Environment variable holding the deployed version
    #[serde(default = "VersionConfig::default_env_var")]
    pub env_var: String,
    /// Value served when the variable is unset
    #[serde(default = "VersionConfig::default_version")]
    pub default: String,
    /// Serve the default when the variable is set but empty (default: false,
    /// an empty value is served verbatim)
    #[serde(default = "VersionConfig::default_empty_is_unset")]
    pub empty_is_unset: bool,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            env_var: Self::default_env_var(),
            default: Self::default_version(),
            empty_is_unset: Self::default_empty_is_unset(),
        }
    }
}

impl VersionConfig {
    fn default_env_var() -> String {
        DEFAULT_VERSION_ENV_VAR.to_string()
    }

    fn default_version() -> String {
        DEFAULT_VERSION.to_string()
    }

    fn default_empty_is_unset() -> bool {
        false
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load the file at `path` if given, otherwise the default path when it
    /// exists, otherwise the built-in defaults.
    ///
    /// Returns the config and the path it was read from, if any.
    pub fn resolve(path: Option<&str>) -> Result<(Self, Option<String>), ConfigError> {
        match path {
            Some(path) => Ok((Self::load(path)?, Some(path.to_string()))),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Ok((
                Self::load(DEFAULT_CONFIG_PATH)?,
                Some(DEFAULT_CONFIG_PATH.to_string()),
            )),
            None => Ok((Self::default(), None)),
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        let var = &self.version.env_var;
        if var.is_empty() || var.contains('=') || var.contains('\0') {
            return Err(ConfigError::Validation(format!(
                "version.env_var is not a valid environment variable name: {:?}",
                var
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.shutdown_timeout_seconds, DEFAULT_SHUTDOWN_TIMEOUT_SECS);
        assert_eq!(config.version.env_var, "APP_VERSION");
        assert_eq!(config.version.default, "v1");
        assert!(!config.version.empty_is_unset);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn default_log_filter_names_only_this_crate() {
        assert_eq!(DEFAULT_LOG_FILTER, "heartbeat=info");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9000

            [version]
            empty_is_unset = true
            "#,
        )
        .unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert!(config.version.empty_is_unset);
        assert_eq!(config.version.default, "v1");
    }

    #[test]
    fn json_logging_is_accepted() {
        let config = AppConfig::from_toml("[logging]\nformat = \"json\"\n").unwrap();
        assert!(config.logging.is_json());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn invalid_env_var_name_is_rejected() {
        for name in ["", "A=B"] {
            let toml = format!("[version]\nenv_var = {:?}\n", name);
            let err = AppConfig::from_toml(&toml).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{name:?}");
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("[http\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[version]\nenv_var = \"RELEASE\"\ndefault = \"dev\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.version.env_var, "RELEASE");
        assert_eq!(config.version.default, "dev");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = AppConfig::resolve(missing.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn shipped_default_config_is_valid() {
        let shipped = include_str!("../config/default.toml");
        let config = AppConfig::from_toml(shipped).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.version.env_var, DEFAULT_VERSION_ENV_VAR);
        assert!(!config.version.empty_is_unset);
    }
}
