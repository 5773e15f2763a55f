//! Heartbeat: liveness, health and version endpoints.
//!
//! `GET /` and `GET /health` answer `OK`; `GET /version` reports the value of
//! `APP_VERSION` (default `v1`). The library exposes the router so it can be
//! served by the bundled binary or mounted and tested in-process.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod version;

pub use config::AppConfig;
pub use error::StartupError;
pub use routes::create_router;
pub use state::AppState;
pub use version::VersionSource;
