//! Deployed version endpoint.

use axum::extract::State;

use crate::state::AppState;

/// Reports the deployed version, re-read from the environment on every request.
pub async fn version(State(state): State<AppState>) -> String {
    state.version.current()
}
