//! Liveness and health probes for container orchestration.
//!
//! Both return 200 `OK` whenever the process can answer HTTP. Used by EC2/ELB
//! target groups, Kubernetes, ECS and systemd watchdogs.

/// Root liveness handler.
pub async fn root() -> &'static str {
    "OK"
}

/// Health check handler.
///
/// This is a liveness probe: it has no dependencies to check, so it never fails.
pub async fn health() -> &'static str {
    "OK"
}
