//! DTOs for health check endpoint.

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Individual component health status.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    pub backend: Option<String>,
    pub message: Option<String>,
}
