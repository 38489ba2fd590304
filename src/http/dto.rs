//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The catalog types already derive Serialize/Deserialize and are served
//! as-is, so they are re-exported here rather than duplicated.

use serde::{Deserialize, Serialize};

// Re-export existing types that are already serializable
pub use crate::api::{Activity, Catalog};

/// Query parameters carrying the participant email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantQuery {
    /// Participant email address (format assumed pre-validated)
    pub email: String,
}

/// Confirmation message returned by signup and unregister.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation of the operation
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Catalog backend status
    pub catalog: String,
}
