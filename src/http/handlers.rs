//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{Catalog, HealthResponse, MessageResponse, ParticipantQuery};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the catalog is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalog_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalog: catalog_status,
    }))
}

// =============================================================================
// Activity Catalog
// =============================================================================

/// GET /activities
///
/// List the full catalog as a mapping from activity name to its details.
pub async fn list_activities(State(state): State<AppState>) -> HandlerResult<Catalog> {
    let catalog = db_services::list_activities(state.repository.as_ref()).await?;
    Ok(Json(catalog))
}

/// POST /activities/{name}/signup?email=<addr>
///
/// Sign a participant up for an activity. Responds 404 if the activity is
/// unknown and 400 if the email is already registered for it.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> HandlerResult<MessageResponse> {
    db_services::signup_participant(state.repository.as_ref(), &name, &query.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, name),
    }))
}

/// POST /activities/{name}/unregister?email=<addr>
///
/// Remove a participant from an activity. Responds 404 if the activity is
/// unknown and 400 if the email is not currently registered.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> HandlerResult<MessageResponse> {
    db_services::unregister_participant(state.repository.as_ref(), &name, &query.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, name),
    }))
}
