//! High-level catalog service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`CatalogRepository`]. The functions here carry the
//! cross-cutting concerns (logging, precondition outcomes) that should be
//! consistent regardless of the storage backend.

use log::{info, warn};

use super::repository::{CatalogRepository, RepositoryResult};
use crate::api::{Activity, Catalog};

// ==================== Health & Connection ====================

/// Check if the catalog backend is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Catalog Operations ====================

/// Return a snapshot of the full activity catalog.
pub async fn list_activities<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<Catalog> {
    repo.list_activities().await
}

/// Retrieve a single activity by name.
pub async fn get_activity<R: CatalogRepository + ?Sized>(
    repo: &R,
    name: &str,
) -> RepositoryResult<Activity> {
    repo.get_activity(name).await
}

/// Sign a participant up for an activity.
///
/// Preconditions are enforced by the repository in order: the activity must
/// exist (`NotFound`) and the email must not already be registered
/// (`Conflict`). On success the email is appended to the roster.
pub async fn signup_participant<R: CatalogRepository + ?Sized>(
    repo: &R,
    activity: &str,
    email: &str,
) -> RepositoryResult<()> {
    match repo.add_participant(activity, email).await {
        Ok(()) => {
            info!("Signed up {} for '{}'", email, activity);
            Ok(())
        }
        Err(e) => {
            warn!("Signup rejected for {} on '{}': {}", email, activity, e);
            Err(e)
        }
    }
}

/// Remove a participant from an activity.
///
/// Preconditions are enforced by the repository in order: the activity must
/// exist (`NotFound`) and the email must currently be registered
/// (`Conflict`). On success the email is removed from the roster.
pub async fn unregister_participant<R: CatalogRepository + ?Sized>(
    repo: &R,
    activity: &str,
    email: &str,
) -> RepositoryResult<()> {
    match repo.remove_participant(activity, email).await {
        Ok(()) => {
            info!("Unregistered {} from '{}'", email, activity);
            Ok(())
        }
        Err(e) => {
            warn!("Unregister rejected for {} on '{}': {}", email, activity, e);
            Err(e)
        }
    }
}
