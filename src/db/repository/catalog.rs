//! Core catalog repository trait for activity roster operations.
//!
//! This trait defines the fundamental storage operations for the activity
//! catalog: listing activities, looking one up, and mutating a roster.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Activity, Catalog};

/// Repository trait for activity catalog operations.
///
/// The catalog is a fixed set of activities created at startup; only the
/// participant rosters are mutated at runtime. Precondition checks and the
/// mutation they guard must be applied atomically by implementations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if the backend is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Return a snapshot of the full catalog, keyed by activity name.
    async fn list_activities(&self) -> RepositoryResult<Catalog>;

    /// Retrieve a single activity by name.
    ///
    /// # Returns
    /// * `Ok(Activity)` - The activity with its current roster
    /// * `Err(RepositoryError::NotFound)` - If no activity has that name
    async fn get_activity(&self, name: &str) -> RepositoryResult<Activity>;

    /// Append an email to an activity's roster.
    ///
    /// Preconditions, checked in order:
    /// 1. The activity exists, else `RepositoryError::NotFound`.
    /// 2. The email is not already registered, else `RepositoryError::Conflict`.
    async fn add_participant(&self, name: &str, email: &str) -> RepositoryResult<()>;

    /// Remove an email from an activity's roster.
    ///
    /// Preconditions, checked in order:
    /// 1. The activity exists, else `RepositoryError::NotFound`.
    /// 2. The email is currently registered, else `RepositoryError::Conflict`.
    async fn remove_participant(&self, name: &str, email: &str) -> RepositoryResult<()>;
}
