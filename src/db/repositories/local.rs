//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the catalog repository
//! trait suitable for serving the fixed activity catalog and for unit
//! testing. All data is stored in memory behind an `RwLock`, providing fast,
//! deterministic, and isolated execution.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::api::{Activity, Catalog};
use crate::db::repository::{CatalogRepository, RepositoryError, RepositoryResult};
use crate::db::seed;

/// In-memory local repository.
///
/// Holds the activity catalog in memory. Cloning is cheap and shares the
/// underlying state, so a single catalog can back every request handler.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    activities: Catalog,

    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                activities: Catalog::new(),
                is_healthy: true,
            })),
        }
    }

    /// Create a local repository pre-populated with the seed catalog.
    pub fn seeded() -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write().unwrap();
            data.activities = seed::seed_catalog();
        }
        repo
    }

    /// Insert an activity directly.
    ///
    /// This is a helper method for setting up test data; the running service
    /// never adds catalog entries.
    pub fn insert_activity_impl(&self, name: impl Into<String>, activity: Activity) {
        let mut data = self.data.write().unwrap();
        data.activities.insert(name.into(), activity);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all activities from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.activities.clear();
    }

    /// Number of activities currently in the catalog.
    pub fn activity_count(&self) -> usize {
        self.data.read().unwrap().activities.len()
    }

    /// Whether an activity with the given name exists.
    pub fn has_activity(&self, name: &str) -> bool {
        self.data.read().unwrap().activities.contains_key(name)
    }

    // Must be called with the lock already held; taking the lock here again
    // would deadlock the write paths.
    fn ensure_healthy(data: &LocalData) -> RepositoryResult<()> {
        if data.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::ConnectionError(
                "Local repository marked unhealthy".to_string(),
            ))
        }
    }

    fn not_found(name: &str) -> RepositoryError {
        RepositoryError::NotFound(format!("Activity '{}' not found", name))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn list_activities(&self) -> RepositoryResult<Catalog> {
        let data = self.data.read().unwrap();
        Self::ensure_healthy(&data)?;
        Ok(data.activities.clone())
    }

    async fn get_activity(&self, name: &str) -> RepositoryResult<Activity> {
        let data = self.data.read().unwrap();
        Self::ensure_healthy(&data)?;
        data.activities
            .get(name)
            .cloned()
            .ok_or_else(|| Self::not_found(name))
    }

    async fn add_participant(&self, name: &str, email: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        Self::ensure_healthy(&data)?;
        let activity = data
            .activities
            .get_mut(name)
            .ok_or_else(|| Self::not_found(name))?;
        if activity.is_registered(email) {
            return Err(RepositoryError::Conflict(format!(
                "{} is already signed up for '{}'",
                email, name
            )));
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    async fn remove_participant(&self, name: &str, email: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        Self::ensure_healthy(&data)?;
        let activity = data
            .activities
            .get_mut(name)
            .ok_or_else(|| Self::not_found(name))?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| {
                RepositoryError::Conflict(format!("{} is not signed up for '{}'", email, name))
            })?;
        activity.participants.remove(position);
        Ok(())
    }
}
