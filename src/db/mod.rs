//! Catalog storage module.
//!
//! This module provides abstractions for catalog operations via the
//! Repository pattern, keeping the service and HTTP layers independent of the
//! backing store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **Use the service layer:**
//! ```no_run
//! use activities_rust::db::{services, LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::seeded();
//!
//!     let catalog = services::list_activities(&repo).await?;
//!     println!("{} activities", catalog.len());
//!     Ok(())
//! }
//! ```

pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;

// ==================== Repository Pattern Exports ====================

pub use repositories::LocalRepository;
pub use repository::{CatalogRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn CatalogRepository>> = OnceLock::new();

/// Initialize the global repository singleton with the seed catalog.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo: Arc<dyn CatalogRepository> = Arc::new(LocalRepository::seeded());
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn CatalogRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
