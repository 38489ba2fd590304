//! # Activities Rust Backend
//!
//! Backend for a minimal extracurricular-activity signup service. It tracks a
//! fixed catalog of activities, each with a capacity and a roster of
//! participant email addresses, and exposes a REST API via Axum for listing
//! activities and signing participants up or unregistering them.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Shared domain types (activities and the catalog)
//! - [`db`]: Catalog storage, repository pattern, and the service layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
