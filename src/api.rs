//! Public API surface for the activities backend.
//!
//! This file consolidates the domain types shared by the repository, service,
//! and HTTP layers. All types derive Serialize/Deserialize for JSON
//! serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single extracurricular activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Short description of the activity
    pub description: String,
    /// Human-readable meeting schedule
    pub schedule: String,
    /// Maximum roster size (informational; signup does not enforce it)
    pub max_participants: u32,
    /// Registered participant emails, in signup order, no duplicates
    pub participants: Vec<String>,
}

/// Full catalog of activities, keyed by activity name.
///
/// A `BTreeMap` keeps listings deterministic across processes.
pub type Catalog = BTreeMap<String, Activity>;

impl Activity {
    /// Create an activity with the given roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Whether the given email is currently on the roster.
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
