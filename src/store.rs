//! Session-scoped scenario store.
//!
//! Append/delete-only: scenarios are immutable once saved, ids increase
//! monotonically and are never reused (deletes leave the counter alone),
//! and reads hand out immutable references so a stored result is returned
//! exactly as it went in. The caller serializes saves within a session.

use crate::contract::SimulationResult;
use chrono::{DateTime, Utc};

/// A named, timestamped simulation result retained for comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedScenario {
    pub id: u64,
    pub name: String,
    pub result: SimulationResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ScenarioStore {
    scenarios: Vec<SavedScenario>,
    next_id: u64,
}

impl ScenarioStore {
    pub fn new() -> Self {
        ScenarioStore {
            scenarios: Vec::new(),
            next_id: 1,
        }
    }

    /// Save a completed result under `name`. Returns the assigned id.
    pub fn save(&mut self, name: impl Into<String>, result: SimulationResult) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.scenarios.push(SavedScenario {
            id,
            name: name.into(),
            result,
            created_at: Utc::now(),
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&SavedScenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Remove by id. Returns whether a scenario was deleted.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        self.scenarios.len() != before
    }

    /// Scenarios in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SavedScenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
