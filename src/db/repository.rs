// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed access to the workouts slot.

use crate::db::storage::{Storage, StorageError};
use crate::models::Workout;
use std::collections::HashSet;

/// Reads and writes the ordered workout collection as one JSON array.
#[derive(Debug, Clone)]
pub struct WorkoutRepository<S> {
    storage: S,
    key: String,
}

impl<S: Storage> WorkoutRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load the stored collection, failing on any unreadable or invalid data.
    ///
    /// An absent slot is an empty collection. Every record must satisfy the
    /// workout invariants and ids must be unique, otherwise the whole slot is
    /// reported as corrupt.
    pub fn try_load(&self) -> Result<Vec<Workout>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        // A literal `null` is what an emptied browser slot can hold
        let workouts: Option<Vec<Workout>> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: self.key.clone(),
                reason: e.to_string(),
            })?;
        let workouts = workouts.unwrap_or_default();

        if let Some(dup) = first_duplicate_id(&workouts) {
            return Err(StorageError::Corrupt {
                key: self.key.clone(),
                reason: format!("duplicate workout id {}", dup),
            });
        }

        Ok(workouts)
    }

    /// Load the stored collection, treating unreadable or corrupt data as empty.
    pub fn load(&self) -> Vec<Workout> {
        match self.try_load() {
            Ok(workouts) => {
                tracing::debug!(key = %self.key, count = workouts.len(), "Loaded workouts");
                workouts
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring stored workouts");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with `workouts`, preserving their order.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(workouts).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = workouts.len(), "Saved workouts");
        Ok(())
    }

    /// Remove the slot entirely.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)?;
        tracing::info!(key = %self.key, "Cleared stored workouts");
        Ok(())
    }
}

fn first_duplicate_id(workouts: &[Workout]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(workouts.len());
    workouts.iter().map(|w| w.id()).find(|id| !seen.insert(*id))
}
