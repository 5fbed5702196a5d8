//! Keyed in-memory store implementation

use super::entry::{EntityRef, Identified};
use super::error::StoreError;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// State guarded by the store's single lock
struct StoreState<T> {
    /// Next identifier to hand out
    next_id: u64,

    /// Stored entities, ordered by identifier
    entries: BTreeMap<u64, EntityRef<T>>,
}

impl<T> StoreState<T> {
    fn new() -> Self {
        StoreState {
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// In-memory collection of entities keyed by a store-assigned identifier
///
/// Every operation takes the same lock over `(entries, next_id)`, so concurrent
/// calls behave as if they ran one after the other. The entry count is small
/// and each critical section is a single map operation or copy.
pub struct KeyedStore<T> {
    state: Mutex<StoreState<T>>,
}

impl<T: Identified> KeyedStore<T> {
    /// Create an empty store whose first identifier is 1
    pub fn new() -> Self {
        KeyedStore {
            state: Mutex::new(StoreState::new()),
        }
    }

    // No operation leaves the state half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, StoreState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Check if an identifier is currently stored
    pub fn contains(&self, id: u64) -> bool {
        self.lock().entries.contains_key(&id)
    }

    /// Identifier the next `insert` will assign
    pub fn next_id(&self) -> u64 {
        self.lock().next_id
    }

    /// Store an entity under the next identifier and return that identifier
    ///
    /// The entity's own identifier field is overwritten with the assigned value.
    pub fn insert(&self, mut entity: T) -> u64 {
        let mut state = self.lock();
        let id = state.next_id;
        entity.set_id(id);
        state.entries.insert(id, EntityRef::new(entity));
        state.next_id += 1;
        debug!("Inserted entity {}", id);
        id
    }

    /// Look up an entity by identifier
    pub fn get(&self, id: u64) -> Option<EntityRef<T>> {
        self.lock().entries.get(&id).cloned()
    }

    /// Remove an entity, returns true if it was present
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.lock().entries.remove(&id).is_some();
        if removed {
            debug!("Deleted entity {}", id);
        }
        removed
    }

    /// Snapshot of all entities in ascending identifier order
    pub fn list(&self) -> Vec<EntityRef<T>> {
        self.lock().entries.values().cloned().collect()
    }

    /// Entities at positions `[start, start + count)` of `list()`
    ///
    /// The window is never clamped: a negative bound or one that runs past the
    /// end of the snapshot is an `OutOfRange` error.
    pub fn list_range(&self, start: i64, count: i64) -> Result<Vec<EntityRef<T>>, StoreError> {
        let state = self.lock();
        let len = state.entries.len();
        let out_of_range = StoreError::OutOfRange { start, count, len };

        if start < 0 || count < 0 {
            return Err(out_of_range);
        }
        let end = start.checked_add(count).ok_or(out_of_range.clone())?;
        if end as u64 > len as u64 {
            return Err(out_of_range);
        }

        Ok(state
            .entries
            .values()
            .skip(start as usize)
            .take(count as usize)
            .cloned()
            .collect())
    }

    /// Remove every entity and restart identifiers at 1
    pub fn reset(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.next_id = 1;
        debug!("Store reset");
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        let state = self.lock();
        StoreStats {
            entries: state.entries.len(),
            next_id: state.next_id,
        }
    }
}

impl<T: Identified> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the keyed store
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub entries: usize,
    pub next_id: u64,
}
