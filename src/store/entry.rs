//! Entity handles stored by the keyed store

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Anything the store can assign an identifier to
pub trait Identified {
    /// The identifier currently carried by the entity, if any
    fn id(&self) -> Option<u64>;

    /// Overwrite the entity's identifier
    fn set_id(&mut self, id: u64);
}

/// Shared handle to a stored entity
///
/// The store only guards the identifier -> entity mapping. Mutating the
/// entity behind the handle goes through the entity's own lock.
#[derive(Debug)]
pub struct EntityRef<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> EntityRef<T> {
    pub(crate) fn new(entity: T) -> Self {
        EntityRef {
            inner: Arc::new(RwLock::new(entity)),
        }
    }

    /// Lock the entity for reading
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the entity for writing
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> EntityRef<T> {
    /// Copy the current value of the entity out of the handle
    pub fn snapshot(&self) -> T {
        self.read().clone()
    }
}

impl<T> Clone for EntityRef<T> {
    fn clone(&self) -> Self {
        EntityRef {
            inner: Arc::clone(&self.inner),
        }
    }
}
