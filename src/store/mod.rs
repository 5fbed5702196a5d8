//! In-memory storage module
//!
//! Provides the keyed collection that backs the parolee service.
//! This module is independent of HTTP and of the domain model (loose coupling):
//! it only knows how to hand an identifier to an entity.

mod entry;
mod error;
mod keyed;

pub use entry::{EntityRef, Identified};
pub use error::StoreError;
pub use keyed::{KeyedStore, StoreStats};
