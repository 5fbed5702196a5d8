//! Store error types

use thiserror::Error;

/// Errors signalled by the keyed store
///
/// Missing identifiers are not errors: lookups return `None` and deletes are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("range [{start}, {start} + {count}) is outside the {len} stored entries")]
    OutOfRange {
        start: i64,
        count: i64,
        len: usize,
    },
}
