use core::error::Error;
use core::fmt;

/// Errors reported by [`ProbingTable`](super::ProbingTable) operations.
///
/// Every variant is a recoverable condition: the table is left in a
/// valid state and remains usable after any failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The supplied key is negative. Keys are restricted to the
    /// non-negative `i64` domain and a negative key is never stored.
    InvalidKey(i64),
    /// An insert of a new key was attempted while the table already
    /// holds `M` entries. Updates of existing keys are unaffected.
    CapacityExceeded,
    /// The key is not present in the table.
    KeyNotFound(i64),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidKey(key) => {
                write!(f, "invalid key {key}: keys must be non-negative")
            }
            TableError::CapacityExceeded => write!(f, "table is at capacity"),
            TableError::KeyNotFound(key) => write!(f, "key {key} not found"),
        }
    }
}

impl Error for TableError {}
