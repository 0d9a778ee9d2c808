//! A fixed-capacity hash table using linear probing.
//!
//! All entries are stored directly in an inline array of `M` slots
//! (open addressing); a colliding key scans forward, wrapping at the
//! end, until it finds its own slot or an empty one. The table never
//! grows: once `M` distinct keys are stored, inserting a new key
//! reports [`TableError::CapacityExceeded`], while updating an
//! existing key still succeeds.
//!
//! Keys are non-negative `i64` values and hash to `key % M`, so the
//! probe behavior for a given key sequence is fully deterministic.
//! Negative keys are rejected with [`TableError::InvalidKey`] and are
//! never stored.
//!
//! Deletion does not leave tombstones. Vacating a slot would make any
//! later key in the same probe cluster unreachable, so `remove` walks
//! the remainder of the cluster and shifts back every entry whose
//! probe path crossed the vacated slot. After any sequence of
//! operations, every stored key is reachable by a forward probe from
//! its home slot.
//!
//! # Examples
//!
//! ```
//! use probe_collections::probing::{ProbingTable, TableError};
//!
//! // Default capacity is 7; keys 7 and 0 share home slot 0.
//! let mut table: ProbingTable<&str> = ProbingTable::new();
//! table.insert(7, "seven").unwrap();
//! table.insert(3, "three").unwrap();
//! table.insert(0, "zero").unwrap();
//! table.insert(11, "eleven").unwrap();
//! assert_eq!(table.len(), 4);
//!
//! // Removing 7 repairs the cluster: 0 and 11 stay reachable.
//! assert_eq!(table.remove(7), Ok("seven"));
//! assert_eq!(table.get(0), Ok(&"zero"));
//! assert_eq!(table.get(11), Ok(&"eleven"));
//! assert_eq!(table.get(7), Err(TableError::KeyNotFound(7)));
//! ```

mod error;
mod table;

#[cfg(test)]
mod tests;

pub use error::TableError;
pub use table::ProbingTable;
