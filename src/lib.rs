//! Fixed-capacity collections built on open addressing.
//!
//! The crate currently provides a single structure,
//! [`probing::ProbingTable`]: a linear-probing hash table with a
//! capacity fixed at compile time, non-negative integer keys, and no
//! tombstones (deletion repairs the probe cluster in place).
//!
//! The crate is `no_std` and performs no heap allocation; the backing
//! array lives inline in the table value.
#![no_std]

pub mod probing;
