use core::fmt;
use core::mem;

use super::error::TableError;

enum Slot<V> {
    Empty,
    Occupied { key: i64, value: V },
}

/// A fixed-capacity linear-probing hash table with `i64` keys.
///
/// The capacity `M` is a compile-time constant (default 7) and the
/// table never resizes. Keys hash to `key % M`; collisions probe
/// forward one slot at a time, wrapping at the end of the array.
/// Deleted slots are repaired immediately rather than marked with a
/// tombstone, so lookup cost stays bounded by the probe cluster
/// length and never degrades with churn.
pub struct ProbingTable<V, const M: usize = 7> {
    slots: [Slot<V>; M],
    len: usize,
}

impl<V, const M: usize> Default for ProbingTable<V, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, const M: usize> ProbingTable<V, M> {
    /// Creates an empty table.
    ///
    /// # Panics
    /// Panics if `M` is zero.
    pub fn new() -> Self {
        assert!(M > 0, "capacity must be non-zero");
        Self {
            slots: [const { Slot::Empty }; M],
            len: 0,
        }
    }

    /// Inserts a key-value pair, or updates the value in place if the
    /// key is already present.
    ///
    /// Returns the previous value on an update, `None` on a fresh
    /// insert.
    ///
    /// # Errors
    /// * [`TableError::InvalidKey`] if `key` is negative; the table is
    ///   not modified.
    /// * [`TableError::CapacityExceeded`] if `key` is new and all `M`
    ///   slots are occupied. An update of an existing key succeeds
    ///   even at capacity, so the probe runs before the bound check.
    pub fn insert(&mut self, key: i64, value: V) -> Result<Option<V>, TableError> {
        Self::check_key(key)?;
        let mut idx = Self::home(key);
        // A full cycle of M probes visits every slot exactly once.
        for _ in 0..M {
            match &mut self.slots[idx] {
                Slot::Occupied { key: k, value: v } if *k == key => {
                    return Ok(Some(mem::replace(v, value)));
                }
                Slot::Occupied { .. } => idx = (idx + 1) % M,
                Slot::Empty => {
                    self.slots[idx] = Slot::Occupied { key, value };
                    self.len += 1;
                    return Ok(None);
                }
            }
        }
        Err(TableError::CapacityExceeded)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    /// [`TableError::InvalidKey`] for a negative key,
    /// [`TableError::KeyNotFound`] when the key is absent.
    pub fn get(&self, key: i64) -> Result<&V, TableError> {
        Self::check_key(key)?;
        let idx = self.probe(key).ok_or(TableError::KeyNotFound(key))?;
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => Ok(value),
            Slot::Empty => unreachable!(),
        }
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    /// Same conditions as [`get`](Self::get).
    pub fn get_mut(&mut self, key: i64) -> Result<&mut V, TableError> {
        Self::check_key(key)?;
        let idx = self.probe(key).ok_or(TableError::KeyNotFound(key))?;
        match &mut self.slots[idx] {
            Slot::Occupied { value, .. } => Ok(value),
            Slot::Empty => unreachable!(),
        }
    }

    /// Returns true if `key` is present. Negative keys are never
    /// stored, so they are simply reported absent.
    pub fn contains_key(&self, key: i64) -> bool {
        key >= 0 && self.probe(key).is_some()
    }

    /// Removes `key` and returns its value.
    ///
    /// Vacating a slot breaks the probe chain for every later entry in
    /// the same cluster, so the remainder of the cluster is repaired
    /// by a backward-shift walk before returning.
    ///
    /// # Errors
    /// [`TableError::InvalidKey`] for a negative key,
    /// [`TableError::KeyNotFound`] when the key is absent; the table
    /// is not modified in either case.
    pub fn remove(&mut self, key: i64) -> Result<V, TableError> {
        Self::check_key(key)?;
        let idx = self.probe(key).ok_or(TableError::KeyNotFound(key))?;
        match mem::replace(&mut self.slots[idx], Slot::Empty) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                self.repair(idx);
                Ok(value)
            }
            Slot::Empty => unreachable!(),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == M
    }

    /// The fixed capacity `M`.
    pub fn capacity(&self) -> usize {
        M
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Iterates over the stored `(key, value)` pairs in slot order.
    /// The order is an artifact of probing and not part of the
    /// contract.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((*key, value)),
            Slot::Empty => None,
        })
    }

    fn check_key(key: i64) -> Result<(), TableError> {
        if key < 0 {
            Err(TableError::InvalidKey(key))
        } else {
            Ok(())
        }
    }

    /// Home slot of a valid (non-negative) key.
    fn home(key: i64) -> usize {
        (key % M as i64) as usize
    }

    /// Forward cyclic distance from `from` to `to`.
    fn distance(from: usize, to: usize) -> usize {
        (to + M - from) % M
    }

    /// Finds the slot holding `key`, probing forward from its home
    /// slot. Stops at the first empty slot or after a full cycle of
    /// `M` probes (the latter only matters for a completely full
    /// table).
    fn probe(&self, key: i64) -> Option<usize> {
        let mut idx = Self::home(key);
        for _ in 0..M {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied { key: k, .. } if *k == key => return Some(idx),
                Slot::Occupied { .. } => idx = (idx + 1) % M,
            }
        }
        None
    }

    /// Backward-shift repair after vacating `gap`.
    ///
    /// Walks forward until the first empty slot. An entry at `idx`
    /// moves into the gap iff the gap lies strictly earlier on the
    /// entry's own probe path, i.e. `distance(home, gap) <
    /// distance(home, idx)`; the gap then relocates to `idx`. Entries
    /// that fail the test are reachable without crossing the gap and
    /// stay put. On return, every entry in the cluster is again
    /// reachable by a forward probe from its home slot.
    ///
    /// The walk cannot run past the cluster: after a removal at least
    /// one empty slot exists, so it terminates within `M` steps.
    fn repair(&mut self, mut gap: usize) {
        let mut idx = (gap + 1) % M;
        loop {
            let home = match &self.slots[idx] {
                Slot::Empty => return,
                Slot::Occupied { key, .. } => Self::home(*key),
            };
            if Self::distance(home, gap) < Self::distance(home, idx) {
                self.slots[gap] = mem::replace(&mut self.slots[idx], Slot::Empty);
                gap = idx;
            }
            idx = (idx + 1) % M;
        }
    }
}

impl<V: fmt::Debug, const M: usize> fmt::Debug for ProbingTable<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
