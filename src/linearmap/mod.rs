use std::fmt;

use crate::map::SequentialMap;
use crate::some_or;

/// The growth increment used by `SequentialMap::new`, and so also the
/// default initial capacity.
pub const DEFAULT_INCREMENT: usize = 50;

/// A map on a flat slot array, searched linearly.
///
/// Entries live in the prefix `[0, len)` of the slot array with no gaps in
/// between; the array length is the capacity. When an insert finds every
/// slot occupied, the array is replaced by one `increment` slots longer, so
/// capacity moves in fixed steps and never shrinks. Every operation is a
/// bounded scan over the occupied prefix, O(len), which keeps this map
/// suited to small key counts only.
pub struct LinearMap<K, V> {
    storage: Vec<Option<Entry<K, V>>>,
    len: usize,
    increment: usize,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LinearMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.storage[..self.len]
                    .iter()
                    .flatten()
                    .map(|entry| (&entry.key, &entry.value)),
            )
            .finish()
    }
}

// a stored key/value pair, never mutated in place
struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }
}

/// Entry identity is the key alone; the value takes no part. This is the
/// rule insert deduplicates by.
impl<K: Eq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

/// Error from constructing a map with an unusable growth increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearMapError {
    /// The increment fixes the initial capacity and every later growth
    /// step, so it must be positive.
    InvalidIncrement,
}

impl fmt::Display for LinearMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearMapError::InvalidIncrement => {
                write!(f, "the growth increment must be positive")
            }
        }
    }
}

impl std::error::Error for LinearMapError {}

impl<K, V> LinearMap<K, V> {
    /// Create a map whose initial capacity and growth step are both
    /// `increment` slots.
    pub fn with_increment(increment: usize) -> Result<LinearMap<K, V>, LinearMapError> {
        if increment == 0 {
            return Err(LinearMapError::InvalidIncrement);
        }

        Ok(Self::with_slots(increment))
    }

    fn with_slots(increment: usize) -> LinearMap<K, V> {
        let mut storage = Vec::with_capacity(increment);
        storage.resize_with(increment, || None);

        LinearMap {
            storage,
            len: 0,
            increment,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total allocated slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The configured growth step.
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Replace the storage with one `increment` slots longer, every entry
    /// staying at its old index.
    fn grow(&mut self) {
        let capacity = self.storage.len() + self.increment;
        let mut storage: Vec<Option<Entry<K, V>>> = Vec::with_capacity(capacity);
        storage.resize_with(capacity, || None);

        // recount while moving; the occupied slots form a gapless prefix,
        // so the recount lands back on the old len
        let mut len = 0;
        for (index, slot) in self.storage.iter_mut().enumerate() {
            if let Some(entry) = slot.take() {
                storage[index] = Some(entry);
                len += 1;
            }
        }

        self.storage = storage;
        self.len = len;
    }
}

impl<K: Eq + Clone, V> LinearMap<K, V> {
    /// Whether the key is present, by way of lookup.
    pub fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K, V> Default for LinearMap<K, V> {
    fn default() -> LinearMap<K, V> {
        Self::with_slots(DEFAULT_INCREMENT)
    }
}

impl<K: Eq + Clone, V> SequentialMap<K, V> for LinearMap<K, V> {
    fn new() -> LinearMap<K, V> {
        Self::with_slots(DEFAULT_INCREMENT)
    }

    fn insert(&mut self, key: &K, value: V) -> Result<(), V> {
        let new = Entry::new(key.clone(), value);

        for slot in &self.storage[..self.len] {
            if let Some(entry) = slot {
                // keys stay pairwise distinct; the first value stored under
                // a key is the one kept
                if *entry == new {
                    return Err(new.value);
                }
            }
        }

        if self.len == self.storage.len() {
            self.grow();
        }

        self.storage[self.len] = Some(new);
        self.len += 1;

        Ok(())
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        let mut found = None;

        // the scan runs the whole occupied prefix and the last match wins;
        // insert keeps keys distinct, so at most one slot can match
        for slot in &self.storage[..self.len] {
            if let Some(entry) = slot {
                if entry.key == *key {
                    found = Some(&entry.value);
                }
            }
        }

        found
    }

    fn remove(&mut self, key: &K) -> Result<V, ()> {
        let mut index = None;

        for (i, slot) in self.storage[..self.len].iter().enumerate() {
            if let Some(entry) = slot {
                if entry.key == *key {
                    index = Some(i);
                    break;
                }
            }
        }

        let index = some_or!(index, return Err(()));
        let entry = some_or!(self.storage[index].take(), return Err(()));

        // close the gap so the occupied slots stay a contiguous prefix;
        // the freed trailing slot is left None
        for i in index..self.len - 1 {
            self.storage[i] = self.storage[i + 1].take();
        }

        self.len -= 1;
        Ok(entry.value)
    }
}
