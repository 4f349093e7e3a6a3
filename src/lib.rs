pub mod hash_table {

    use std::collections::hash_map::DefaultHasher;
    use std::fmt::Debug;
    use std::hash::{Hash, Hasher};

    use derive_more::{Display, Error};
    use tracing::{trace, warn};

    /// Returned by [`HashTable::get`] when the probe walk reaches an empty
    /// slot, or cycles through every slot without matching the key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
    #[display("key not found")]
    pub struct KeyNotFound;

    #[derive(Debug, Clone)]
    struct Entry<K, V> {
        key: K,
        value: V,
    }

    /// A fixed-capacity key-value table using closed hashing (open
    /// addressing) with linear probing.
    ///
    /// All entries live directly in the backing slot array; a collision
    /// walks forward one slot at a time, wrapping at the end. The capacity
    /// chosen at construction never changes: there is no resizing and no
    /// deletion, so a slot that becomes occupied stays occupied for the
    /// table's lifetime.
    #[derive(Debug, Clone)]
    pub struct HashTable<K, V>
    where
        K: Hash + Eq + Debug,
        V: Debug,
    {
        count: usize,
        slots: Box<[Option<Entry<K, V>>]>,
    }

    impl<K, V> HashTable<K, V>
    where
        K: Hash + Eq + Debug,
        V: Debug,
    {
        /// Capacity used by [`Default`].
        pub const DEFAULT_CAPACITY: usize = 10;
        pub const MIN_CAPACITY: usize = 1;

        /// Creates a table with every slot empty. The capacity is clamped
        /// to [`Self::MIN_CAPACITY`] so the index arithmetic never reduces
        /// modulo zero.
        pub fn with_capacity(initial_capacity: usize) -> HashTable<K, V> {
            let capacity: usize = initial_capacity.max(Self::MIN_CAPACITY);
            let mut slots: Vec<Option<Entry<K, V>>> = Vec::with_capacity(capacity);
            slots.resize_with(capacity, || None);
            HashTable {
                count: 0,
                slots: slots.into_boxed_slice(),
            }
        }

        /// Calculates the initial index into the table for a key.
        ///
        /// The key's hash code comes from the standard `DefaultHasher` as a
        /// `u64`, which is already non-negative, so reducing it modulo the
        /// slot count is the whole computation. `DefaultHasher::new()` is
        /// deterministically seeded, so every table of the same capacity
        /// agrees on the initial index for a given key.
        fn slot_index(&self, key: &K) -> usize {
            let mut hasher: DefaultHasher = DefaultHasher::new();
            key.hash(&mut hasher);
            hasher.finish() as usize % self.slots.len()
        }

        /// Inserts a key-value pair, resolving collisions with linear
        /// probing: starting from the key's initial index, the first empty
        /// slot found (wrapping at the end of the array) receives the
        /// entry.
        ///
        /// No duplicate-key check is performed; putting the same key twice
        /// stores two independent entries, and [`HashTable::get`] returns
        /// whichever lies first on the probe path.
        ///
        /// If every slot is occupied the insert is dropped silently; the
        /// only trace of it is a `warn` event and an unchanged
        /// [`HashTable::count`].
        pub fn put(&mut self, key: K, value: V) {
            let mut index: usize = self.slot_index(&key);
            for probes in 0..self.slots.len() {
                if self.slots[index].is_none() {
                    trace!(?key, slot = index, probes, "inserted");
                    self.slots[index] = Some(Entry { key, value });
                    self.count += 1;
                    return;
                }
                index = (index + 1) % self.slots.len();
            }
            warn!(?key, "table full, insert dropped");
        }

        /// Looks up a key, walking the same probe sequence as
        /// [`HashTable::put`].
        ///
        /// The walk stops with [`KeyNotFound`] as soon as it reaches an
        /// empty slot: inserts never skip past an empty slot, so the key
        /// cannot be stored anywhere later on the path. A full cycle
        /// through a completely occupied table without a match also fails
        /// with [`KeyNotFound`].
        pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
            let mut index: usize = self.slot_index(key);
            for _ in 0..self.slots.len() {
                match &self.slots[index] {
                    None => {
                        trace!(?key, slot = index, "probe reached an empty slot");
                        return Err(KeyNotFound);
                    }
                    Some(entry) if entry.key == *key => {
                        trace!(?key, slot = index, "found");
                        return Ok(&entry.value);
                    }
                    Some(_) => index = (index + 1) % self.slots.len(),
                }
            }
            trace!(?key, "probe cycled the full table");
            Err(KeyNotFound)
        }

        /// Iterates the slots in array order, yielding `None` for an empty
        /// slot and the borrowed key-value pair for an occupied one. This
        /// is the read-only view callers use to display the table layout.
        pub fn slots(&self) -> impl Iterator<Item = Option<(&K, &V)>> {
            self.slots
                .iter()
                .map(|slot| slot.as_ref().map(|entry| (&entry.key, &entry.value)))
        }

        pub fn count(&self) -> usize {
            self.count
        }

        pub fn capacity(&self) -> usize {
            self.slots.len()
        }

        pub fn load_factor(&self) -> f64 {
            self.count as f64 / self.capacity() as f64
        }

        pub fn is_full(&self) -> bool {
            self.count == self.capacity()
        }
    }

    impl<K, V> Default for HashTable<K, V>
    where
        K: Hash + Eq + Debug,
        V: Debug,
    {
        fn default() -> Self {
            Self::with_capacity(Self::DEFAULT_CAPACITY)
        }
    }

}
