use std::{
    borrow::Borrow,
    collections::HashSet,
    hash::{DefaultHasher, Hash, Hasher},
    mem,
};

use tracing::{debug, trace};

use crate::{
    error::{MapError, Result},
    slot::{Entry, Slot},
};

/// Capacity of the backing table for `LinearProbingMap::new` and after `clear`
pub const INITIAL_CAPACITY: usize = 13;

/// Highest ratio of live entries to slots that `put` will leave behind
pub const MAX_LOAD_FACTOR: f64 = 0.67;

/// Result of walking the probe sequence for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key is stored at this index
    Found(usize),
    /// The key is absent; a new entry for it belongs at this index
    Vacant(usize),
    /// The key is absent and every slot holds a live entry
    Full,
}

/// A hash map using open addressing with linear probing.
///
/// Entries live directly in a fixed-length table of [`Slot`]s. Collisions are
/// resolved by walking forward one slot at a time, wrapping at the end of the
/// table. Removal leaves a [`Slot::Tombstone`] behind so later entries in the
/// same run stay reachable.
///
/// Before every `put` the map checks whether one more entry would push the
/// load factor above [`MAX_LOAD_FACTOR`] and, if so, grows the table to
/// `2 * capacity + 1` slots.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct LinearProbingMap<K, V> {
    /// The backing table
    table: Box<[Slot<K, V>]>,
    /// Number of occupied slots
    size: usize,
}

impl<K, V> Default for LinearProbingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates a table of `length` empty slots
fn empty_table<K, V>(length: usize) -> Box<[Slot<K, V>]> {
    (0..length).map(|_| Slot::Empty).collect()
}

/// Computes the hash for a key
fn hash<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Gets the home index of a key in a table of `capacity` slots
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn home_index<Q: ?Sized + Hash>(key: &Q, capacity: usize) -> usize {
    (hash(key) % capacity.max(1) as u64) as usize
}

/// Walks every slot exactly once, starting at `home` and wrapping at the end
fn probe_sequence<K, V>(
    slots: &[Slot<K, V>],
    home: usize,
) -> impl Iterator<Item = (usize, &Slot<K, V>)> {
    let (wrapped, from_home) = slots.split_at(home.min(slots.len()));
    from_home
        .iter()
        .enumerate()
        .map(move |(offset, slot)| (home.saturating_add(offset), slot))
        .chain(wrapped.iter().enumerate())
}

/// Places an entry into the first empty slot along its probe sequence.
///
/// Only used on freshly built tables, which hold unique keys and no tombstones.
/// Returns false if no empty slot was left.
fn place<K: Hash, V>(slots: &mut [Slot<K, V>], entry: Entry<K, V>) -> bool {
    let home = home_index(&entry.key, slots.len());
    let target = probe_sequence(slots, home)
        .find(|(_, slot)| slot.is_empty())
        .map(|(index, _)| index);

    match target.and_then(|index| slots.get_mut(index)) {
        Some(slot) => {
            *slot = Slot::Occupied(entry);
            true
        }
        None => false,
    }
}

impl<K, V> LinearProbingMap<K, V> {
    /// Creates an empty map with [`INITIAL_CAPACITY`] slots
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty map with `capacity` slots. A capacity of zero is
    /// raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { table: empty_table(capacity.max(1)), size: 0 }
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the length of the backing table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Returns the current load factor of the map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.table.len() as f64
    }

    /// Returns the number of tombstones in the backing table
    #[must_use]
    pub fn tombstones(&self) -> usize {
        self.table.iter().filter(|slot| slot.is_tombstone()).count()
    }

    /// Returns the backing table, for inspection only
    #[must_use]
    pub fn table(&self) -> &[Slot<K, V>] {
        &self.table
    }

    /// Returns an iterator over the entries in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.table.iter() }
    }

    /// Removes every entry and resets the table to [`INITIAL_CAPACITY`] slots
    pub fn clear(&mut self) {
        self.table = empty_table(INITIAL_CAPACITY);
        self.size = 0;
        trace!(capacity = INITIAL_CAPACITY, "cleared map");
    }

    /// Returns true if holding `size` entries would break the load factor limit
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn exceeds_max_load(&self, size: usize) -> bool {
        size as f64 / self.table.len() as f64 > MAX_LOAD_FACTOR
    }
}

impl<K, V> LinearProbingMap<K, V>
where
    K: Eq + Hash,
{
    /// Walks the probe sequence for `key`.
    ///
    /// Stops at the matching entry or at the first empty slot. Returns the
    /// outcome together with the number of slots examined.
    fn locate<Q>(&self, key: &Q) -> (Probe, usize)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let home = home_index(key, self.table.len());
        let mut first_tombstone = None;
        let mut visited: usize = 0;

        for (index, slot) in probe_sequence(&self.table, home) {
            visited = visited.saturating_add(1);
            match slot {
                Slot::Empty => {
                    return (Probe::Vacant(first_tombstone.unwrap_or(index)), visited);
                }
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Occupied(entry) => {
                    if entry.key.borrow() == key {
                        return (Probe::Found(index), visited);
                    }
                }
            }
        }

        (first_tombstone.map_or(Probe::Full, Probe::Vacant), visited)
    }

    /// Returns the index of the slot holding `key`
    fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key).0 {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Inserts a key-value pair.
    ///
    /// Returns the previous value if the key was already present. The table
    /// grows first when one more entry would exceed [`MAX_LOAD_FACTOR`], even
    /// if the key turns out to be present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.exceeds_max_load(self.size.saturating_add(1)) {
            let grown = self.table.len().saturating_mul(2).saturating_add(1);
            debug!(
                from = self.table.len(),
                to = grown,
                size = self.size,
                "load factor exceeded, growing backing table"
            );
            self.rebuild(grown);
        }

        match self.locate(&key).0 {
            Probe::Found(index) => match self.table.get_mut(index) {
                Some(Slot::Occupied(entry)) => Some(mem::replace(&mut entry.value, value)),
                _ => None,
            },
            Probe::Vacant(index) => {
                if let Some(slot) = self.table.get_mut(index) {
                    *slot = Slot::Occupied(Entry::new(key, value));
                    self.size = self.size.saturating_add(1);
                }
                None
            }
            // The grow above always leaves at least one free slot
            Probe::Full => None,
        }
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(key)
            .and_then(|index| self.table.get(index))
            .and_then(Slot::entry)
            .map(Entry::value)
            .ok_or(MapError::KeyNotFound)
    }

    /// Retrieves a mutable reference to the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key).ok_or(MapError::KeyNotFound)?;
        match self.table.get_mut(index) {
            Some(Slot::Occupied(entry)) => Ok(&mut entry.value),
            _ => Err(MapError::KeyNotFound),
        }
    }

    /// Returns true if the map holds `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(key).is_some()
    }

    /// Removes `key` and returns its value, leaving a tombstone in its slot
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key).ok_or(MapError::KeyNotFound)?;
        let slot = self.table.get_mut(index).ok_or(MapError::KeyNotFound)?;

        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(entry) => {
                self.size = self.size.saturating_sub(1);
                Ok(entry.value)
            }
            other => {
                *slot = other;
                Err(MapError::KeyNotFound)
            }
        }
    }

    /// Returns the set of keys, scanning the whole table
    pub fn key_set(&self) -> HashSet<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns the values in slot order, scanning the whole table
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Rebuilds the backing table with `length` slots.
    ///
    /// The load factor is not checked, so the result may exceed
    /// [`MAX_LOAD_FACTOR`]. Tombstones are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] if `length` is zero or smaller
    /// than the number of entries. The map is left untouched in that case.
    pub fn resize_backing_table(&mut self, length: usize) -> Result<()> {
        if length == 0 {
            return Err(MapError::InvalidArgument(
                "backing table length must be positive".to_string(),
            ));
        }
        if length < self.size {
            return Err(MapError::InvalidArgument(format!(
                "backing table length {length} cannot hold {} entries",
                self.size
            )));
        }

        self.rebuild(length);
        Ok(())
    }

    /// Returns how many slots a lookup of `key` examines, hit or miss
    pub fn probe_length<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).1
    }

    /// Moves every entry into a fresh table of `length` slots, in old slot order
    fn rebuild(&mut self, length: usize) {
        let old = mem::replace(&mut self.table, empty_table(length));
        let mut dropped_tombstones: usize = 0;

        for slot in old.into_vec() {
            match slot {
                Slot::Occupied(entry) => {
                    let placed = place(&mut self.table, entry);
                    debug_assert!(placed, "rebuilt table has room for every entry");
                }
                Slot::Tombstone => dropped_tombstones = dropped_tombstones.saturating_add(1),
                Slot::Empty => {}
            }
        }

        trace!(capacity = length, size = self.size, dropped_tombstones, "rebuilt backing table");
    }
}

impl<K, V> Extend<(K, V)> for LinearProbingMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LinearProbingMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a `LinearProbingMap`, in slot order
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Slots not yet visited
    slots: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| slot.entry().map(|entry| (&entry.key, &entry.value)))
    }
}
