//! Slot and entry types making up the backing table

/// A key-value pair stored in an occupied slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The key in the key-value pair
    pub(crate) key: K,
    /// The value associated with the key
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key of this entry
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this entry
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into its key and value
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// One position of the backing table.
///
/// A `Tombstone` marks a slot whose entry was removed. It never matches a key,
/// but probing walks past it so entries placed further along the run stay
/// reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K, V> {
    /// Never held an entry since the table was built
    Empty,
    /// Holds a live entry
    Occupied(Entry<K, V>),
    /// Held an entry that has since been removed
    Tombstone,
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<K, V> Slot<K, V> {
    /// Returns true if the slot has never been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the slot holds a live entry
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Returns true if the slot is a deletion marker
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }

    /// Returns the live entry, if any
    #[must_use]
    pub fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_states() {
        let empty: Slot<&str, i32> = Slot::default();
        assert!(empty.is_empty());
        assert!(empty.entry().is_none());

        let occupied = Slot::Occupied(Entry::new("a", 1));
        assert!(occupied.is_occupied());
        assert_eq!(occupied.entry().map(Entry::value), Some(&1));

        let tombstone: Slot<&str, i32> = Slot::Tombstone;
        assert!(tombstone.is_tombstone());
        assert!(!tombstone.is_empty());
        assert!(tombstone.entry().is_none());
    }

    #[test]
    fn test_entry_parts() {
        let entry = Entry::new("key".to_string(), 7);
        assert_eq!(entry.key(), "key");
        assert_eq!(entry.into_parts(), ("key".to_string(), 7));
    }
}
