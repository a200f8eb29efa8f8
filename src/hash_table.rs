//! HashTable: chained buckets with load-factor driven doubling and halving.

use crate::buckets::{Buckets, Entry};
use crate::iter::{IntoIter, Iter};
use crate::reentrancy::AccessGuard;
use core::borrow::Borrow;
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use log::{debug, trace};
use std::collections::hash_map::DefaultHasher;

/// Bucket count of a new or cleared table, and the floor for shrinking.
pub const INITIAL_CAPACITY: usize = 16;

/// An insert that would push `len / capacity` above this doubles the table.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// A remove that starts with `len / capacity` below this halves the table.
pub const MIN_LOAD_FACTOR: f64 = 0.3;

// Integer forms of the two thresholds above.
#[inline]
fn over_max_load(count: usize, capacity: usize) -> bool {
    count * 4 > capacity * 3
}

#[inline]
fn under_min_load(count: usize, capacity: usize) -> bool {
    count * 10 < capacity * 3
}

/// SipHash with fixed keys: the same key lands in the same bucket on every
/// run.
type FixedState = BuildHasherDefault<DefaultHasher>;

/// A map from `K` to `V` using separate chaining.
///
/// Growth is checked before every `insert` and shrinking before every
/// `remove`; both rebuild the bucket array at twice or half the capacity.
/// Capacity starts at [`INITIAL_CAPACITY`] and never goes below it.
///
/// Not `Sync`: wrap it in a `Mutex` to share it between threads.
pub struct HashTable<K, V> {
    buckets: Buckets<K, V>,
    hasher: FixedState,
    access: AccessGuard,
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            buckets: Buckets::with_capacity(INITIAL_CAPACITY),
            hasher: FixedState::default(),
            access: AccessGuard::new(),
        }
    }

    /// Associate `value` with `key`.
    ///
    /// If the key is already present its value is replaced (the stored key
    /// is kept) and the old value is returned. The grow check counts the
    /// new entry before looking the key up, so an overwrite can still grow
    /// the table.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let _g = self.access.enter();
        let capacity = self.buckets.capacity();
        if over_max_load(self.buckets.len() + 1, capacity) {
            trace!(
                "growing hash table from {} to {} buckets ({} entries)",
                capacity,
                capacity * 2,
                self.buckets.len()
            );
            self.buckets.resize(capacity * 2);
        }
        let hash = self.hasher.hash_one(&key);
        self.buckets.insert(Entry { key, value, hash })
    }

    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.access.enter();
        let hash = self.hasher.hash_one(key);
        self.buckets
            .find(hash, |k| Borrow::<Q>::borrow(k) == key)
            .map(|e| &e.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(key).is_some()
    }

    /// Remove `key` and return its value.
    ///
    /// The shrink check looks at the load before the removal, so a call
    /// whose key is absent can still halve the table.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.access.enter();
        let capacity = self.buckets.capacity();
        if capacity > INITIAL_CAPACITY && under_min_load(self.buckets.len(), capacity) {
            trace!(
                "shrinking hash table from {} to {} buckets ({} entries)",
                capacity,
                capacity / 2,
                self.buckets.len()
            );
            self.buckets.resize(capacity / 2);
        }
        let hash = self.hasher.hash_one(key);
        self.buckets
            .remove(hash, |k| Borrow::<Q>::borrow(k) == key)
            .map(|e| e.value)
    }
}

impl<K, V> HashTable<K, V> {
    /// Drop every entry and go back to [`INITIAL_CAPACITY`] buckets.
    pub fn clear(&mut self) {
        let _g = self.access.enter();
        debug!(
            "clearing hash table ({} entries, {} buckets)",
            self.buckets.len(),
            self.buckets.capacity()
        );
        self.buckets = Buckets::with_capacity(INITIAL_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.len() == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.buckets.len() as f64 / self.buckets.capacity() as f64
    }

    /// Snapshot of every entry, bucket by bucket and in insertion order
    /// within a bucket.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Iterate in the same order as [`HashTable::entries`].
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.buckets.chains(), self.buckets.len())
    }

    pub(crate) fn buckets(&self) -> &Buckets<K, V> {
        &self.buckets
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for HashTable<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            hasher: FixedState::default(),
            access: AccessGuard::new(),
        }
    }
}

/// Two tables are equal when they hold the same associations, regardless
/// of capacity or bucket order.
impl<K, V> PartialEq for HashTable<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.find(k).map_or(false, |ov| *v == *ov))
    }
}

impl<K, V> Eq for HashTable<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for HashTable<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.buckets.len();
        IntoIter::new(self.buckets.into_chains(), len)
    }
}
