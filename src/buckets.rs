//! Buckets: the chained storage under `HashTable`.
//!
//! A `Vec` of chains, each chain a `Vec` of entries in insertion order.
//! Entries carry the hash computed when they were inserted and placement
//! always uses that stored hash, so moving entries between arrays never
//! calls back into `K: Hash`.

use core::mem;

#[derive(Clone, Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
}

#[derive(Clone, Debug)]
pub(crate) struct Buckets<K, V> {
    slots: Vec<Vec<Entry<K, V>>>,
    count: usize,
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Vec<Entry<K, V>>> {
    (0..capacity).map(|_| Vec::new()).collect()
}

impl<K, V> Buckets<K, V> {
    /// `capacity` must be non-zero.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "bucket array must not be empty");
        Self {
            slots: empty_slots(capacity),
            count: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Bucket for `hash` under the current capacity. `u64` has no sign,
    /// so the remainder is always a valid index.
    #[inline]
    pub(crate) fn index_for(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    pub(crate) fn chains(&self) -> &[Vec<Entry<K, V>>] {
        &self.slots
    }

    pub(crate) fn into_chains(self) -> Vec<Vec<Entry<K, V>>> {
        self.slots
    }

    pub(crate) fn find<F>(&self, hash: u64, mut is_match: F) -> Option<&Entry<K, V>>
    where
        F: FnMut(&K) -> bool,
    {
        self.slots[self.index_for(hash)]
            .iter()
            .find(|e| e.hash == hash && is_match(&e.key))
    }

    /// Overwrites the value of an equal key in place (key kept) and returns
    /// the old value; otherwise appends to the chain.
    pub(crate) fn insert(&mut self, entry: Entry<K, V>) -> Option<V>
    where
        K: Eq,
    {
        let idx = self.index_for(entry.hash);
        let chain = &mut self.slots[idx];
        if let Some(existing) = chain
            .iter_mut()
            .find(|e| e.hash == entry.hash && e.key == entry.key)
        {
            return Some(mem::replace(&mut existing.value, entry.value));
        }
        chain.push(entry);
        self.count += 1;
        None
    }

    pub(crate) fn remove<F>(&mut self, hash: u64, mut is_match: F) -> Option<Entry<K, V>>
    where
        F: FnMut(&K) -> bool,
    {
        let idx = self.index_for(hash);
        let chain = &mut self.slots[idx];
        let pos = chain
            .iter()
            .position(|e| e.hash == hash && is_match(&e.key))?;
        // `Vec::remove` keeps the rest of the chain in insertion order.
        let entry = chain.remove(pos);
        self.count -= 1;
        Some(entry)
    }

    /// Swap in a fresh array of `capacity` empty chains and re-place every
    /// entry. Keys are already unique, so nothing is compared.
    pub(crate) fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity > 0, "bucket array must not be empty");
        let old = mem::replace(&mut self.slots, empty_slots(capacity));
        for entry in old.into_iter().flatten() {
            let idx = self.index_for(entry.hash);
            self.slots[idx].push(entry);
        }
    }
}
