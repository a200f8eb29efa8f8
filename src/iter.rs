//! Iterators over `HashTable`, walking buckets in index order and each chain
//! in insertion order.

use crate::buckets::Entry;
use core::iter::FusedIterator;
use core::slice;
use std::vec;

/// Borrowing iterator returned by `HashTable::iter`.
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Vec<Entry<K, V>>>,
    chain: slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(chains: &'a [Vec<Entry<K, V>>], len: usize) -> Self {
        Self {
            buckets: chains.iter(),
            chain: (&[]).iter(),
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((&e.key, &e.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}

/// Owning iterator returned by `HashTable::into_iter`.
pub struct IntoIter<K, V> {
    buckets: vec::IntoIter<Vec<Entry<K, V>>>,
    chain: vec::IntoIter<Entry<K, V>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(chains: Vec<Vec<Entry<K, V>>>, len: usize) -> Self {
        Self {
            buckets: chains.into_iter(),
            chain: Vec::new().into_iter(),
            remaining: len,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((e.key, e.value));
            }
            self.chain = self.buckets.next()?.into_iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
