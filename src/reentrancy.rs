//! Debug-only access guard.
//!
//! `HashTable` assumes the caller serializes every call. The only way to
//! break that from safe code on a single thread is to call back into the
//! table from `K: Eq` or `K: Hash` while an operation is running. In debug
//! builds `AccessGuard::enter` panics on such nested entry; in release
//! builds it is a no-op.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-table nesting tracker. Public operations start with
/// `let _g = self.access.enter();`.
#[derive(Debug)]
pub(crate) struct AccessGuard {
    #[cfg(debug_assertions)]
    active: Cell<bool>,
    // Send but !Sync in every build profile.
    _unsync: PhantomData<Cell<()>>,
}

impl AccessGuard {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(false),
            _unsync: PhantomData,
        }
    }

    /// Mark the table busy until the returned token is dropped.
    #[inline]
    pub(crate) fn enter(&self) -> AccessToken<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.active.replace(true),
                "hash table re-entered while an operation was in progress"
            );
            return AccessToken { owner: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return AccessToken { _owner: PhantomData };
        }
    }
}

/// RAII token returned by `AccessGuard::enter`.
pub(crate) struct AccessToken<'a> {
    #[cfg(debug_assertions)]
    owner: &'a AccessGuard,
    #[cfg(not(debug_assertions))]
    _owner: PhantomData<&'a AccessGuard>,
}

impl Drop for AccessToken<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.active.set(false);
    }
}
