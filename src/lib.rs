//! chained-table: a generic hash table using separate chaining, with
//! load-factor driven doubling and halving of its bucket array.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small map whose resize behavior is fully predictable, so the
//!   capacity after any sequence of operations can be worked out by hand.
//! - Layers:
//!   - Buckets<K, V>: a `Vec` of chains plus a live-entry count. Knows how
//!     to place, find, overwrite, unlink, and re-place entries by a stored
//!     hash. Knows nothing about thresholds.
//!   - HashTable<K, V>: public API. Hashes keys, applies the grow/shrink
//!     policy, and guards every call against reentrancy in debug builds.
//!
//! Resize policy
//! - Capacity starts at 16 (`INITIAL_CAPACITY`).
//! - `insert` first doubles the table when `(len + 1) / capacity` would
//!   exceed 0.75. The check happens before the key is looked up, so an
//!   insert that only overwrites can still grow the table.
//! - `remove` first halves the table when `len / capacity` is below 0.3
//!   and capacity is above 16. The check uses the load before removal, so
//!   a remove whose key is absent can still shrink the table.
//! - A resize allocates a fresh bucket array and moves every entry into
//!   it; chains are never rebalanced in place.
//! - `clear` drops all entries and returns to 16 buckets.
//!
//! Hashing
//! - Keys are hashed once, with SipHash under fixed keys, and the `u64`
//!   is stored in the entry. Bucket index is `hash % capacity`; resizes
//!   reuse the stored hash and never call `K: Hash` again.
//! - There is no way to plug in another hasher.
//!
//! Constraints
//! - Single-threaded: the table is `Send` but not `Sync`. Callers sharing
//!   it across threads put it behind a `Mutex`.
//! - No mutable access to stored keys, values, or chains is handed out;
//!   `find` and iteration return shared references.
//! - Order of `iter`/`entries` is bucket index, then insertion order within
//!   a chain. It changes whenever the table resizes.
//!
//! Reentrancy
//! - Every public operation that runs user code (`K: Eq`, `K: Hash`)
//!   enters a debug-only `AccessGuard`. Calling back into the same table
//!   from those impls panics in debug builds instead of observing a table
//!   in the middle of a resize.
//!
//! Logging
//! - Resizes are logged at `trace` and `clear` at `debug` through the
//!   `log` facade. The crate never installs a logger.

mod buckets;
mod display;
mod hash_table;
mod hash_table_proptest;
mod iter;
mod reentrancy;

// Public surface
pub use display::Structure;
pub use hash_table::{HashTable, INITIAL_CAPACITY, MAX_LOAD_FACTOR, MIN_LOAD_FACTOR};
pub use iter::{IntoIter, Iter};
