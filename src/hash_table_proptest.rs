#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// the bucket array directly.

use crate::hash_table::{HashTable, INITIAL_CAPACITY};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Same keys, but every one hashes alike so all land in one chain.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
struct Clash(String);
impl Hash for Clash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        0u8.hash(state);
    }
}

// Pool-indexed operations: indices shrink to earlier keys, the pool
// shrinks in length, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    RemoveAbsent(String),
    Find(usize),
    Contains(String),
    Clear,
    Entries,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            1 => "[A-Z]{1,4}".prop_map(OpI::RemoveAbsent),
            2 => idx.clone().prop_map(OpI::Find),
            1 => "[a-z]{0,6}".prop_map(OpI::Contains),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Entries),
        ];
        proptest::collection::vec(op, 1..200).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Structural invariants that must hold between calls.
fn check_structure<K, V>(t: &HashTable<K, V>) -> Result<(), TestCaseError>
where
    K: Eq + Hash + Ord + Clone + fmt::Debug,
{
    let b = t.buckets();
    let cap = b.capacity();
    prop_assert!(cap >= INITIAL_CAPACITY);
    prop_assert!(cap.is_power_of_two());
    // After any insert the load is at most 0.75.
    prop_assert!(t.len() * 4 <= cap * 3, "len {} over max load for {}", t.len(), cap);

    let mut total = 0;
    for (idx, chain) in b.chains().iter().enumerate() {
        let keys: BTreeSet<K> = chain.iter().map(|e| e.key.clone()).collect();
        prop_assert_eq!(keys.len(), chain.len(), "duplicate key in bucket {}", idx);
        for e in chain {
            prop_assert_eq!(b.index_for(e.hash), idx);
        }
        total += chain.len();
    }
    prop_assert_eq!(total, t.len());
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert returns the previous value and find returns the latest one.
// - remove returns the owned value and the key is gone afterward.
// - len equals the model's size; entries() has one row per key.
// - Every entry sits at hash mod capacity with distinct keys per chain.
// - Capacity stays a power of two, never below 16, load never above 0.75.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: HashTable<Key, i32> = HashTable::new();
        let mut model: HashMap<Key, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = Key(pool[i].clone());
                    prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k, v));
                }
                OpI::Remove(i) => {
                    let k = Key(pool[i].clone());
                    prop_assert_eq!(sut.remove(&k), model.remove(&k));
                    prop_assert!(sut.find(&k).is_none());
                }
                OpI::RemoveAbsent(s) => {
                    // Pool keys are lowercase, so this never hits.
                    let cap = sut.capacity();
                    let len = sut.len();
                    prop_assert_eq!(sut.remove(s.as_str()), None);
                    prop_assert_eq!(sut.len(), len);
                    let shrinks = cap > INITIAL_CAPACITY && len * 10 < cap * 3;
                    prop_assert_eq!(sut.capacity(), if shrinks { cap / 2 } else { cap });
                }
                OpI::Find(i) => {
                    let k = Key(pool[i].clone());
                    prop_assert_eq!(sut.find(&k), model.get(&k));
                }
                OpI::Contains(s) => {
                    let has_model = model.keys().any(|k| k.0 == s);
                    prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), INITIAL_CAPACITY);
                }
                OpI::Entries => {
                    let rows = sut.entries();
                    prop_assert_eq!(rows.len(), model.len());
                    let got: BTreeMap<Key, i32> =
                        rows.into_iter().map(|(k, v)| (k.clone(), *v)).collect();
                    let want: BTreeMap<Key, i32> = model.clone().into_iter().collect();
                    prop_assert_eq!(got, want);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            check_structure(&sut)?;
        }
    }
}

// Property: same model check under worst-case collisions. Every key shares
// one chain, so equality alone must tell entries apart.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let mut sut: HashTable<Clash, i32> = HashTable::new();
        let mut model: BTreeMap<Clash, i32> = BTreeMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = Clash(pool[i].clone());
                    prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k, v));
                }
                OpI::Remove(i) => {
                    let k = Clash(pool[i].clone());
                    prop_assert_eq!(sut.remove(&k), model.remove(&k));
                }
                OpI::RemoveAbsent(s) => {
                    prop_assert_eq!(sut.remove(&Clash(s)), None);
                }
                OpI::Find(i) => {
                    let k = Clash(pool[i].clone());
                    prop_assert_eq!(sut.find(&k), model.get(&k));
                }
                OpI::Contains(s) => {
                    let k = Clash(s);
                    prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                }
                OpI::Entries => {
                    let got: BTreeMap<Clash, i32> =
                        sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(&got, &model);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            let busy = sut.buckets().chains().iter().filter(|c| !c.is_empty()).count();
            prop_assert!(busy <= 1);
            check_structure(&sut)?;
        }
    }
}

// Property: a resize never changes the set of (key, value) pairs.
proptest! {
    #[test]
    fn prop_resize_preserves_entries(keys in proptest::collection::btree_set(any::<u32>(), 0..300)) {
        let mut t: HashTable<u32, u64> = HashTable::new();
        for &k in &keys {
            let before: BTreeSet<(u32, u64)> = t.iter().map(|(k, v)| (*k, *v)).collect();
            let cap = t.capacity();
            t.insert(k, u64::from(k) * 7);
            if t.capacity() != cap {
                let mut after: BTreeSet<(u32, u64)> = t.iter().map(|(k, v)| (*k, *v)).collect();
                after.remove(&(k, u64::from(k) * 7));
                prop_assert_eq!(before, after);
            }
        }
        for &k in &keys {
            let before: BTreeSet<(u32, u64)> = t.iter().map(|(k, v)| (*k, *v)).collect();
            let cap = t.capacity();
            prop_assert_eq!(t.remove(&k), Some(u64::from(k) * 7));
            if t.capacity() != cap {
                let mut after: BTreeSet<(u32, u64)> = t.iter().map(|(k, v)| (*k, *v)).collect();
                after.insert((k, u64::from(k) * 7));
                prop_assert_eq!(before, after);
            }
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.capacity(), INITIAL_CAPACITY);
    }
}
