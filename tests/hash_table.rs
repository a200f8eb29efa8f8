// HashTable integration suite.
//
// Each test documents what behavior is being verified. The core invariants
// exercised:
// - Round-trip: find returns the most recently inserted value for a key.
// - Overwrite: inserting an existing key replaces the value, len unchanged.
// - Absence: find/remove on a missing key return None and change nothing
//   observable besides a possible shrink.
// - Resize: capacity doubles at the 0.75 threshold and halves at 0.3,
//   never below 16, and no entry is lost either way.
// - Clear: idempotent, resets len and capacity.
use chained_table::{HashTable, INITIAL_CAPACITY};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::thread;

fn a(n: usize) -> String {
    "a".repeat(n)
}

fn thirty_keys() -> HashTable<String, usize> {
    let mut t = HashTable::new();
    for n in 1..=30 {
        t.insert(a(n), n);
    }
    t
}

// Test: the 30-key growth scenario.
// Verifies: len is 30, capacity went 16 -> 32 -> 64, "a"*25 maps to 25.
#[test]
fn thirty_keys_grow_to_sixty_four() {
    let mut t = HashTable::new();
    let mut capacities = vec![t.capacity()];
    for n in 1..=30 {
        t.insert(a(n), n);
        if capacities.last() != Some(&t.capacity()) {
            capacities.push(t.capacity());
        }
    }
    assert_eq!(t.len(), 30);
    assert_eq!(capacities, [16, 32, 64]);
    assert_eq!(t.find(a(25).as_str()), Some(&25));
}

// Test: overwrite semantics.
// Verifies: the second insert returns the old value and len is unchanged.
#[test]
fn overwrite_keeps_size() {
    let mut t = thirty_keys();
    let before = t.len();
    assert_eq!(t.insert("aaaaa".to_string(), 100), Some(5));
    assert_eq!(t.find("aaaaa"), Some(&100));
    assert_eq!(t.len(), before);
}

// Test: removing an absent key.
// Verifies: returns None and len is unchanged.
#[test]
fn remove_absent_key() {
    let mut t = thirty_keys();
    assert_eq!(t.remove("b"), None);
    assert_eq!(t.len(), 30);

    let mut empty: HashTable<String, i32> = HashTable::new();
    assert_eq!(empty.remove("anything"), None);
    assert_eq!(empty.len(), 0);
}

// Test: remove returns the prior value and the key stops resolving.
#[test]
fn remove_present_key() {
    let mut t = thirty_keys();
    assert_eq!(t.remove(a(10).as_str()), Some(10));
    assert_eq!(t.find(a(10).as_str()), None);
    assert!(!t.contains_key(a(10).as_str()));
    assert_eq!(t.len(), 29);
    assert_eq!(t.remove(a(10).as_str()), None);
}

// Test: find on a missing key is not an error.
#[test]
fn find_absent_is_none() {
    let t = thirty_keys();
    assert_eq!(t.find(""), None);
    assert_eq!(t.find(a(31).as_str()), None);
}

// Test: clear after a populated table, twice.
// Verifies: len 0, capacity 16, every old key absent; table reusable.
#[test]
fn clear_twice_is_clear_once() {
    let mut t = thirty_keys();
    t.clear();
    t.clear();
    assert_eq!(t.len(), 0);
    assert!(t.is_empty());
    assert_eq!(t.capacity(), INITIAL_CAPACITY);
    for n in 1..=30 {
        assert!(t.find(a(n).as_str()).is_none());
    }

    let words = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    for (i, w) in words.iter().enumerate() {
        t.insert(w.to_string(), i + 1);
    }
    assert_eq!(t.len(), 10);
    assert_eq!(t.find("seven"), Some(&7));
}

// Test: entries() is a full snapshot.
// Verifies: length equals len, one row per key, values match.
#[test]
fn entries_snapshot_matches_contents() {
    let t = thirty_keys();
    let rows = t.entries();
    assert_eq!(rows.len(), t.len());
    let keys: BTreeSet<&String> = rows.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys.len(), 30);
    for (k, v) in rows {
        assert_eq!(k.len(), *v);
    }
}

// Test: size invariant over a mixed workload.
// Verifies: len == distinct inserted - successfully removed.
#[test]
fn size_tracks_distinct_keys() {
    let mut t = HashTable::new();
    let mut removed = 0;
    for i in 0..500u32 {
        t.insert(i % 300, i);
    }
    for i in (0..300u32).step_by(3) {
        if t.remove(&i).is_some() {
            removed += 1;
        }
    }
    for i in (0..300u32).step_by(3) {
        assert!(t.remove(&i).is_none());
    }
    assert_eq!(t.len(), 300 - removed);
    for i in 0..300u32 {
        let expected = if i % 3 == 0 {
            None
        } else if i < 200 {
            Some(i + 300)
        } else {
            Some(i)
        };
        assert_eq!(t.find(&i).copied(), expected);
    }
}

// Test: load factor bound after every insert, and shrinking on drain.
// Verifies: load never exceeds 0.75, capacity ends back at 16.
#[test]
fn load_factor_stays_bounded() {
    let mut t = HashTable::new();
    for i in 0..1000u64 {
        t.insert(i, ());
        assert!(t.load_factor() <= 0.75, "load {} at {}", t.load_factor(), i);
    }
    assert_eq!(t.capacity(), 2048);
    let mut last = t.capacity();
    for i in 0..1000u64 {
        t.remove(&i);
        assert!(t.capacity() == last || t.capacity() == last / 2);
        assert!(t.capacity() >= INITIAL_CAPACITY);
        last = t.capacity();
    }
    assert!(t.is_empty());
    assert_eq!(t.capacity(), INITIAL_CAPACITY);
}

// Test: collecting and extending go through insert.
// Verifies: later duplicates win.
#[test]
fn from_iter_and_extend_overwrite() {
    let mut t: HashTable<&str, i32> = vec![("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
    assert_eq!(t.len(), 2);
    assert_eq!(t.find("x"), Some(&3));
    t.extend([("y", 20), ("z", 30)]);
    assert_eq!(t.len(), 3);
    assert_eq!(t.find("y"), Some(&20));
    assert_eq!(t.find("z"), Some(&30));
}

// Test: owned iteration hands back every pair.
#[test]
fn into_iter_drains_all() {
    let t = thirty_keys();
    let mut pairs: Vec<(String, usize)> = t.into_iter().collect();
    pairs.sort_by_key(|(_, v)| *v);
    assert_eq!(pairs.len(), 30);
    assert_eq!(pairs[0], ("a".to_string(), 1));
    assert_eq!(pairs[29], (a(30), 30));
}

// Test: the display form lists every entry in braces.
#[test]
fn display_form() {
    let mut t = HashTable::new();
    t.insert("only".to_string(), 1);
    assert_eq!(t.to_string(), "{\n{only, 1},\n}");
    let structure = t.structure().to_string();
    assert_eq!(structure.lines().count(), INITIAL_CAPACITY);
    assert_eq!(structure.matches("{only, 1}, ").count(), 1);
}

// Test: sharing across threads requires external locking.
// Verifies: a Mutex-wrapped table works from several threads.
#[test]
fn shared_behind_mutex() {
    let t = Arc::new(Mutex::new(HashTable::new()));
    let handles: Vec<_> = (0..4u32)
        .map(|w| {
            let t = Arc::clone(&t);
            thread::spawn(move || {
                for i in 0..100u32 {
                    t.lock().unwrap().insert(w * 1000 + i, i);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let t = t.lock().unwrap();
    assert_eq!(t.len(), 400);
    assert_eq!(t.find(&3099), Some(&99));
}
