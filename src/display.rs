//! Text renderings of a `HashTable`.

use crate::HashTable;
use core::fmt;

/// Renders as
///
/// ```text
/// {
/// {key, value},
/// }
/// ```
///
/// with one line per entry in `entries()` order.
impl<K, V> fmt::Display for HashTable<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\n")?;
        for (k, v) in self.iter() {
            writeln!(f, "{{{}, {}}},", k, v)?;
        }
        f.write_str("}")
    }
}

impl<K, V> fmt::Debug for HashTable<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Bucket-by-bucket view returned by [`HashTable::structure`].
///
/// Displays one line per bucket: the index, then each chained entry as
/// `{key, value}, `. Useful for eyeballing how evenly keys spread.
pub struct Structure<'a, K, V> {
    table: &'a HashTable<K, V>,
}

impl<K, V> HashTable<K, V> {
    pub fn structure(&self) -> Structure<'_, K, V> {
        Structure { table: self }
    }
}

impl<K, V> fmt::Display for Structure<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, chain) in self.table.buckets().chains().iter().enumerate() {
            write!(f, "{}: ", idx)?;
            for e in chain {
                write!(f, "{{{}, {}}}, ", e.key, e.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
