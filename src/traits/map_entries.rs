use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

/// Read-only view over an associative container.
///
/// [`MapValidator`](crate::MapValidator) rules are written against this
/// trait so one validator works for both `HashMap` and `BTreeMap`. The
/// iteration order is whatever the underlying map provides; rules must not
/// depend on it.
pub trait MapEntries<K, V> {
    fn entry_count(&self) -> usize;

    fn lookup(&self, key: &K) -> Option<&V>;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;
}

impl<K, V, S> MapEntries<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> MapEntries<K, V> for BTreeMap<K, V> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}
