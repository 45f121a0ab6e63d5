//! Small maps stored in a flat array of key/value pairs.
//!
//! For a handful of entries, a linear or binary search over a contiguous array beats hashing
//! or walking a tree, and the first `N` entries are stored inline without touching the heap.
use core::{borrow::Borrow, fmt};

use smallvec::SmallVec;

/// [ArrayMap] is a map which stores its entries in insertion order, in an array which can hold
/// `N` entries inline before spilling to the heap.
///
/// Lookups are a linear scan comparing keys for equality, so this is only suited to small maps,
/// or keys which have no useful ordering.
pub struct ArrayMap<K, V, const N: usize = 8> {
    entries: SmallVec<[(K, V); N]>,
}

impl<K, V, const N: usize> ArrayMap<K, V, N> {
    /// Returns a new, empty [ArrayMap]
    pub const fn new() -> Self {
        Self {
            entries: SmallVec::new_const(),
        }
    }

    /// Returns true if this map is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of key/value pairs in this map
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove every entry from the map
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over the entries of the map in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate over the entries of the map in insertion order, with mutable access to the values
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&K, &mut V)> + ExactSizeIterator + '_ {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K, V, const N: usize> ArrayMap<K, V, N>
where
    K: Eq,
{
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|(k, _)| k.borrow() == key)
    }

    /// Returns true if `key` has been inserted in this map
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the value under `key` in this map, if it exists
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).map(|idx| &self.entries[idx].1)
    }

    /// Returns a mutable reference to the value under `key` in this map, if it exists
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).map(|idx| &mut self.entries[idx].1)
    }

    /// Insert `value` under `key` in this map.
    ///
    /// If `key` was already present, its position is unchanged, and the value it replaced is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find(&key) {
            Some(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove the value stored under `key` in this map, returning it if present.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).map(|idx| self.entries.remove(idx).1)
    }
}

impl<K, V, const N: usize> Default for ArrayMap<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, const N: usize> Clone for ArrayMap<K, V, N> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for ArrayMap<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal if they contain the same entries, regardless of insertion order
impl<K: Eq, V: PartialEq, const N: usize> PartialEq for ArrayMap<K, V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Eq, V: Eq, const N: usize> Eq for ArrayMap<K, V, N> {}

impl<K: Eq, V, const N: usize> FromIterator<(K, V)> for ArrayMap<K, V, N> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V, const N: usize> Extend<(K, V)> for ArrayMap<K, V, N> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> IntoIterator for ArrayMap<K, V, N> {
    type IntoIter = smallvec::IntoIter<[(K, V); N]>;
    type Item = (K, V);

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// [SortedArrayMap] is a map which keeps its entries sorted by key, in an array which can hold
/// `N` entries inline before spilling to the heap.
///
/// Lookups are a binary search, while insertions and removals shift every entry after the
/// affected one. Iteration visits the entries in key order.
pub struct SortedArrayMap<K, V, const N: usize = 8> {
    entries: SmallVec<[(K, V); N]>,
}

impl<K, V, const N: usize> SortedArrayMap<K, V, N> {
    /// Returns a new, empty [SortedArrayMap]
    pub const fn new() -> Self {
        Self {
            entries: SmallVec::new_const(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over the entries of the map in key order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&K, &mut V)> + ExactSizeIterator + '_ {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the entry with the smallest key
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Returns the entry with the largest key
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }
}

impl<K, V, const N: usize> SortedArrayMap<K, V, N>
where
    K: Ord,
{
    fn find<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.binary_search_by(|(k, _)| k.borrow().cmp(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_ok()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).ok().map(|idx| &self.entries[idx].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).ok().map(|idx| &mut self.entries[idx].1)
    }

    /// Insert `value` under `key`, returning the value it replaced, if any
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find(&key) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (key, value));
                None
            }
        }
    }

    /// Remove the value stored under `key`, returning it if present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).ok().map(|idx| self.entries.remove(idx).1)
    }
}

impl<K, V, const N: usize> Default for SortedArrayMap<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, const N: usize> Clone for SortedArrayMap<K, V, N> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for SortedArrayMap<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, const N: usize> PartialEq for SortedArrayMap<K, V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, const N: usize> Eq for SortedArrayMap<K, V, N> {}

impl<K: Ord, V, const N: usize> FromIterator<(K, V)> for SortedArrayMap<K, V, N> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> Extend<(K, V)> for SortedArrayMap<K, V, N> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> IntoIterator for SortedArrayMap<K, V, N> {
    type IntoIter = smallvec::IntoIter<[(K, V); N]>;
    type Item = (K, V);

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
