use core::{borrow::Borrow, fmt};

use crate::map::{ArrayMap, SortedArrayMap};

/// [ArraySet] is a set which stores its items in insertion order, in an array which can hold
/// `N` items inline before spilling to the heap.
///
/// Membership is tested with a linear scan, see [ArrayMap].
pub struct ArraySet<T, const N: usize = 8> {
    items: ArrayMap<T, (), N>,
}

impl<T, const N: usize> ArraySet<T, N> {
    pub const fn new() -> Self {
        Self {
            items: ArrayMap::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the items in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.keys()
    }
}

impl<T: Eq, const N: usize> ArraySet<T, N> {
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.items.contains_key(item)
    }

    /// Insert `item` into the set, returning true if it was not already present
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item, ()).is_none()
    }

    /// Remove `item` from the set, returning true if it was present
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.items.remove(item).is_some()
    }
}

impl<T, const N: usize> Default for ArraySet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for ArraySet<T, N> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ArraySet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq, const N: usize> PartialEq for ArraySet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, const N: usize> Eq for ArraySet<T, N> {}

impl<T: Eq, const N: usize> FromIterator<T> for ArraySet<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq, const N: usize> Extend<T> for ArraySet<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(|item| (item, ())));
    }
}

/// [SortedArraySet] is a set which keeps its items sorted, in an array which can hold `N` items
/// inline before spilling to the heap.
///
/// Membership is tested with a binary search, see [SortedArrayMap].
pub struct SortedArraySet<T, const N: usize = 8> {
    items: SortedArrayMap<T, (), N>,
}

impl<T, const N: usize> SortedArraySet<T, N> {
    pub const fn new() -> Self {
        Self {
            items: SortedArrayMap::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the items in ascending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.keys()
    }

    /// Returns the smallest item in the set
    pub fn first(&self) -> Option<&T> {
        self.items.first_key_value().map(|(k, _)| k)
    }

    /// Returns the largest item in the set
    pub fn last(&self) -> Option<&T> {
        self.items.last_key_value().map(|(k, _)| k)
    }
}

impl<T: Ord, const N: usize> SortedArraySet<T, N> {
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items.contains_key(item)
    }

    /// Insert `item` into the set, returning true if it was not already present
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item, ()).is_none()
    }

    /// Remove `item` from the set, returning true if it was present
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items.remove(item).is_some()
    }
}

impl<T, const N: usize> Default for SortedArraySet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for SortedArraySet<T, N> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for SortedArraySet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for SortedArraySet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, const N: usize> Eq for SortedArraySet<T, N> {}

impl<T: Ord, const N: usize> FromIterator<T> for SortedArraySet<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> Extend<T> for SortedArraySet<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(|item| (item, ())));
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String, vec::Vec};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn array_set_basics() {
        let mut set = ArraySet::<String, 2>::new();
        assert!(set.insert("b".into()));
        assert!(set.insert("a".into()));
        assert!(!set.insert("b".into()));
        assert!(set.insert("c".into()));
        assert_eq!(set.len(), 3);
        assert!(set.contains("a"));
        assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), ["b", "a", "c"]);

        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert_eq!(format!("{set:?}"), r#"{"b", "c"}"#);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn array_set_equality_ignores_order() {
        let a = [1, 2, 3].into_iter().collect::<ArraySet<_>>();
        let b = [3, 1, 2, 1].into_iter().collect::<ArraySet<_>>();
        assert_eq!(b.len(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn sorted_array_set_basics() {
        let mut set = [5, 3, 9, 3, 1].into_iter().collect::<SortedArraySet<u32>>();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 9]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&9));
        assert!(!set.insert(5));
        assert!(set.insert(4));
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [9, 5, 4, 3]);
        assert_eq!(format!("{set:?}"), "{3, 4, 5, 9}");
        assert!(SortedArraySet::<u8>::default().first().is_none());
    }
}
