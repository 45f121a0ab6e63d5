use alloc::vec::Vec;
use core::{fmt, ops::Range};

use super::{CircularArrayList, Iter};
use crate::ListError;

/// A mutable view of a contiguous logical range of a [CircularArrayList].
///
/// Indices passed to a [SubList] are relative to the start of the view. Inserting into or
/// removing from the view changes the parent list in place, and the view grows or shrinks to
/// match. The view holds the only reference to its parent while it lives, so nothing else can
/// change the parent behind its back.
///
/// This `struct` is created by [CircularArrayList::sub_list].
pub struct SubList<'a, T> {
    list: &'a mut CircularArrayList<T>,
    offset: usize,
    len: usize,
}

impl<'a, T> SubList<'a, T> {
    pub(super) fn new(list: &'a mut CircularArrayList<T>, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= list.len());
        Self {
            list,
            offset: range.start,
            len: range.end - range.start,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.list.get(self.offset + index)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.list.get_mut(self.offset + index)
        } else {
            None
        }
    }

    /// Replace the element at `index` within the view, returning the element previously there
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(ListError::IndexOutOfBounds { index, len }),
        }
    }

    /// Insert `value` at `index` within the view. `index == len` appends to the view.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        ListError::check_position(index, self.len)?;
        let pos = self.list.physical_index(self.offset + index);
        let gap = self.list.insert_gap(pos, 1);
        self.list.elements[gap] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Append `value` to the end of the view, which is not necessarily the end of the list
    pub fn push(&mut self, value: T) {
        let pos = self.list.physical_index(self.offset + self.len);
        let gap = self.list.insert_gap(pos, 1);
        self.list.elements[gap] = Some(value);
        self.len += 1;
    }

    /// Remove and return the element at `index` within the view
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ListError::check_index(index, self.len)?;
        let pos = self.list.physical_index(self.offset + index);
        let value = self.list.take_live(pos);
        self.list.delete_range(pos, 1);
        self.len -= 1;
        Ok(value)
    }

    /// Remove every element of the view from the parent list
    pub fn clear(&mut self) {
        let pos = self.list.physical_index(self.offset);
        self.list.delete_range(pos, self.len);
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.list.range(self.offset..self.offset + self.len)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SubList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, 'b, T> IntoIterator for &'b SubList<'a, T> {
    type IntoIter = Iter<'b, T>;
    type Item = &'b T;

    fn into_iter(self) -> Iter<'b, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sub_list_reads_a_window() {
        let mut list = (0..10).collect::<CircularArrayList<u32>>();
        let view = list.sub_list(3..7).unwrap();
        assert_eq!(view.len(), 4);
        assert_eq!(view.get(0), Some(&3));
        assert_eq!(view.get(3), Some(&6));
        assert_eq!(view.get(4), None);
        assert_eq!(view.to_vec(), [3, 4, 5, 6]);
        assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), [6, 5, 4, 3]);
    }

    #[test]
    fn sub_list_rejects_bad_ranges() {
        let mut list = (0..4).collect::<CircularArrayList<u32>>();
        assert_eq!(
            list.sub_list(2..5).unwrap_err(),
            ListError::IndexOutOfBounds { index: 5, len: 4 }
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = list.sub_list(3..2);
        assert!(reversed.is_err());
        assert!(list.sub_list(4..4).unwrap().is_empty());
    }

    #[test]
    fn sub_list_mutations_reach_the_parent() {
        let mut list = CircularArrayList::<u32>::new();
        list.extend([4, 5, 6]);
        for value in (0..4).rev() {
            list.push_front(value);
        }
        // The contents now wrap: [0, 1, 2, 3, 4, 5, 6]
        {
            let mut view = list.sub_list(2..5).unwrap();
            assert_eq!(view.set(0, 20).unwrap(), 2);
            view.insert(1, 99).unwrap();
            view.push(100);
            assert_eq!(view.len(), 5);
            assert_eq!(view.remove(2).unwrap(), 3);
            assert_eq!(view.to_vec(), [20, 99, 4, 100]);
            assert_eq!(view.insert(5, 0), Err(ListError::IndexOutOfBounds { index: 5, len: 4 }));
            assert_eq!(view.remove(4), Err(ListError::IndexOutOfBounds { index: 4, len: 4 }));
        }
        list.assert_invariants();
        assert_eq!(list, [0, 1, 20, 99, 4, 100, 5, 6]);

        list.sub_list(1..6).unwrap().clear();
        list.assert_invariants();
        assert_eq!(list, [0, 5, 6]);
    }
}
