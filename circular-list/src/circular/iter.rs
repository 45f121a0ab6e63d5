use core::{fmt, iter::FusedIterator, slice};

use super::CircularArrayList;

/// An iterator over the elements of a [CircularArrayList].
///
/// This `struct` is created by [CircularArrayList::iter] and [CircularArrayList::range].
pub struct Iter<'a, T: 'a> {
    i1: slice::Iter<'a, Option<T>>,
    i2: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            i1: self.i1.clone(),
            i2: self.i2.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(i1: slice::Iter<'a, Option<T>>, i2: slice::Iter<'a, Option<T>>) -> Self {
        Self { i1, i2 }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.i1.next() {
            Some(slot) => slot.as_ref(),
            None => {
                // Once the first half is exhausted, swap so the common forward-only case keeps
                // taking the first branch.
                core::mem::swap(&mut self.i1, &mut self.i2);
                self.i1.next()?.as_ref()
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn fold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, Self::Item) -> Acc,
    {
        let accum = self.i1.flatten().fold(accum, &mut f);
        self.i2.flatten().fold(accum, &mut f)
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.i2.next_back() {
            Some(slot) => slot.as_ref(),
            None => {
                core::mem::swap(&mut self.i1, &mut self.i2);
                self.i2.next_back()?.as_ref()
            }
        }
    }

    fn rfold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, Self::Item) -> Acc,
    {
        let accum = self.i2.flatten().rfold(accum, &mut f);
        self.i1.flatten().rfold(accum, &mut f)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.i1.len() + self.i2.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a [CircularArrayList].
///
/// This `struct` is created by [CircularArrayList::iter_mut].
pub struct IterMut<'a, T: 'a> {
    i1: slice::IterMut<'a, Option<T>>,
    i2: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(
        i1: slice::IterMut<'a, Option<T>>,
        i2: slice::IterMut<'a, Option<T>>,
    ) -> Self {
        Self { i1, i2 }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.i1.as_slice())
            .field(&self.i2.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.i1.next() {
            Some(slot) => slot.as_mut(),
            None => {
                core::mem::swap(&mut self.i1, &mut self.i2);
                self.i1.next()?.as_mut()
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    #[inline]
    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.i2.next_back() {
            Some(slot) => slot.as_mut(),
            None => {
                core::mem::swap(&mut self.i1, &mut self.i2);
                self.i2.next_back()?.as_mut()
            }
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.i1.len() + self.i2.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [CircularArrayList].
///
/// This `struct` is created by the [`into_iter`] method on [CircularArrayList] (provided by the
/// [IntoIterator] trait).
///
/// [`into_iter`]: CircularArrayList::into_iter
#[derive(Clone)]
pub struct IntoIter<T> {
    inner: CircularArrayList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(inner: CircularArrayList<T>) -> Self {
        Self { inner }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn last(mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::*;

    /// A list whose contents wrap around the end of the backing array
    fn wrapped() -> CircularArrayList<u32> {
        let mut list = CircularArrayList::new();
        list.extend([3, 4, 5, 6]);
        list.push_front(2);
        list.push_front(1);
        list.push_front(0);
        assert_eq!(list.head, 5);
        list
    }

    #[test]
    fn iter_crosses_the_seam_in_both_directions() {
        let list = wrapped();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(list.iter().len(), 7);
        assert_eq!(list.iter().last(), Some(&6));
        assert_eq!(list.iter().fold(0, |acc, x| acc + x), 21);
        assert_eq!(list.iter().rfold(Vec::new(), |mut acc, x| {
            acc.push(*x);
            acc
        }), [6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list = wrapped();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_crosses_the_seam() {
        let mut list = wrapped();
        for elem in list.iter_mut() {
            *elem *= 10;
        }
        assert_eq!(list, [0, 10, 20, 30, 40, 50, 60]);
        if let Some(last) = list.iter_mut().next_back() {
            *last = 7;
        }
        assert_eq!(list.back(), Some(&7));
        list.assert_invariants();
    }

    #[test]
    fn range_covers_a_logical_window() {
        let list = wrapped();
        assert_eq!(list.range(1..4).copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(list.range(2..=5).copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
        assert_eq!(list.range(..).count(), 7);
        assert_eq!(list.range(7..).next(), None);
    }

    #[test]
    #[should_panic]
    fn range_past_the_end_panics() {
        let list = wrapped();
        let _ = list.range(3..8);
    }

    #[test]
    fn into_iter_is_double_ended() {
        let mut iter = wrapped().into_iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(6));
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }
}
