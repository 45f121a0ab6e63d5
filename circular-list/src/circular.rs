mod cursor;
mod gap;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod sublist;

use alloc::{boxed::Box, vec::Vec};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, Index, IndexMut, Range, RangeBounds},
};

pub use self::{
    cursor::ListCursor,
    iter::{IntoIter, Iter, IterMut},
    sublist::SubList,
};
use crate::ListError;

/// The smallest capacity a [CircularArrayList] is ever allocated with
pub const MIN_CAPACITY: usize = 8;

/// The largest capacity a [CircularArrayList] may grow to.
///
/// Since the backing array is never allowed to become completely full, a list can hold at most
/// `MAX_CAPACITY - 1` elements.
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 2);

/// A resizable, double-ended, random-access list backed by a single circular array.
///
/// [CircularArrayList] offers the operations of both a deque and a list:
///
/// * *O*(1) amortized [push_front](Self::push_front), [push_back](Self::push_back),
///   [pop_front](Self::pop_front) and [pop_back](Self::pop_back)
/// * *O*(1) indexed [get](Self::get) and [set](Self::set)
/// * [insert](Self::insert), [remove](Self::remove), [insert_all](Self::insert_all) and
///   [drain](Self::drain) anywhere in the list, moving only the shorter of the two spans on
///   either side of the mutation point
/// * a bidirectional, mutating [ListCursor] which detects structural changes made behind its
///   back, and mutable [SubList] views
///
/// The backing array always has a power-of-two capacity of at least [MIN_CAPACITY], and is
/// doubled whenever an insertion would otherwise fill it completely. Capacity is never given
/// back: removing elements does not shrink the array.
pub struct CircularArrayList<T> {
    /// The backing array.
    ///
    /// `elements.len()` is a power of two `>= MIN_CAPACITY`. The slots in the circular interval
    /// `[head, tail)` hold the live elements in logical order and are all `Some`; every other
    /// slot is `None`.
    elements: Box<[Option<T>]>,
    /// The physical index of the first element, or `tail` if the list is empty
    head: usize,
    /// The physical index one past the last element
    tail: usize,
}

impl<T> Default for CircularArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len());
        list.extend(self.iter().cloned());
        list
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> CircularArrayList<T> {
    /// Returns a new, empty [CircularArrayList] with a capacity of [MIN_CAPACITY]
    pub fn new() -> Self {
        Self {
            elements: empty_slots(MIN_CAPACITY),
            head: 0,
            tail: 0,
        }
    }

    /// Create an empty list which can hold at least `expected` elements without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if `expected` elements cannot fit in a list of [MAX_CAPACITY].
    pub fn with_capacity(expected: usize) -> Self {
        let capacity = capacity_for(expected).unwrap_or_else(|_| capacity_overflow());
        Self {
            elements: empty_slots(capacity),
            head: 0,
            tail: 0,
        }
    }

    /// Build a list from an iterator which reports its exact length, allocating exactly once
    pub(crate) fn from_exact_iter<I>(iter: I) -> Self
    where
        I: ExactSizeIterator<Item = T>,
    {
        let mut list = Self::with_capacity(iter.len());
        for item in iter {
            list.push_back(item);
        }
        list
    }

    /// Returns the number of elements in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask()
    }

    /// Returns true if the list contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the size of the backing array.
    ///
    /// This is always a power of two, and always strictly greater than [Self::len].
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.elements.len() - 1
    }

    /// Map a logical index to the physical slot which holds it
    #[inline]
    fn physical_index(&self, logical: usize) -> usize {
        self.head.wrapping_add(logical) & self.mask()
    }

    /// Map a physical slot to the logical index it represents
    #[inline]
    fn logical_index(&self, physical: usize) -> usize {
        physical.wrapping_sub(self.head) & self.mask()
    }

    #[inline]
    fn wrap_add(&self, physical: usize, addend: usize) -> usize {
        physical.wrapping_add(addend) & self.mask()
    }

    #[inline]
    fn wrap_sub(&self, physical: usize, subtrahend: usize) -> usize {
        physical.wrapping_sub(subtrahend) & self.mask()
    }

    /// Returns true if adding one more element would fill the backing array
    #[inline]
    fn is_full(&self) -> bool {
        self.len() + 1 == self.capacity()
    }

    /// Take the element out of a slot that is known to be live
    #[inline]
    fn take_live(&mut self, physical: usize) -> T {
        match self.elements[physical].take() {
            Some(value) => value,
            None => unoccupied_slot(physical),
        }
    }

    #[inline]
    fn live_mut(&mut self, physical: usize) -> &mut T {
        match self.elements[physical].as_mut() {
            Some(value) => value,
            None => unoccupied_slot(physical),
        }
    }

    /// Double the capacity of the backing array.
    ///
    /// Must only be called when the array is about to become full.
    #[inline(never)]
    fn grow(&mut self) {
        debug_assert!(self.is_full());
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(capacity) if capacity <= MAX_CAPACITY => capacity,
            _ => capacity_overflow(),
        };
        log::trace!(
            target: "circular-list:grow",
            "growing capacity from {old_capacity} to {new_capacity} (len = {})",
            self.len()
        );
        self.relocate(new_capacity, 0, 0);
        debug_assert!(!self.is_full());
    }

    /// Move every live element into a new backing array of `new_capacity` slots, leaving
    /// `gap_len` unoccupied slots starting at logical index `gap_at`.
    ///
    /// Afterwards `head == 0` and the gap, if any, starts at physical index `gap_at`. This is the
    /// only operation that re-linearizes the buffer, and it invalidates every physical index
    /// computed before the call.
    fn relocate(&mut self, new_capacity: usize, gap_at: usize, gap_len: usize) {
        let len = self.len();
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(len + gap_len < new_capacity);
        debug_assert!(gap_at <= len);

        // The new array is fully built before any field is touched, so a failed allocation
        // leaves the list as it was.
        let mut slots = empty_slots(new_capacity);
        let (front, back) = self.slot_ranges(0, len);
        for (logical, physical) in front.chain(back).enumerate() {
            let dst = if logical < gap_at {
                logical
            } else {
                logical + gap_len
            };
            slots[dst] = self.elements[physical].take();
        }

        self.elements = slots;
        self.head = 0;
        self.tail = len + gap_len;
    }

    /// Given a logical range `[start, end)`, return the (at most) two physical ranges that
    /// hold it, in logical order.
    fn slot_ranges(&self, start: usize, end: usize) -> (Range<usize>, Range<usize>) {
        debug_assert!(start <= end && end <= self.len());
        let len = end - start;
        if len == 0 {
            return (0..0, 0..0);
        }

        let wrapped_start = self.physical_index(start);
        let head_len = self.capacity() - wrapped_start;
        if head_len >= len {
            (wrapped_start..wrapped_start + len, 0..0)
        } else {
            (wrapped_start..self.capacity(), 0..(len - head_len))
        }
    }

    /// Reserve room for at least `additional` more elements
    ///
    /// # Panics
    ///
    /// Panics if the resulting capacity would exceed [MAX_CAPACITY].
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            debug_assert_eq!(err, ListError::CapacityOverflow);
            capacity_overflow()
        }
    }

    /// Reserve room for at least `additional` more elements, returning an error rather than
    /// panicking if the resulting capacity would exceed [MAX_CAPACITY].
    ///
    /// On error the list is left untouched.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ListError> {
        let wanted = self.len().checked_add(additional).ok_or(ListError::CapacityOverflow)?;
        let capacity = capacity_for(wanted)?;
        if capacity > self.capacity() {
            log::trace!(
                target: "circular-list:realloc",
                "reserving {additional} more slots, capacity {} -> {capacity}",
                self.capacity()
            );
            let len = self.len();
            self.relocate(capacity, len, 0);
        }
        Ok(())
    }

    /// Prepend an element to the list
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        self.head = self.wrap_sub(self.head, 1);
        debug_assert!(self.elements[self.head].is_none());
        self.elements[self.head] = Some(value);
    }

    /// Append an element to the list
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        debug_assert!(self.elements[self.tail].is_none());
        self.elements[self.tail] = Some(value);
        self.tail = self.wrap_add(self.tail, 1);
    }

    /// Push an element on the front of the list, treating it as a stack.
    ///
    /// This is the same as [Self::push_front].
    #[inline]
    pub fn push(&mut self, value: T) {
        self.push_front(value)
    }

    /// Append an element to the back of the list, treating it as a queue.
    ///
    /// This is the same as [Self::push_back], and always returns `true`.
    #[inline]
    pub fn offer(&mut self, value: T) -> bool {
        self.push_back(value);
        true
    }

    /// Remove and return the first element, or `None` if the list is empty
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.take_live(self.head);
        self.head = self.wrap_add(self.head, 1);
        Some(value)
    }

    /// Remove and return the last element, or `None` if the list is empty
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.wrap_sub(self.tail, 1);
        Some(self.take_live(self.tail))
    }

    /// Pop an element from the front of the list, treating it as a stack.
    ///
    /// This is the same as [Self::pop_front].
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    /// Remove the element at the head of the list, treating it as a queue.
    ///
    /// This is the same as [Self::pop_front].
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.pop_front()
    }

    /// Like [Self::pop_front], but reports an empty list as [ListError::Empty]
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        self.pop_front().ok_or(ListError::Empty)
    }

    /// Like [Self::pop_back], but reports an empty list as [ListError::Empty]
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        self.pop_back().ok_or(ListError::Empty)
    }

    /// Get a reference to the first element, if there is one
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Get a mutable reference to the first element, if there is one
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Get a reference to the last element, if there is one
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().wrapping_sub(1))
    }

    /// Get a mutable reference to the last element, if there is one
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len().wrapping_sub(1))
    }

    /// Get a reference to the element at `index`, or `None` if out of bounds.
    ///
    /// Element at index 0 is the front of the list.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.elements[self.physical_index(index)].as_ref()
        } else {
            None
        }
    }

    /// Get a mutable reference to the element at `index`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let physical = self.physical_index(index);
            self.elements[physical].as_mut()
        } else {
            None
        }
    }

    /// Replace the element at `index` with `value`, returning the element previously there
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(ListError::IndexOutOfBounds { index, len }),
        }
    }

    /// Swap the elements at indices `i` and `j`, which may be equal
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ListError> {
        let len = self.len();
        ListError::check_index(i, len)?;
        ListError::check_index(j, len)?;
        let pi = self.physical_index(i);
        let pj = self.physical_index(j);
        self.elements.swap(pi, pj);
        Ok(())
    }

    /// Insert `value` at `index`, shifting the elements on whichever side of `index` is shorter.
    ///
    /// `index == len` appends to the list.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        ListError::check_position(index, self.len())?;
        let pos = self.physical_index(index);
        let gap = self.insert_gap(pos, 1);
        self.elements[gap] = Some(value);
        Ok(())
    }

    /// Insert every item produced by `items` starting at `index`, preserving their order.
    ///
    /// The items are placed with a single gap, so at most `len` existing elements move no
    /// matter how many items are inserted.
    pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        ListError::check_position(index, self.len())?;
        let items = items.into_iter().collect::<Vec<_>>();
        if items.is_empty() {
            return Ok(());
        }
        let pos = self.physical_index(index);
        let gap = self.insert_gap(pos, items.len());
        for (offset, item) in items.into_iter().enumerate() {
            let slot = self.wrap_add(gap, offset);
            self.elements[slot] = Some(item);
        }
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ListError::check_index(index, self.len())?;
        let pos = self.physical_index(index);
        let value = self.take_live(pos);
        self.delete_range(pos, 1);
        Ok(value)
    }

    /// Remove the elements in `range`
    pub fn remove_range<R>(&mut self, range: R) -> Result<(), ListError>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = to_range(range, self.len())?;
        let pos = self.physical_index(start);
        self.delete_range(pos, end - start);
        Ok(())
    }

    /// Remove the elements in `range`, returning them as an iterator
    ///
    /// # Panics
    ///
    /// Panics if the start of the range is greater than its end, or if the end of the range is
    /// greater than the length of the list.
    pub fn drain<R>(&mut self, range: R) -> alloc::vec::IntoIter<T>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = to_range(range, self.len()).unwrap_or_else(|err| panic!("{err}"));
        let pos = self.physical_index(start);
        let mut drained = Vec::with_capacity(end - start);
        for offset in 0..(end - start) {
            let slot = self.wrap_add(pos, offset);
            drained.push(self.take_live(slot));
        }
        self.delete_range(pos, end - start);
        drained.into_iter()
    }

    /// Shorten the list to `len` elements, dropping the rest.
    ///
    /// Has no effect if `len` is greater than or equal to the current length.
    pub fn truncate(&mut self, len: usize) {
        let current = self.len();
        if len < current {
            let pos = self.physical_index(len);
            self.delete_range(pos, current - len);
        }
    }

    /// Remove every element from the list.
    ///
    /// The capacity of the list is retained.
    pub fn clear(&mut self) {
        let (front, back) = self.slot_ranges(0, self.len());
        for slot in front.chain(back) {
            self.elements[slot] = None;
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Retain only the elements for which `f` returns true, preserving their order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_mut(|elem| f(elem));
    }

    /// Retain only the elements for which `f` returns true, preserving their order.
    ///
    /// Each element is visited exactly once, in order.
    pub fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let len = self.len();
        let mut kept = 0;
        for index in 0..len {
            let src = self.physical_index(index);
            if f(self.live_mut(src)) {
                if kept != index {
                    let dst = self.physical_index(kept);
                    self.elements.swap(src, dst);
                }
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// Returns true if the list contains an element equal to `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        // The array is never full, so a forward scan from `head` always reaches an unoccupied
        // slot at `tail`.
        let mut pos = self.head;
        while let Some(elem) = self.elements[pos].as_ref() {
            if elem == value {
                return Some(self.logical_index(pos));
            }
            pos = self.wrap_add(pos, 1);
        }
        None
    }

    /// Returns the index of the last element equal to `value`
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut pos = self.wrap_sub(self.tail, 1);
        while let Some(elem) = self.elements[pos].as_ref() {
            if elem == value {
                return Some(self.logical_index(pos));
            }
            pos = self.wrap_sub(pos, 1);
        }
        None
    }

    /// Remove the first element equal to `value`, returning true if one was found
    pub fn remove_first_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut pos = self.head;
        while let Some(elem) = self.elements[pos].as_ref() {
            if elem == value {
                self.delete(pos);
                return true;
            }
            pos = self.wrap_add(pos, 1);
        }
        false
    }

    /// Remove the last element equal to `value`, returning true if one was found
    pub fn remove_last_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut pos = self.wrap_sub(self.tail, 1);
        while let Some(elem) = self.elements[pos].as_ref() {
            if elem == value {
                self.delete(pos);
                return true;
            }
            pos = self.wrap_sub(pos, 1);
        }
        false
    }

    /// Copy the elements of this list, front to back, into a new [Vec]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Return a front-to-back iterator
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.slot_ranges(0, self.len());
        Iter::new(self.elements[front].iter(), self.elements[back].iter())
    }

    /// Return a front-to-back iterator that returns mutable references
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.slot_ranges(0, self.len());
        // `back`, when non-empty, always starts at 0 and ends before `front` begins
        let (low, high) = self.elements.split_at_mut(front.start);
        IterMut::new(high[..front.len()].iter_mut(), low[back].iter_mut())
    }

    /// Return an iterator over the elements in the given logical `range`
    ///
    /// # Panics
    ///
    /// Panics if the start of the range is greater than its end, or if the end of the range is
    /// greater than the length of the list.
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = to_range(range, self.len()).unwrap_or_else(|err| panic!("{err}"));
        let (front, back) = self.slot_ranges(start, end);
        Iter::new(self.elements[front].iter(), self.elements[back].iter())
    }

    /// Obtain a [ListCursor] positioned before the first element
    pub fn cursor(&self) -> ListCursor {
        ListCursor::new(self, 0)
    }

    /// Obtain a [ListCursor] positioned before the element at `index`.
    ///
    /// `index == len` positions the cursor after the last element.
    pub fn cursor_at(&self, index: usize) -> Result<ListCursor, ListError> {
        ListError::check_position(index, self.len())?;
        Ok(ListCursor::new(self, index))
    }

    /// Obtain a mutable view of the elements in the given logical `range`
    pub fn sub_list<R>(&mut self, range: R) -> Result<SubList<'_, T>, ListError>
    where
        R: RangeBounds<usize>,
    {
        let range = to_range(range, self.len())?;
        Ok(SubList::new(self, range))
    }

    /// Panics if any of the structural invariants of the list do not hold
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let capacity = self.capacity();
        assert!(capacity.is_power_of_two(), "capacity {capacity} is not a power of two");
        assert!(capacity >= MIN_CAPACITY, "capacity {capacity} is below the minimum");
        assert!(self.head < capacity, "head {} out of range", self.head);
        assert!(self.tail < capacity, "tail {} out of range", self.tail);
        let len = self.len();
        for logical in 0..capacity {
            let physical = self.physical_index(logical);
            let occupied = self.elements[physical].is_some();
            assert_eq!(
                occupied,
                logical < len,
                "slot {physical} (logical {logical}) has wrong occupancy for len {len}, head {}, \
                 tail {}",
                self.head,
                self.tail
            );
        }
    }
}

/// Returns the smallest power of two that is `>= min_capacity`, and never less than
/// [MIN_CAPACITY].
///
/// Saturates at [MAX_CAPACITY] rather than overflowing, so callers must check that the result is
/// actually large enough.
pub(crate) fn allocate_capacity(min_capacity: usize) -> usize {
    if min_capacity <= MIN_CAPACITY {
        MIN_CAPACITY
    } else if min_capacity >= MAX_CAPACITY {
        MAX_CAPACITY
    } else {
        min_capacity.next_power_of_two()
    }
}

/// Returns the capacity needed to hold `len` elements while keeping one slot free
fn capacity_for(len: usize) -> Result<usize, ListError> {
    let required = len.checked_add(1).ok_or(ListError::CapacityOverflow)?;
    let capacity = allocate_capacity(required);
    if capacity < required {
        Err(ListError::CapacityOverflow)
    } else {
        Ok(capacity)
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// Resolve `range` against a list of `len` elements
fn to_range<R>(range: R, len: usize) -> Result<Range<usize>, ListError>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => {
            start.checked_add(1).ok_or(ListError::IndexOutOfBounds { index: start, len })?
        }
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => {
            end.checked_add(1).ok_or(ListError::IndexOutOfBounds { index: end, len })?
        }
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    ListError::check_position(end, len)?;
    ListError::check_position(start, end)?;
    Ok(start..end)
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[cold]
#[track_caller]
fn unoccupied_slot(physical: usize) -> ! {
    panic!("slot {physical} lies within the live interval but is unoccupied")
}

impl<T: PartialEq> PartialEq for CircularArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularArrayList<T> {}

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }
    }
}

__impl_slice_eq1! { [] CircularArrayList<T>, Vec<U> }
__impl_slice_eq1! { [] CircularArrayList<T>, &[U] }
__impl_slice_eq1! { [] CircularArrayList<T>, &mut [U] }
__impl_slice_eq1! { [const N: usize] CircularArrayList<T>, [U; N] }
__impl_slice_eq1! { [const N: usize] CircularArrayList<T>, &[U; N] }

impl<T: PartialOrd> PartialOrd for CircularArrayList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for CircularArrayList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for CircularArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> Index<usize> for CircularArrayList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {index}", self.len()),
        }
    }
}

impl<T> IndexMut<usize> for CircularArrayList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> FromIterator<T> for CircularArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for CircularArrayList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    /// Consumes the list into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a CircularArrayList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularArrayList<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for CircularArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_exact_iter(items.into_iter())
    }
}

impl<T, const N: usize> From<[T; N]> for CircularArrayList<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_exact_iter(items.into_iter())
    }
}

impl<T> From<CircularArrayList<T>> for Vec<T> {
    fn from(list: CircularArrayList<T>) -> Self {
        list.into_iter().collect()
    }
}
