//! Opening and closing holes in the middle of a [CircularArrayList].
//!
//! Every interior mutation of the list is expressed in terms of the primitives here. Each of
//! them moves only the shorter of the two spans adjoining the mutation point, so no single call
//! ever moves more than `len / 2` elements unless the backing array has to be reallocated.
//!
//! None of these functions validate their arguments against the logical bounds of the list; that
//! is the job of the public API built on top of them.
use super::{allocate_capacity, capacity_overflow, CircularArrayList};

impl<T> CircularArrayList<T> {
    /// Reserve `gap_len` contiguous unoccupied slots at physical position `pos`, which must lie
    /// within `[head, tail]` (inserting at `tail` appends).
    ///
    /// Returns the physical index of the first slot of the gap, which differs from `pos` if the
    /// span before `pos` was shifted toward the head, or the array was reallocated. The caller is
    /// expected to fill every slot of the gap before the list is next observed.
    pub(super) fn insert_gap(&mut self, pos: usize, gap_len: usize) -> usize {
        if gap_len == 0 {
            return pos;
        }

        let len = self.len();
        let before = self.logical_index(pos);
        debug_assert!(before <= len, "gap position {pos} is outside the live interval");
        let after = len - before;

        let required = match len.checked_add(gap_len).and_then(|n| n.checked_add(1)) {
            Some(required) => required,
            None => capacity_overflow(),
        };
        if required > self.capacity() {
            let new_capacity = allocate_capacity(required);
            if new_capacity < required {
                capacity_overflow();
            }
            log::trace!(
                target: "circular-list:realloc",
                "opening a gap of {gap_len} at index {before} requires reallocation, capacity {} \
                 -> {new_capacity}",
                self.capacity()
            );
            self.relocate(new_capacity, before, gap_len);
            return before;
        }

        if before < after {
            // Move [head, pos) back by `gap_len`
            //
            //        H       P         T
            // [. . . A B C D E F G H I . . .]
            // [. A B C D . . E F G H I . . .]
            //    H       G   P         T
            let old_head = self.head;
            self.shift_toward_head(old_head, before, gap_len);
            self.head = self.wrap_sub(old_head, gap_len);
            self.wrap_sub(pos, gap_len)
        } else {
            // Move [pos, tail) forward by `gap_len`
            //
            //        H           P     T
            // [. . . A B C D E F G H I . . .]
            // [. . . A B C D E F . . G H I .]
            //        H           G         T
            self.shift_toward_tail(pos, after, gap_len);
            self.tail = self.wrap_add(self.tail, gap_len);
            pos
        }
    }

    /// Remove the `range_len` elements starting at physical position `pos`, closing the hole
    /// they leave behind by shifting the shorter adjoining span over it.
    ///
    /// Any elements still present in the range are dropped. Returns the physical index of the
    /// element that followed the removed range, which is `tail` if the range extended to the end
    /// of the list.
    pub(super) fn delete_range(&mut self, pos: usize, range_len: usize) -> usize {
        if range_len == 0 {
            return pos;
        }

        let len = self.len();
        if range_len == len {
            self.clear();
            return self.tail;
        }

        let before = self.logical_index(pos);
        debug_assert!(before + range_len <= len, "range at {pos} extends past the live interval");
        let after = len - before - range_len;

        for offset in 0..range_len {
            let slot = self.wrap_add(pos, offset);
            self.elements[slot] = None;
        }

        if before < after {
            // Move [head, pos) forward over the hole
            let old_head = self.head;
            self.shift_toward_tail(old_head, before, range_len);
            self.head = self.wrap_add(old_head, range_len);
            self.wrap_add(pos, range_len)
        } else {
            // Move [pos + range_len, tail) back over the hole
            let next = self.wrap_add(pos, range_len);
            self.shift_toward_head(next, after, range_len);
            self.tail = self.wrap_sub(self.tail, range_len);
            pos
        }
    }

    /// Remove the single element at physical position `pos`.
    ///
    /// Returns true if the elements following `pos` were moved toward the front to close the
    /// hole, in which case a caller scanning forward must examine `pos` again, as it now holds
    /// the element that used to follow it. Returns false if instead the elements preceding `pos`
    /// were moved toward the back, in which case the following element did not move.
    pub(super) fn delete(&mut self, pos: usize) -> bool {
        let before = self.logical_index(pos);
        let after = self.len() - before - 1;
        self.delete_range(pos, 1);
        before >= after
    }

    /// Move the `count` elements starting at physical `start` forward by `distance` slots.
    ///
    /// The destination slots beyond the end of the span must be unoccupied.
    fn shift_toward_tail(&mut self, start: usize, count: usize, distance: usize) {
        debug_assert!(count + distance < self.capacity());
        let capacity = self.capacity();
        // Runs are moved back to front, each run ending where either the source or the
        // destination meets the physical end of the array.
        let mut remaining = count;
        while remaining > 0 {
            let src_end = match self.wrap_add(start, remaining) {
                0 => capacity,
                end => end,
            };
            let dst_end = match self.wrap_add(start, remaining + distance) {
                0 => capacity,
                end => end,
            };
            let run = remaining.min(src_end).min(dst_end);
            self.move_run(src_end - run, dst_end - run, run);
            remaining -= run;
        }
    }

    /// Move the `count` elements starting at physical `start` back by `distance` slots.
    ///
    /// The destination slots before the start of the span must be unoccupied.
    fn shift_toward_head(&mut self, start: usize, count: usize, distance: usize) {
        debug_assert!(count + distance < self.capacity());
        let capacity = self.capacity();
        // Runs are moved front to back, each run ending where either the source or the
        // destination meets the physical end of the array.
        let mut moved = 0;
        while moved < count {
            let src = self.wrap_add(start, moved);
            let dst = self.wrap_sub(src, distance);
            let run = (count - moved).min(capacity - src).min(capacity - dst);
            self.move_run(src, dst, run);
            moved += run;
        }
    }

    /// Move `len` slots from `src` to `dst`, neither of which wraps, leaving the vacated slots
    /// unoccupied. The two ranges may overlap.
    fn move_run(&mut self, src: usize, dst: usize, len: usize) {
        debug_assert!(src + len <= self.capacity() && dst + len <= self.capacity());
        if dst < src {
            for offset in 0..len {
                debug_assert!(self.elements[dst + offset].is_none());
                self.elements[dst + offset] = self.elements[src + offset].take();
            }
        } else if dst > src {
            for offset in (0..len).rev() {
                debug_assert!(self.elements[dst + offset].is_none());
                self.elements[dst + offset] = self.elements[src + offset].take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Build a list of capacity `capacity` holding `0..len`, with its head at `head`
    fn rotated(capacity: usize, head: usize, len: usize) -> CircularArrayList<usize> {
        let mut list = CircularArrayList::with_capacity(capacity - 1);
        assert_eq!(list.capacity(), capacity);
        list.head = head;
        list.tail = head;
        list.extend(0..len);
        assert_eq!(list.capacity(), capacity);
        list.assert_invariants();
        list
    }

    #[test]
    fn insert_gap_every_head_position_and_insertion_point() {
        // Every combination of head position, length and insertion point for a capacity of 16,
        // which covers every wraparound configuration of head, tail and the gap.
        let capacity = 16;
        for len in 0..capacity - 2 {
            for head in 0..capacity {
                for at in 0..=len {
                    for gap_len in 1..(capacity - len) {
                        let mut list = rotated(capacity, head, len);
                        let pos = list.physical_index(at);
                        let gap = list.insert_gap(pos, gap_len);
                        for offset in 0..gap_len {
                            let slot = list.wrap_add(gap, offset);
                            assert!(list.elements[slot].is_none());
                            list.elements[slot] = Some(100 + offset);
                        }
                        list.assert_invariants();

                        let mut expected = (0..len).collect::<Vec<_>>();
                        expected.splice(at..at, (0..gap_len).map(|offset| 100 + offset));
                        assert_eq!(list.to_vec(), expected, "head={head} at={at} gap={gap_len}");
                    }
                }
            }
        }
    }

    #[test]
    fn insert_gap_moves_only_the_shorter_span() {
        // Head side is shorter: head moves, tail stays put
        let mut list = rotated(16, 14, 10);
        let tail = list.tail;
        let pos = list.physical_index(2);
        let gap = list.insert_gap(pos, 3);
        assert_eq!(list.tail, tail);
        assert_eq!(list.head, 11);
        assert_eq!(gap, list.physical_index(2));

        // Tail side is shorter: tail moves, head stays put
        let mut list = rotated(16, 14, 10);
        let pos = list.physical_index(8);
        let gap = list.insert_gap(pos, 3);
        assert_eq!(list.head, 14);
        assert_eq!(list.tail, (14 + 13) & 15);
        assert_eq!(gap, pos);
    }

    #[test]
    fn insert_gap_reallocates_when_too_small() {
        let mut list = rotated(8, 5, 6);
        let pos = list.physical_index(4);
        let gap = list.insert_gap(pos, 4);
        assert_eq!(list.capacity(), 16);
        assert_eq!(list.head, 0);
        assert_eq!(gap, 4);
        for offset in 0..4 {
            list.elements[gap + offset] = Some(10 + offset);
        }
        list.assert_invariants();
        assert_eq!(list.to_vec(), [0, 1, 2, 3, 10, 11, 12, 13, 4, 5]);
    }

    #[test]
    fn insert_gap_of_zero_is_a_no_op() {
        let mut list = rotated(8, 6, 4);
        let pos = list.physical_index(1);
        assert_eq!(list.insert_gap(pos, 0), pos);
        assert_eq!((list.head, list.tail), (6, 2));
    }

    #[test]
    fn delete_range_every_head_position_and_range() {
        let capacity = 16;
        for len in 1..capacity {
            for head in 0..capacity {
                for at in 0..len {
                    for range_len in 1..=(len - at) {
                        let mut list = rotated(capacity, head, len);
                        let pos = list.physical_index(at);
                        let next = list.delete_range(pos, range_len);
                        list.assert_invariants();

                        let mut expected = (0..len).collect::<Vec<_>>();
                        expected.drain(at..at + range_len);
                        assert_eq!(list.to_vec(), expected, "head={head} at={at} n={range_len}");
                        match expected.get(at) {
                            Some(following) => assert_eq!(list.elements[next], Some(*following)),
                            None => assert_eq!(next, list.tail),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn delete_range_of_everything_clears() {
        let mut list = rotated(16, 12, 9);
        let head = list.head;
        assert_eq!(list.delete_range(head, 9), 0);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 16);
        list.assert_invariants();
    }

    #[test]
    fn delete_reports_which_span_moved() {
        // Removing near the back moves the back span toward the front
        let mut list = rotated(8, 6, 6);
        let pos = list.physical_index(4);
        assert!(list.delete(pos));
        assert_eq!(list.elements[pos], Some(5));
        assert_eq!(list.to_vec(), [0, 1, 2, 3, 5]);

        // Removing near the front moves the front span toward the back
        let mut list = rotated(8, 6, 6);
        let pos = list.physical_index(1);
        assert!(!list.delete(pos));
        assert_eq!(list.elements[list.wrap_add(pos, 1)], Some(2));
        assert_eq!(list.to_vec(), [0, 2, 3, 4, 5]);
    }

    #[test]
    fn delete_rotates_across_the_seam() {
        // The element at physical 0 has to move to the last physical slot
        let mut list = rotated(8, 4, 6);
        assert_eq!(list.elements[7], Some(3));
        assert_eq!(list.elements[0], Some(4));
        let pos = list.physical_index(3);
        assert_eq!(pos, 7);
        assert!(list.delete(pos));
        assert_eq!(list.elements[7], Some(4));
        assert_eq!(list.elements[0], Some(5));
        assert_eq!(list.tail, 1);
        list.assert_invariants();
        assert_eq!(list.to_vec(), [0, 1, 2, 4, 5]);
    }
}
