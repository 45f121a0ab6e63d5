use super::CircularArrayList;
use crate::ListError;

/// A bidirectional, mutating cursor over a [CircularArrayList].
///
/// A [ListCursor] does not borrow the list it traverses. Instead, each operation takes the list
/// as an argument, which makes it possible to interleave cursor operations with direct access to
/// the list. To keep this sound, the cursor records the `head` and `tail` of the list whenever
/// it is created or modifies the list itself, and every operation other than
/// [has_next](Self::has_next)/[has_previous](Self::has_previous) first checks that neither has
/// changed. If either has, the operation fails with [ListError::ConcurrentModification] and the
/// cursor should be discarded.
///
/// The check is best effort: a sequence of structural changes which happens to restore both
/// `head` and `tail` to their previous values (e.g. a `pop_front` followed by a `push_front`)
/// is not detected. Replacing elements via [CircularArrayList::set] or [CircularArrayList::get_mut]
/// is not a structural change, and is always permitted.
///
/// A cursor must only ever be used with the list it was created from.
///
/// Conceptually the cursor sits *between* two elements: [next](Self::next) returns the element
/// after it and moves forward, [previous](Self::previous) returns the element before it and
/// moves backward. The element most recently returned by either is the *current* element, which
/// can be replaced with [set](Self::set) or removed with [remove](Self::remove).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCursor {
    /// The physical index of the element `next` would return
    cursor: usize,
    /// The physical index of the current element, if there is one
    last_returned: Option<usize>,
    expected_head: usize,
    expected_tail: usize,
    mask: usize,
}

impl ListCursor {
    pub(super) fn new<T>(list: &CircularArrayList<T>, index: usize) -> Self {
        Self {
            cursor: list.physical_index(index),
            last_returned: None,
            expected_head: list.head,
            expected_tail: list.tail,
            mask: list.mask(),
        }
    }

    /// Returns true if there is an element after the cursor
    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor != self.expected_tail
    }

    /// Returns true if there is an element before the cursor
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.cursor != self.expected_head
    }

    /// The logical index of the element that [Self::next] would return
    #[inline]
    pub fn next_index(&self) -> usize {
        self.cursor.wrapping_sub(self.expected_head) & self.mask
    }

    /// The logical index of the element that [Self::previous] would return.
    ///
    /// Returns `None` if the cursor is positioned before the first element.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Advance the cursor, returning the element it moved over.
    ///
    /// Returns `Ok(None)` if the cursor is already after the last element.
    pub fn next<'a, T>(
        &mut self,
        list: &'a CircularArrayList<T>,
    ) -> Result<Option<&'a T>, ListError> {
        self.check_for_comodification(list)?;
        if !self.has_next() {
            return Ok(None);
        }
        let pos = self.cursor;
        self.cursor = (pos + 1) & self.mask;
        self.last_returned = Some(pos);
        Ok(list.elements[pos].as_ref())
    }

    /// Move the cursor backward, returning the element it moved over.
    ///
    /// Returns `Ok(None)` if the cursor is already before the first element.
    pub fn previous<'a, T>(
        &mut self,
        list: &'a CircularArrayList<T>,
    ) -> Result<Option<&'a T>, ListError> {
        self.check_for_comodification(list)?;
        if !self.has_previous() {
            return Ok(None);
        }
        let pos = self.cursor.wrapping_sub(1) & self.mask;
        self.cursor = pos;
        self.last_returned = Some(pos);
        Ok(list.elements[pos].as_ref())
    }

    /// Insert `value` immediately before the cursor.
    ///
    /// A subsequent call to [Self::next] is unaffected, while [Self::previous] would return the
    /// new element. There is no current element afterwards.
    pub fn add<T>(&mut self, list: &mut CircularArrayList<T>, value: T) -> Result<(), ListError> {
        self.check_for_comodification(list)?;
        let gap = list.insert_gap(self.cursor, 1);
        list.elements[gap] = Some(value);
        self.cursor = list.wrap_add(gap, 1);
        self.last_returned = None;
        self.sync(list);
        Ok(())
    }

    /// Remove the current element, i.e. the one most recently returned by [Self::next] or
    /// [Self::previous], and return it.
    ///
    /// There is no current element afterwards.
    pub fn remove<T>(&mut self, list: &mut CircularArrayList<T>) -> Result<T, ListError> {
        self.check_for_comodification(list)?;
        let pos = self.last_returned.take().ok_or(ListError::NoCurrentElement)?;
        let value = list.take_live(pos);
        self.cursor = list.delete_range(pos, 1);
        self.sync(list);
        Ok(value)
    }

    /// Replace the current element with `value`, returning the element it replaced
    pub fn set<T>(&mut self, list: &mut CircularArrayList<T>, value: T) -> Result<T, ListError> {
        self.check_for_comodification(list)?;
        let pos = self.last_returned.ok_or(ListError::NoCurrentElement)?;
        Ok(core::mem::replace(list.live_mut(pos), value))
    }

    fn check_for_comodification<T>(&self, list: &CircularArrayList<T>) -> Result<(), ListError> {
        if list.head != self.expected_head || list.tail != self.expected_tail {
            log::debug!(
                target: "circular-list:cursor",
                "concurrent modification detected: expected head/tail {}/{}, found {}/{}",
                self.expected_head,
                self.expected_tail,
                list.head,
                list.tail
            );
            return Err(ListError::ConcurrentModification);
        }
        Ok(())
    }

    /// Refresh the snapshot after a structural change made through this cursor
    fn sync<T>(&mut self, list: &CircularArrayList<T>) {
        self.expected_head = list.head;
        self.expected_tail = list.tail;
        self.mask = list.mask();
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    use pretty_assertions::assert_eq;

    use super::*;

    fn init_logging() {
        let _ = env_logger::Builder::from_env("CIRCULAR_LIST_TRACE")
            .format_timestamp(None)
            .is_test(true)
            .try_init();
    }

    fn strings(items: &[&str]) -> CircularArrayList<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cursor_lifecycle() {
        let mut list = CircularArrayList::<String>::new();
        let mut it = list.cursor();
        assert!(!it.has_next());
        assert!(!it.has_previous());

        it.add(&mut list, "a".to_string()).unwrap();
        assert!(it.has_previous());
        assert_eq!(it.previous(&list).unwrap().map(String::as_str), Some("a"));
        assert_eq!(it.remove(&mut list).unwrap(), "a");
        assert!(list.is_empty());
        assert!(!it.has_next());
        assert!(!it.has_previous());
        list.assert_invariants();
    }

    #[test]
    fn cursor_walks_forward_and_backward() {
        let list = strings(&["a", "b", "c"]);
        let mut it = list.cursor();
        let mut forward = Vec::new();
        while let Some(s) = it.next(&list).unwrap() {
            forward.push(s.as_str());
        }
        assert_eq!(forward, ["a", "b", "c"]);
        assert_eq!(it.next_index(), 3);

        let mut backward = Vec::new();
        while let Some(s) = it.previous(&list).unwrap() {
            backward.push(s.as_str());
        }
        assert_eq!(backward, ["c", "b", "a"]);
        assert_eq!(it.previous_index(), None);
    }

    #[test]
    fn cursor_at_starts_mid_list() {
        let list = strings(&["a", "b", "c", "d"]);
        let mut it = list.cursor_at(2).unwrap();
        assert_eq!(it.next_index(), 2);
        assert_eq!(it.previous_index(), Some(1));
        assert_eq!(it.next(&list).unwrap().map(String::as_str), Some("c"));
        assert!(list.cursor_at(4).is_ok());
        assert_eq!(
            list.cursor_at(5).unwrap_err(),
            ListError::IndexOutOfBounds { index: 5, len: 4 }
        );
    }

    #[test]
    fn cursor_detects_external_remove_first() {
        init_logging();

        let mut list = strings(&["a", "b", "c"]);
        let mut it = list.cursor();
        assert_eq!(list.pop_front().as_deref(), Some("a"));
        assert_eq!(it.next(&list), Err(ListError::ConcurrentModification));
    }

    #[test]
    fn cursor_detects_external_push_back() {
        init_logging();

        // Only `tail` moves here, which a check requiring both pointers to change would miss
        let mut list = strings(&["a", "b", "c"]);
        let mut it = list.cursor();
        assert!(it.next(&list).unwrap().is_some());
        list.push_back("d".to_string());
        assert_eq!(it.next(&list), Err(ListError::ConcurrentModification));
        assert_eq!(it.remove(&mut list), Err(ListError::ConcurrentModification));
        assert_eq!(it.add(&mut list, "x".to_string()), Err(ListError::ConcurrentModification));
        assert_eq!(list, ["a", "b", "c", "d"]);
    }

    #[test]
    fn cursor_tolerates_external_set() {
        let mut list = strings(&["a", "b", "c"]);
        let mut it = list.cursor();
        assert!(it.next(&list).unwrap().is_some());
        list.set(2, "z".to_string()).unwrap();
        assert_eq!(it.next(&list).unwrap().map(String::as_str), Some("b"));
        assert_eq!(it.next(&list).unwrap().map(String::as_str), Some("z"));
    }

    #[test]
    fn cursor_remove_requires_a_current_element() {
        let mut list = strings(&["a", "b"]);
        let mut it = list.cursor();
        assert_eq!(it.remove(&mut list), Err(ListError::NoCurrentElement));
        assert_eq!(it.set(&mut list, "x".to_string()), Err(ListError::NoCurrentElement));

        it.next(&list).unwrap();
        assert_eq!(it.remove(&mut list).unwrap(), "a");
        assert_eq!(it.remove(&mut list), Err(ListError::NoCurrentElement));

        it.next(&list).unwrap();
        it.add(&mut list, "c".to_string()).unwrap();
        assert_eq!(it.set(&mut list, "x".to_string()), Err(ListError::NoCurrentElement));
        assert_eq!(list, ["b", "c"]);
    }

    #[test]
    fn cursor_set_replaces_current_element() {
        let mut list = strings(&["a", "b", "c"]);
        let mut it = list.cursor_at(3).unwrap();
        it.previous(&list).unwrap();
        it.previous(&list).unwrap();
        assert_eq!(it.set(&mut list, "B".to_string()).unwrap(), "b");
        assert_eq!(it.set(&mut list, "BB".to_string()).unwrap(), "B");
        assert_eq!(list, ["a", "BB", "c"]);
    }

    #[test]
    fn cursor_remove_while_iterating_forward() {
        let mut list = (0..20).collect::<CircularArrayList<u32>>();
        // Force the contents to wrap
        for _ in 0..25 {
            let front = list.pop_front().unwrap();
            list.push_back(front);
        }
        assert!(list.head > list.tail);
        let mut it = list.cursor();
        while let Some(&value) = it.next(&list).unwrap() {
            if value % 3 == 0 {
                it.remove(&mut list).unwrap();
            }
        }
        list.assert_invariants();
        let expected = (5..20).chain(0..5).filter(|v| v % 3 != 0).collect::<Vec<_>>();
        assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn cursor_remove_while_iterating_backward() {
        let mut list = (0..20).collect::<CircularArrayList<u32>>();
        let mut it = list.cursor_at(list.len()).unwrap();
        while let Some(&value) = it.previous(&list).unwrap() {
            if value % 2 == 0 {
                it.remove(&mut list).unwrap();
            }
        }
        list.assert_invariants();
        assert_eq!(list.to_vec(), (0..20).filter(|v| v % 2 != 0).collect::<Vec<_>>());
    }

    #[test]
    fn cursor_add_everywhere_with_growth() {
        init_logging();

        // Interleave new elements after every existing one, growing the list several times
        let mut list = (0..10).map(|v| v * 10).collect::<CircularArrayList<u32>>();
        let mut it = list.cursor();
        while let Some(&value) = it.next(&list).unwrap() {
            it.add(&mut list, value + 1).unwrap();
            it.add(&mut list, value + 2).unwrap();
        }
        list.assert_invariants();
        assert!(!it.has_next());
        assert_eq!(it.next_index(), 30);
        let expected = (0..10).flat_map(|v| [v * 10, v * 10 + 1, v * 10 + 2]).collect::<Vec<_>>();
        assert_eq!(list.to_vec(), expected);
    }
}
