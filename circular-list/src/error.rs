/// Errors reported by [crate::CircularArrayList] and its cursors.
///
/// None of these leave the list in an inconsistent state: every fallible operation validates its
/// inputs before touching the backing array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A logical index was outside the valid range for the operation.
    ///
    /// Reads and replacements accept `[0, len)`, insertions accept `[0, len]`.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The list was empty
    #[error("the list is empty")]
    Empty,
    /// The list was structurally modified by something other than the cursor observing it.
    #[error("the list was modified while a cursor was positioned over it")]
    ConcurrentModification,
    /// A cursor was asked to remove or replace its current element, but there is none.
    ///
    /// This happens if neither `next` nor `previous` has been called yet, or if `add` or `remove`
    /// has been called since the last call to either.
    #[error("the cursor has no current element")]
    NoCurrentElement,
    /// The requested capacity exceeds [crate::MAX_CAPACITY]
    #[error("capacity overflow")]
    CapacityOverflow,
}

impl ListError {
    /// Returns an [ListError::IndexOutOfBounds] unless `index < len`
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }

    /// Returns an [ListError::IndexOutOfBounds] unless `index <= len`
    #[inline]
    pub(crate) fn check_position(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }
}
