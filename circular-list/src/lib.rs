//! Array-backed collections.
//!
//! The centerpiece of this crate is [CircularArrayList], a growable sequence stored in a single
//! power-of-two sized circular array. It supports amortized *O*(1) insertion and removal at both
//! ends, *O*(1) indexed access, and interior insertion/removal which moves only the shorter of
//! the two spans adjoining the mutation point.
//!
//! Alongside it live a handful of small, flat-array maps and sets ([ArrayMap], [SortedArrayMap],
//! [ArraySet] and [SortedArraySet]) for the common case of tiny collections where hashing or tree
//! structures are overkill.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod circular;
mod error;
pub mod map;
pub mod set;

pub use self::{
    circular::{CircularArrayList, ListCursor, SubList, MAX_CAPACITY, MIN_CAPACITY},
    error::ListError,
    map::{ArrayMap, SortedArrayMap},
    set::{ArraySet, SortedArraySet},
};
