//! # Simple Vector
//!
//! The `simple_vec` crate provides a `#[no_std]` growable, contiguous array much like `std::Vec`,
//! built from two small layers.
//!
//! `ArrayBuf` is the sole owner of one fixed-size heap block. It can be moved, swapped,
//! released into a `Box<[T]>` or built by adopting one, but it can never be duplicated.
//!
//! `SimpleVec` owns exactly one `ArrayBuf` and tracks how many of its slots are live.
//! When it runs out of room it builds a new, larger buffer, moves the elements across
//! and only then swaps the new buffer in, so the old storage is freed last. Full vectors
//! grow to `max(2 * capacity, requested)`, giving amortized O(1) `push`.
//!
//! Copying a `SimpleVec` copies only the live elements, and the copy's capacity equals
//! the source's length.
//!
//! # Access checks
//! `at`/`at_mut` and `ArrayBuf::first` report failures as `SimpleVecErr`. Every other
//! indexed operation (`v[i]`, `insert`, `erase`) panics when its index is out of range.
//! Unchecked access is only available through the `unsafe` `get_unchecked` methods.
//!
//! # Logging
//! Reallocations are reported through the `log` facade at the `trace` level.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod simple_vec;
pub mod types;

pub use simple_vec::ArrayBuf;
pub use simple_vec::SimpleVec;
pub use types::ErrorKind;
pub use types::SimpleVecErr;
pub use types::SimpleVecResult;

/// Creates a `SimpleVec` much like `vec!`.
///
/// * `svec![]` is an empty vector.
/// * `svec![a, b, c]` holds the listed elements, with capacity equal to their count.
/// * `svec![value; n]` holds `n` clones of `value`.
#[macro_export]
macro_rules! svec {
    () => {
        $crate::SimpleVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($x),+])
    };
}
