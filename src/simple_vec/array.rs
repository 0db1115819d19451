use alloc::boxed::Box;
use core::cmp;
use core::fmt;
use core::mem;

use log::trace;

use super::array_buf::ArrayBuf;
use super::array_buf::capacity_overflow;
use crate::types::SimpleVecErr;
use crate::types::SimpleVecResult;

/// A growable contiguous array with value semantics.
///
/// Slots `[0, len)` hold the live contents. Slots `[len, capacity)` are
/// initialized but are not part of the sequence. Elements truncated off the
/// end stay in their slot until they are overwritten, the storage is
/// replaced, or the vector is dropped.
///
/// Any operation that changes the capacity moves the elements to a new
/// block, so references into the old block cannot outlive it. `insert` and
/// `erase` also shift every element at and after the modified position.
///
/// Every slot of the storage always holds a value, so the operations that
/// create slots (`with_len`, `with_capacity`, `push`, `insert`, `resize`,
/// `reserve`, `Extend` and `FromIterator`) need `T: Default`. Types without
/// a default can still be built with `new`, `from_elem`, `From` or `Clone`.
pub struct SimpleVec<T> {
    buf: ArrayBuf<T>,
    len: usize,
}

impl<T> SimpleVec<T> {
    /// Full vectors grow to at least this multiple of their capacity.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty vector without allocating.
    pub const fn new() -> Self {
        return Self {
            buf: ArrayBuf::empty(),
            len: 0,
        };
    }

    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        return Self {
            buf: ArrayBuf::from_fn(count, |_| value.clone()),
            len: count,
        };
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.buf.len();
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        return self.len == self.capacity();
    }

    /// Drops the last element from the sequence. Does nothing when empty.
    pub fn remove_last(&mut self) {
        if self.len != 0 {
            self.len -= 1;
        }
    }

    /// Removes the element at `index`, shifting the rest of the sequence
    /// one slot toward the front.
    ///
    /// Returns `index`, which now holds the successor of the removed element
    /// (or equals `len()` if the last element was removed).
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(index < len, "removal index (is {index}) should be < len (is {len})");

        self.buf.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        return index;
    }

    /// Sets the length to zero. The storage is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Checked access.
    pub fn at(&self, index: usize) -> SimpleVecResult<&T> {
        let Some(item) = self.as_slice().get(index) else {
            return Err(SimpleVecErr::out_of_range(index, self.len));
        };
        return Ok(item);
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> SimpleVecResult<&mut T> {
        let len = self.len;
        let Some(item) = self.as_mut_slice().get_mut(index) else {
            return Err(SimpleVecErr::out_of_range(index, len));
        };
        return Ok(item);
    }

    /// Exchanges the contents, length and capacity of two vectors in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    pub fn take(&mut self) -> Self {
        return mem::take(self);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.buf.as_slice()[..self.len];
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        return &mut self.buf.as_mut_slice()[..len];
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.buf.as_ptr();
    }

    /// The capacity to grow to when at least `min_capacity` slots are needed.
    fn grown_capacity(&self, min_capacity: usize) -> usize {
        let Some(doubled) = self.capacity().checked_mul(Self::GROWTH_FACTOR) else {
            capacity_overflow();
        };
        return cmp::max(doubled, min_capacity);
    }
}

impl<T: Default> SimpleVec<T> {
    /// Creates a vector of `len` default values.
    pub fn with_len(len: usize) -> Self {
        return Self {
            buf: ArrayBuf::new(len),
            len: len,
        };
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        return Self {
            buf: ArrayBuf::new(capacity),
            len: 0,
        };
    }

    /// Appends `value`, growing the storage first if it is full.
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            self.reallocate(self.grown_capacity(1));
        }
        let len = self.len;
        self.buf[len] = value;
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting the elements after it one slot
    /// toward the back. An `index` of `len()` appends.
    ///
    /// Returns a reference to the placed element.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");

        if self.is_full() {
            self.reallocate(self.grown_capacity(1));
        }

        let slots = self.buf.as_mut_slice();
        slots[len] = value;
        slots[index..=len].rotate_right(1);
        self.len += 1;
        return &mut self.buf[index];
    }

    /// Changes the length to `new_len`.
    ///
    /// Growing past the capacity reallocates to `max(2 * capacity, new_len)`.
    /// Newly exposed elements are always default valued. Shrinking only
    /// moves the length.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            self.reallocate(self.grown_capacity(new_len));
        } else if new_len > self.len {
            self.buf.as_mut_slice()[self.len..new_len].fill_with(T::default);
        }
        self.len = new_len;
    }

    /// Grows the capacity to exactly `new_capacity`. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Makes room for `needed` elements following the append growth policy.
    pub(super) fn grow_for(&mut self, needed: usize) {
        if needed > self.capacity() {
            self.reallocate(self.grown_capacity(needed));
        }
    }

    /// Builds a replacement with `new_capacity` slots, moves the live
    /// elements into it and swaps it in. The old block is freed last.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        trace!(
            "SimpleVec reallocating: len {}, capacity {} -> {}",
            self.len,
            self.capacity(),
            new_capacity
        );

        let len = self.len;
        let mut grown = Self::with_capacity(new_capacity);
        grown.buf.as_mut_slice()[..len].swap_with_slice(&mut self.buf.as_mut_slice()[..len]);
        grown.len = len;
        self.swap(&mut grown);
    }
}

/// Copies only the live elements. The copy's capacity equals `len()`.
impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        let src = self.as_slice();
        return Self {
            buf: ArrayBuf::from_fn(src.len(), |i| src[i].clone()),
            len: src.len(),
        };
    }

    /// Builds the full copy first and swaps it in, so a panicking `clone`
    /// leaves `self` untouched. Copying an empty vector releases the storage.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            trace!("SimpleVec releasing capacity {}", self.capacity());
            self.len = 0;
            self.buf = ArrayBuf::empty();
            return;
        }
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(items: [T; N]) -> Self {
        let block: Box<[T]> = Box::new(items);
        return Self {
            buf: ArrayBuf::from(block),
            len: N,
        };
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    fn from(items: &[T]) -> Self {
        return Self {
            buf: ArrayBuf::from_fn(items.len(), |i| items[i].clone()),
            len: items.len(),
        };
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}
