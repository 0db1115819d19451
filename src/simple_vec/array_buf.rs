use alloc::alloc as heap;
use alloc::boxed::Box;
use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops;
use core::ptr;
use core::ptr::NonNull;
use core::slice;

use crate::types::SimpleVecErr;
use crate::types::SimpleVecResult;

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

fn layout_array<T>(length: usize) -> Layout {
    let Ok(layout) = Layout::array::<T>(length) else {
        capacity_overflow();
    };
    // Rust is pretty adamant about sizes not being over isize::MAX
    if layout.size() > (isize::MAX as usize) {
        capacity_overflow();
    }
    return layout;
}

/// Frees a block that is only partly written if an element constructor
/// unwinds. Only the first `init` slots are dropped.
struct FillGuard<T> {
    ptr:    NonNull<T>,
    init:   usize,
    layout: Layout,
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        let written = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.init);
        unsafe { ptr::drop_in_place(written) };
        if self.layout.size() != 0 {
            unsafe { heap::dealloc(self.ptr.as_ptr().cast(), self.layout) };
        }
    }
}

/// The sole owner of a single fixed-size heap block of `T`.
///
/// Every slot of an owned block is initialized for as long as the block
/// is owned. The handle is empty exactly when it was built with a count of
/// zero or when ownership has been moved or released out of it.
///
/// `ArrayBuf` is move-only. It has no notion of a logical length, that is
/// left to `SimpleVec`.
pub struct ArrayBuf<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    _ph: PhantomData<T>,
}

// Safety: `ArrayBuf` owns its elements exactly like `Box<[T]>` does.
unsafe impl<T: Send> Send for ArrayBuf<T> {}
unsafe impl<T: Sync> Sync for ArrayBuf<T> {}

impl<T> ArrayBuf<T> {
    /// Creates a handle that owns nothing. No allocation is performed.
    pub const fn empty() -> Self {
        return Self {
            ptr: None,
            len: 0,
            _ph: PhantomData,
        };
    }

    /// Allocates `count` slots and initializes slot `i` with `f(i)`.
    ///
    /// A `count` of zero yields an empty handle without allocating.
    /// If `f` panics the slots written so far are dropped and the block is
    /// freed before the panic continues.
    pub fn from_fn<F>(count: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        if count == 0 {
            return Self::empty();
        }
        let layout = layout_array::<T>(count);

        // Zero sized layouts never touch the allocator.
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let raw = unsafe { heap::alloc(layout) };
            let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
                heap::handle_alloc_error(layout);
            };
            ptr
        };

        let mut guard = FillGuard {
            ptr:    ptr,
            init:   0,
            layout: layout,
        };
        while guard.init < count {
            let item = f(guard.init);
            unsafe { ptr.add(guard.init).write(item) };
            guard.init += 1;
        }
        mem::forget(guard);

        return Self {
            ptr: Some(ptr),
            len: count,
            _ph: PhantomData,
        };
    }

    /// Gives up ownership of the block, leaving this handle empty.
    ///
    /// Returns `None` if nothing was owned.
    pub fn release(&mut self) -> Option<Box<[T]>> {
        let ptr = self.ptr.take()?;
        let len = mem::replace(&mut self.len, 0);
        let raw = ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len);
        // Safety: the block was allocated with the global allocator using
        // `Layout::array::<T>(len)` or adopted from a `Box<[T]>`.
        return Some(unsafe { Box::from_raw(raw) });
    }

    /// Moves the block out, leaving this handle empty.
    pub fn take(&mut self) -> Self {
        return mem::replace(self, Self::empty());
    }

    /// Exchanges the owned blocks of two handles without touching elements.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.len, &mut other.len);
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        return self.ptr.is_none();
    }

    /// Number of slots in the owned block, zero when empty.
    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    /// Returns the start of the block, or a dangling pointer when empty.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        };
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let ptr = match self.ptr {
            Some(ptr) => ptr,
            None => NonNull::dangling(),
        };
        unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) }
    }

    /// Checked access to the first slot.
    pub fn first(&self) -> SimpleVecResult<&T> {
        let Some(ptr) = self.ptr else {
            return Err(SimpleVecErr::NullDeref);
        };
        return Ok(unsafe { ptr.as_ref() });
    }

    /// Checked mutable access to the first slot.
    pub fn first_mut(&mut self) -> SimpleVecResult<&mut T> {
        let Some(mut ptr) = self.ptr else {
            return Err(SimpleVecErr::NullDeref);
        };
        return Ok(unsafe { ptr.as_mut() });
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        return unsafe { &*self.as_ptr().add(index) };
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        return unsafe { self.as_mut_slice().get_unchecked_mut(index) };
    }
}

impl<T: Default> ArrayBuf<T> {
    /// Allocates `count` default valued slots.
    pub fn new(count: usize) -> Self {
        return Self::from_fn(count, |_| T::default());
    }
}

impl<T> Drop for ArrayBuf<T> {
    fn drop(&mut self) {
        drop(self.release());
    }
}

impl<T> Default for ArrayBuf<T> {
    fn default() -> Self {
        return Self::empty();
    }
}

/// Adopts an existing block. An empty box yields an empty handle.
impl<T> From<Box<[T]>> for ArrayBuf<T> {
    fn from(block: Box<[T]>) -> Self {
        let len = block.len();
        if len == 0 {
            return Self::empty();
        }
        let raw = Box::into_raw(block) as *mut T;
        return Self {
            ptr: NonNull::new(raw),
            len: len,
            _ph: PhantomData,
        };
    }
}

impl<T> ops::Index<usize> for ArrayBuf<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T> ops::IndexMut<usize> for ArrayBuf<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("ArrayBuf(null)");
        }
        return f.debug_list().entries(self.as_slice()).finish();
    }
}
