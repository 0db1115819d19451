use thiserror::Error;

/// This enum lets one figure out what kind of error occurred during
/// a `SimpleVec` or `ArrayBuf` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange = 1,
    NullDeref,
}

/// A type alias for `Result<T, SimpleVecErr>`
pub type SimpleVecResult<T> = Result<T, SimpleVecErr>;

/// This is used to indicate a failed checked access.
///
/// Only checked accessors report errors. Precondition violations of the
/// other accessors panic instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SimpleVecErr {
    /// A checked index was not below the current length.
    #[error("Index {index} is out of range for length {len}.")]
    OutOfRange {
        /// Index that was requested
        index: usize,
        /// Length at the time of the access
        len:   usize,
    },
    /// The buffer handle does not own an allocation.
    #[error("Dereferenced an empty buffer handle.")]
    NullDeref,
}

impl SimpleVecErr {
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        return Self::OutOfRange { index: index, len: len };
    }

    pub const fn kind(self) -> ErrorKind {
        return match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NullDeref => ErrorKind::NullDeref,
        };
    }
}
