//! Error types shared by `SimpleVec` and `ArrayBuf`.
//!
//! Only two failures are reported as values: `OutOfRange` from checked
//! element access and `NullDeref` from checked access to an empty buffer.

mod errors;

pub use errors::*;
