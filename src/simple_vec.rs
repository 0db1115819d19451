mod array;
mod array_buf;
mod cmp;
mod iter;

pub use array::SimpleVec;
pub use array_buf::ArrayBuf;
