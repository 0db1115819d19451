use core::cmp::Ordering;
use core::hash::Hash;
use core::hash::Hasher;

use super::SimpleVec;

// Comparisons only ever look at the live elements. Capacity and the stale
// slots past `len()` never take part.

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVec<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVec<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

/// Lexicographic order. A strict prefix orders before the longer sequence.
impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return self.as_slice().partial_cmp(other.as_slice());
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        return self.as_slice().cmp(other.as_slice());
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
