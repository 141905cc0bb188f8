//! Vertex identifiers.
//!
//! Associative vertex containers accept any [`VertexKey`].
//! Sequential ones need an [`IndexId`], which converts to and from a position.
use num_traits::{Bounded, NumCast, PrimInt, ToPrimitive};
use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can key an associative vertex container.
pub trait VertexKey: Clone + Eq + Ord + Hash + Debug {}

impl<T: Clone + Eq + Ord + Hash + Debug> VertexKey for T {}

/// Integral identifiers addressing a sequential vertex container.
pub trait IndexId: VertexKey + Copy + PrimInt {
    /// `None` for negative ids and for ids beyond `usize`.
    fn to_index(self) -> Option<usize> {
        ToPrimitive::to_usize(&self)
    }

    /// `None` when `index` does not fit in `Self`.
    fn try_from_index(index: usize) -> Option<Self> {
        NumCast::from(index)
    }

    /// Panics when `index` does not fit in `Self`.
    fn from_index(index: usize) -> Self {
        match Self::try_from_index(index) {
            Some(x) => x,
            None => panic!("index {} overflows the vertex id type", index),
        }
    }

    fn max_id() -> Self {
        Bounded::max_value()
    }
}

impl<T: PrimInt + Hash + Debug> IndexId for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn negative_ids_have_no_index() {
        assert_eq!((-1i32).to_index(), None);
        assert_eq!(7i64.to_index(), Some(7));
    }

    #[test]
    fn narrow_ids_reject_wide_indices() {
        assert_eq!(u8::try_from_index(255), Some(255u8));
        assert_eq!(u8::try_from_index(256), None);
        assert_eq!(u16::max_id(), u16::MAX);
    }

    #[test]
    #[should_panic]
    fn from_index_panics_on_overflow() {
        let _ = u8::from_index(1000);
    }

    #[quickcheck]
    fn index_round_trip(x: u32) {
        let idx = x.to_index().unwrap();
        assert_eq!(u32::from_index(idx), x);
    }
}
