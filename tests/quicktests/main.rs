//! Property tests against the public API of the tree.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Remove one copy of the T from the data structure
    Remove(T),
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]) {
            Some(0) => Op::Insert(T::arbitrary(g)),
            Some(1) => Op::Remove(T::arbitrary(g)),
            _ => Op::Iter,
        }
    }
}
