//! Property tests for the public API of [`bst_map::Tree`].

#[path = "../common/mod.rs"]
mod common;

mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Insert the K, V into the tree
    Insert(K, V),
    /// Remove the K from the tree
    Remove(K),
    /// Compare the tree's walks with the model
    Iter,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 1, 2]).copied() {
            Some(0) => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            Some(1) => Op::Remove(K::arbitrary(g)),
            _ => Op::Iter,
        }
    }
}
