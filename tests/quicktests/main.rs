//! Property tests exercising the containers and routines through random
//! operation sequences, checked against `std` collections as models.

use quickcheck::{Arbitrary, Gen};

mod heap;
mod iterative;
mod linear;
mod recursive;
mod search;
mod sort;

/// An enum for the various kinds of "things" to do to
/// value containers in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
