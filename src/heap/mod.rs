/*!
# Heap Primitives

Priority queues used by the event clock of the blossom solver. All of them are pre-sized
from the number of ids they may ever hold and never reallocate while solving.

- [`IndexedBinaryHeap`]: fixed-capacity binary min-heap addressed by id, supporting
  decrease-key, arbitrary erase and a stable id-to-slot mapping.
- [`PairingHeaps`]: a forest of independent pairing heaps sharing one node arena; each heap
  is identified by a *group* id and supports decrease-key, erase and whole-group clear.
- [`LazyMinHeap`]: plain binary min-heap with push/pop only. Entries may go stale and are
  validated by the caller when they surface at the top.

Keys are ordered through the [`Timed`] trait, ie. only by their point in (simulated) time.
*/

mod binary;
mod lazy;
mod pairing;

pub use binary::*;
pub use lazy::*;
pub use pairing::*;

use crate::Weight;

/// Keys of the heaps in this module are ordered by the point in time they represent.
pub trait Timed: Copy {
    /// Returns the time of this key
    fn time(&self) -> Weight;

    /// Returns *true* if `self` happens strictly before `other`
    #[inline(always)]
    fn before(&self, other: &Self) -> bool {
        self.time() < other.time()
    }
}

impl Timed for Weight {
    #[inline(always)]
    fn time(&self) -> Weight {
        *self
    }
}

/// Comparison used when two pairing-heap roots are linked.
///
/// With [`MergeOrder::Strict`] the right root only wins if its key is strictly smaller, so on
/// equal keys the left root stays on top. [`MergeOrder::NonStrict`] lets the right root win ties.
/// Both orders yield valid heaps; they only differ in which of several equal minima surfaces first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeOrder {
    #[default]
    Strict,
    NonStrict,
}

impl MergeOrder {
    /// Returns *true* if a root with key `right` should be placed above a root with key `left`
    #[inline(always)]
    pub fn prefers<K: Timed>(self, right: &K, left: &K) -> bool {
        match self {
            MergeOrder::Strict => right.time() < left.time(),
            MergeOrder::NonStrict => right.time() <= left.time(),
        }
    }
}
