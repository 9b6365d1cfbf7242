/*!
# Instance Generators

This module provides builder-style generators for random weighted graphs and helpers that add
deterministic substructures (paths, cycles, cliques) to a [`BlossomMatcher`](crate::algo::BlossomMatcher).

The typical usage workflow is:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p).weights(0..=10)`).
3. Generate edges via `generate()` or `stream()`.

All generated edges are normalized (`u < v`), loop-free and use the node ids `1..=n`.

```rust
use wmatching::{algo::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
let edges = WeightedGnp::new().nodes(10).prob(0.5).weights(1..=9).generate(rng);

let mut matcher = BlossomMatcher::new(10).unwrap();
matcher.add_edges(&edges).unwrap();
let matching = matcher.solve().unwrap();
assert!(matching.verify(&edges).is_ok());
```
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// Trait for generators that draw edge weights uniformly from a range
pub trait WeightRangeGen {
    /// Sets the (inclusive) range of edge weights.
    ///
    /// # Panics
    /// Panics if the range is empty or contains values outside of `0..=MAX_WEIGHT`.
    fn weights(self, range: RangeInclusive<Weight>) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<WeightedEdge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Checks a weight range for [`WeightRangeGen::weights`]
fn assert_valid_weight_range(range: &RangeInclusive<Weight>) {
    assert!(!range.is_empty(), "The weight range must not be empty!");
    assert!(
        *range.start() >= 0 && *range.end() <= MAX_WEIGHT,
        "Weights must lie within 0..=MAX_WEIGHT!"
    );
}
