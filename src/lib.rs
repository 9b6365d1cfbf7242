/*!
`wmatching` computes **maximum-weight matchings** in general (non-bipartite) undirected graphs
with non-negative integer edge weights.

# Representation

We represent **nodes** as `u32` in the range `1..=n` where `n` is the number of nodes in the graph;
`0` is reserved as the *no node* value (see [`node`]).
For **edges**, we use a simple tuple-struct `WeightedEdge(Node, Node, Weight)` with `Weight = i64`.
Weights must lie in `0..=MAX_WEIGHT` so that doubled costs and dual sums can never overflow.

# Design

The solver is a primal-dual blossom algorithm driven by a simulated *event clock*: instead of
adjusting all duals in every step, each blossom remembers when it was last touched and the next
tight edge, blossom contraction or blossom expansion is taken from one of four event queues.
Every search starts from a single exposed root and either augments or proves that the root
stays exposed.

Like most parts of this crate, the solver is configured via the *Builder* / *Setter* pattern
before it is run:

```rust
use wmatching::prelude::*;

let mut matcher = BlossomMatcher::new(4).unwrap().merge_order(MergeOrder::NonStrict);
matcher
    .add_edges([WeightedEdge(1, 2, 2), WeightedEdge(2, 3, 3), WeightedEdge(3, 4, 2)])
    .unwrap();

let matching = matcher.solve().unwrap();
assert_eq!(matching.weight(), 4);
assert_eq!(matching.pairs(), &[(1, 2), (3, 4)]);
```

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, the graph representation and the solver,
- [`algo`] includes the exact [`BlossomMatcher`](algo::BlossomMatcher), a greedy approximation and the [`Matching`](algo::Matching) result type,
- [`gens`] includes random instance generators and deterministic substructures such as paths/cycles/cliques,
- [`heap`] includes the priority queues driving the event clock, which may be useful on their own.

In most use-cases, `use wmatching::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod heap;
pub mod node;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `wmatching::prelude` includes definitions for nodes, edges and errors, the graph representation as well as the matching solvers.
pub mod prelude {
    pub use super::{
        algo::{BlossomMatcher, DuplicateEdges, Matching, SolverConfig, greedy_matching},
        edge::*,
        error::*,
        heap::MergeOrder,
        node::*,
        repr::*,
    };
}
