/*!
# Primal-Dual Blossom Matching

[`BlossomMatcher`] computes a **maximum-weight matching** in a general (not necessarily bipartite)
graph with non-negative integer weights. Unmatched nodes are allowed and contribute nothing.

The solver grows one alternating tree per exposed root and drives it by a simulated clock:
instead of repeatedly lowering dual variables by the smallest slack, every outer node drifts
with the clock and the next structural event is looked up in a priority queue. Four kinds of
events exist:

1. **rematch**: the dual of an outer node reaches zero; the tree path is flipped and the search ends,
2. **grow**: an edge from an outer node to a free node (or blossom) becomes tight,
3. **contract**: an edge between two outer blossoms becomes tight, closing an odd cycle,
4. **expand**: the dual of an inner blossom reaches zero and it dissolves into its children.

Blossoms are kept in a laminar forest. Potentials of nodes inside blossoms are updated lazily, and
on contraction the largest child *absorbs* the new blossom (small-to-large), which keeps the
total relabeling work low.

All arrays are sized once from the number of nodes when [`BlossomMatcher::solve`] starts and are
never reallocated while searching.

# Example
```
use wmatching::algo::BlossomMatcher;

let mut matcher = BlossomMatcher::new(4).unwrap();
matcher.add_edge(1, 2, 1).unwrap();
matcher.add_edge(3, 4, 1).unwrap();
matcher.add_edge(1, 3, 1).unwrap();
matcher.add_edge(2, 4, 2).unwrap();

let matching = matcher.solve().unwrap();
assert_eq!(matching.weight(), 3);
assert_eq!(matching.pairs(), &[(1, 3), (2, 4)]);
assert!(matching.unmatched().is_empty());
```
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;
use log::{debug, trace};

use super::Matching;
use crate::{
    heap::{IndexedBinaryHeap, LazyMinHeap, MergeOrder, PairingHeaps, Timed},
    repr::WeightedCsrGraph,
    *,
};

mod config;
mod forest;
mod search;

pub use config::*;

/// Larger than any time or reduced cost reachable with weights up to [`MAX_WEIGHT`]
const INF: Weight = Weight::MAX / 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Label {
    /// Transient marker for children of an expanding blossom that leave the tree
    Separated,
    Inner,
    #[default]
    Free,
    Outer,
}

/// The edge `from -> to` through which a node or blossom was attached to the alternating tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Link {
    from: usize,
    to: usize,
}

impl Link {
    const NONE: Link = Link { from: 0, to: 0 };

    fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// One end of a boundary edge: the neighboring child blossom `b` and the node `v` inside `b`
/// the edge connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct NodeLink {
    b: usize,
    v: usize,
}

/// Position of a (sub-)blossom in the cycle of its parent.
///
/// `link[0]` points to the next child, `link[1]` to the previous one.
#[derive(Debug, Clone, Copy, Default)]
struct BoundaryNode {
    size: usize,
    link: [NodeLink; 2],
}

impl BoundaryNode {
    fn singleton(u: usize) -> Self {
        Self {
            size: 1,
            link: [NodeLink { b: u, v: u }; 2],
        }
    }

    #[inline(always)]
    fn next_b(&self) -> usize {
        self.link[0].b
    }

    #[inline(always)]
    fn next_v(&self) -> usize {
        self.link[0].v
    }

    #[inline(always)]
    fn prev_b(&self) -> usize {
        self.link[1].b
    }

    #[inline(always)]
    fn prev_v(&self) -> usize {
        self.link[1].v
    }
}

/// Candidate grow edge `from -> to` becoming tight at `time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct EdgeEvent {
    time: Weight,
    from: usize,
    to: usize,
}

impl Timed for EdgeEvent {
    #[inline(always)]
    fn time(&self) -> Weight {
        self.time
    }
}

/// Earliest time at which the dual of an outer node `id` reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VertexEvent {
    time: Weight,
    id: usize,
}

impl VertexEvent {
    const NEVER: VertexEvent = VertexEvent { time: INF, id: 0 };
}

/// Candidate contraction along arc `arc` leaving outer node `from`.
///
/// Ordered by time first; the remaining fields only make the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ContractEvent {
    time: Weight,
    from: usize,
    arc: usize,
}

/// Maximum-weight matching solver for general graphs.
///
/// Nodes are `1..=n`. Configure with the setters, add edges, then call [`BlossomMatcher::solve`],
/// which consumes the matcher.
#[derive(Debug, Clone)]
pub struct BlossomMatcher {
    n: NumNodes,
    config: SolverConfig,
    edges: Vec<WeightedEdge>,
    /// Position in `edges` of every normalized node pair
    edge_index: FxHashMap<(Node, Node), usize>,
}

impl BlossomMatcher {
    /// Creates a matcher for the nodes `1..=n` with the default configuration
    pub fn new(n: NumNodes) -> Result<Self> {
        Self::with_config(n, SolverConfig::default())
    }

    /// Creates a matcher for the nodes `1..=n`
    pub fn with_config(n: NumNodes, config: SolverConfig) -> Result<Self> {
        if n == 0 {
            return Err(MatchingError::EmptyGraph);
        }

        Ok(Self {
            n,
            config,
            edges: Vec::new(),
            edge_index: FxHashMap::default(),
        })
    }

    /// Updates the tie comparison of the pairing heaps
    pub fn merge_order(mut self, order: MergeOrder) -> Self {
        self.config.merge_order = order;
        self
    }

    /// Enables or disables the initial matching on tight edges
    pub fn greedy_initialization(mut self, enable: bool) -> Self {
        self.config.greedy_initialization = enable;
        self
    }

    /// Updates how parallel edges are treated by subsequent calls to [`BlossomMatcher::add_edge`]
    pub fn duplicate_edges(mut self, policy: DuplicateEdges) -> Self {
        self.config.duplicate_edges = policy;
        self
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of distinct edges added so far
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Adds the undirected edge `{u, v}` with weight `w`.
    ///
    /// # Errors
    /// Fails if an endpoint lies outside of `1..=n`, if `u == v`, if `w` is negative or larger
    /// than [`MAX_WEIGHT`], or if the edge already exists and duplicates are rejected.
    /// A failed call leaves the matcher unchanged.
    pub fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        for node in [u, v] {
            if !is_valid_node(node, self.n) {
                return Err(MatchingError::NodeOutOfRange { node, n: self.n });
            }
        }
        if u == v {
            return Err(MatchingError::SelfLoop { node: u });
        }
        if w < 0 {
            return Err(MatchingError::NegativeWeight { u, v, weight: w });
        }
        if w > MAX_WEIGHT {
            return Err(MatchingError::WeightTooLarge {
                u,
                v,
                weight: w,
                max: MAX_WEIGHT,
            });
        }

        let key = WeightedEdge(u, v, w).normalized().endpoints();
        if let Some(&idx) = self.edge_index.get(&key) {
            return match self.config.duplicate_edges {
                DuplicateEdges::Reject => Err(MatchingError::DuplicateEdge { u, v }),
                DuplicateEdges::KeepHeaviest => {
                    let edge = &mut self.edges[idx];
                    edge.2 = edge.2.max(w);
                    Ok(())
                }
            };
        }

        self.edge_index.insert(key, self.edges.len());
        self.edges.push(WeightedEdge(u, v, w));
        Ok(())
    }

    /// Adds all `edges`, stopping at the first one that is rejected
    pub fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for e in edges {
            let WeightedEdge(u, v, w) = e.into();
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Computes a maximum-weight matching.
    ///
    /// Roots are processed in increasing id order and neighbors in insertion order, so the
    /// result is deterministic for a given sequence of [`BlossomMatcher::add_edge`] calls.
    ///
    /// # Errors
    /// Only fails with [`MatchingError::Internal`] if an invariant of the solver is violated.
    pub fn solve(self) -> Result<Matching> {
        debug!(
            "Solve maximum-weight matching with n={} m={} config={:?}",
            self.n,
            self.edges.len(),
            self.config
        );

        let graph = WeightedCsrGraph::from_edges(self.n, self.edges.iter());
        let mut state = SolverState::new(graph, self.config.merge_order);

        if self.config.greedy_initialization {
            let matched = state.match_tight_edges();
            trace!("Greedy initialization matched {matched} pairs");
        }

        for root in 1..=state.n {
            if state.mate[root] == 0 {
                state.do_edmonds_search(root)?;
            }
        }

        let matching = state.into_matching();
        debug!(
            "Found matching with {} pairs and weight {}",
            matching.len(),
            matching.weight()
        );
        Ok(matching)
    }
}

/// Complete state of one solve: graph, blossom forest, event clock and heaps.
///
/// Ids `1..=n` are nodes, `n+1..s` are blossom slots and `0` is the sentinel meaning *none*.
#[derive(Debug)]
struct SolverState {
    n: usize,
    /// Number of blossom slots
    b: usize,
    /// Total number of ids including the sentinel
    s: usize,
    graph: WeightedCsrGraph,

    queue: VecDeque<usize>,
    mate: Vec<usize>,
    surface: Vec<usize>,
    base: Vec<usize>,
    link: Vec<Link>,
    /// Stamp `arc + 1` of the contraction that last visited an id while looking for the
    /// lowest common ancestor
    lca_mark: Vec<usize>,
    label: Vec<Label>,
    potential: Vec<Weight>,

    /// Stack of unused blossom ids
    free_bids: Vec<usize>,
    node: Vec<BoundaryNode>,

    heavy: Vec<usize>,
    group: Vec<usize>,
    time_created: Vec<Weight>,
    lazy: Vec<Weight>,
    slack: Vec<Weight>,
    best_from: Vec<usize>,

    time_current: Weight,
    rematch_event: VertexEvent,
    /// Grow candidates of free nodes and blossoms, keyed by surface id
    grow_events: IndexedBinaryHeap<EdgeEvent>,
    /// Per free blossom, the minimum slack edge of each of its groups
    group_slack: PairingHeaps<EdgeEvent>,
    contract_events: LazyMinHeap<ContractEvent>,
    /// Inner blossoms keyed by the time their dual reaches zero
    expand_events: IndexedBinaryHeap<Weight>,
}

impl SolverState {
    fn new(graph: WeightedCsrGraph, order: MergeOrder) -> Self {
        let n = graph.number_of_nodes() as usize;
        let b = n.saturating_sub(1) / 2;
        let s = n + b + 1;

        let mut potential = vec![0; s];
        potential[..=n].copy_from_slice(&graph.initial_potentials());

        let node = (0..s)
            .map(|i| {
                if i == 0 {
                    BoundaryNode::default()
                } else {
                    BoundaryNode::singleton(i)
                }
            })
            .collect();

        Self {
            n,
            b,
            s,
            graph,
            queue: VecDeque::with_capacity(n),
            mate: vec![0; s],
            surface: (0..s).collect(),
            base: (0..s).collect(),
            link: vec![Link::NONE; s],
            lca_mark: vec![0; s],
            label: vec![Label::Free; s],
            potential,
            free_bids: (n + 1..=n + b).rev().collect(),
            node,
            heavy: vec![0; s],
            group: (0..s).collect(),
            time_created: vec![0; s],
            lazy: vec![0; s],
            slack: vec![INF; s],
            best_from: vec![0; s],
            time_current: 0,
            rematch_event: VertexEvent::NEVER,
            grow_events: IndexedBinaryHeap::new(s),
            group_slack: PairingHeaps::new(s, s, order),
            contract_events: LazyMinHeap::with_capacity(s),
            expand_events: IndexedBinaryHeap::new(s),
        }
    }

    #[inline(always)]
    fn is_blossom(&self, b: usize) -> bool {
        b > self.n
    }

    /// Reduced cost of the arc `u -> v` in the doubled scale
    #[inline(always)]
    fn reduced_cost(&self, u: usize, v: usize, cost: Weight) -> Weight {
        self.potential[u] + self.potential[v] - cost
    }

    /// Matches pairs of exposed nodes along edges that are tight under the initial potentials.
    /// Returns the number of new pairs.
    fn match_tight_edges(&mut self) -> usize {
        let mut matched = 0;
        for u in 1..=self.n {
            if self.mate[u] != 0 {
                continue;
            }

            let partner = self
                .graph
                .arcs_of(u as Node)
                .iter()
                .map(|a| (a.to as usize, a.cost))
                .find(|&(v, cost)| self.mate[v] == 0 && self.reduced_cost(u, v, cost) <= 0);

            if let Some((v, _)) = partner {
                self.mate[u] = v;
                self.mate[v] = u;
                matched += 1;
            }
        }
        matched
    }

    /// Sum of the weights of all matched pairs; parallel arcs count with their maximum
    fn matched_weight(&self) -> Weight {
        let total: Weight = (1..=self.n)
            .filter(|&u| self.mate[u] > u)
            .map(|u| {
                self.graph
                    .max_cost_between(u as Node, self.mate[u] as Node)
                    .unwrap_or(0)
            })
            .sum();
        total >> 1
    }

    fn into_matching(self) -> Matching {
        let pairs: Vec<(Node, Node)> = (1..=self.n)
            .filter(|&u| self.mate[u] > u)
            .map(|u| (u as Node, self.mate[u] as Node))
            .collect();
        Matching::new(self.n as NumNodes, pairs, self.matched_weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::greedy_matching, gens::*, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn solve_with(n: NumNodes, edges: &[WeightedEdge], config: SolverConfig) -> Matching {
        let mut matcher = BlossomMatcher::with_config(n, config).unwrap();
        matcher.add_edges(edges).unwrap();
        matcher.solve().unwrap()
    }

    fn solve(n: NumNodes, edges: &[(Node, Node, Weight)]) -> Matching {
        let edges = edges.iter().map(WeightedEdge::from).collect_vec();
        solve_with(n, &edges, SolverConfig::default())
    }

    fn all_configs() -> Vec<SolverConfig> {
        [MergeOrder::Strict, MergeOrder::NonStrict]
            .into_iter()
            .cartesian_product([false, true])
            .map(|(order, greedy)| {
                SolverConfig::new()
                    .merge_order(order)
                    .greedy_initialization(greedy)
            })
            .collect()
    }

    #[test]
    fn triangle_plus_edge() {
        init_logger();
        let matching = solve(4, &[(1, 2, 1), (3, 4, 1), (1, 3, 1), (2, 4, 2)]);
        assert_eq!(matching.weight(), 3);
        assert_eq!(matching.pairs(), &[(1, 3), (2, 4)]);
        assert!(matching.unmatched().is_empty());
    }

    #[test]
    fn heavy_middle_edge() {
        let matching = solve(4, &[(1, 2, 1), (2, 3, 10), (3, 4, 1)]);
        assert_eq!(matching.weight(), 10);
        assert_eq!(matching.pairs(), &[(2, 3)]);
        assert_eq!(matching.unmatched(), &[1, 4]);
    }

    #[test]
    fn no_edges() {
        for n in 1..6 {
            let matching = solve(n, &[]);
            assert_eq!(matching.weight(), 0);
            assert!(matching.pairs().is_empty());
            assert_eq!(matching.unmatched(), nodes(n).collect_vec());
        }
    }

    #[test]
    fn single_edge_and_zero_weights() {
        let matching = solve(2, &[(1, 2, 5)]);
        assert_eq!(matching.pairs(), &[(1, 2)]);
        assert_eq!(matching.weight(), 5);

        let matching = solve(3, &[(1, 2, 0), (2, 3, 0)]);
        assert_eq!(matching.weight(), 0);
        assert!(matching.verify(&[WeightedEdge(1, 2, 0), WeightedEdge(2, 3, 0)]).is_ok());
    }

    /// Classic instances exercising blossom contraction, nesting, relabeling and expansion
    #[test]
    fn classic_blossom_instances() {
        let cases: Vec<(NumNodes, Vec<(Node, Node, Weight)>)> = vec![
            // odd cycle with a pendant edge
            (4, vec![(1, 2, 10), (2, 3, 11), (1, 3, 12), (3, 4, 5)]),
            // outer blossom used for augmentation
            (4, vec![(1, 2, 8), (1, 3, 9), (2, 3, 10), (3, 4, 7)]),
            (
                6,
                vec![(1, 2, 8), (1, 3, 9), (2, 3, 10), (3, 4, 7), (1, 6, 5), (4, 5, 6)],
            ),
            // outer blossom relabeled inner, then used for augmentation
            (
                6,
                vec![(1, 2, 9), (1, 3, 8), (2, 3, 10), (1, 4, 5), (4, 5, 4), (1, 6, 3)],
            ),
            (
                6,
                vec![(1, 2, 9), (1, 3, 8), (2, 3, 10), (1, 4, 5), (4, 5, 3), (1, 6, 4)],
            ),
            (
                6,
                vec![(1, 2, 9), (1, 3, 8), (2, 3, 10), (1, 4, 5), (4, 5, 3), (3, 6, 4)],
            ),
            // nested outer blossom
            (
                6,
                vec![(1, 2, 9), (1, 3, 9), (2, 3, 10), (2, 4, 8), (3, 5, 8), (4, 5, 10), (5, 6, 6)],
            ),
            // blossom relabeled and included in a nested blossom
            (
                8,
                vec![
                    (1, 2, 10),
                    (1, 7, 10),
                    (2, 3, 12),
                    (3, 4, 20),
                    (3, 5, 20),
                    (4, 5, 25),
                    (5, 6, 10),
                    (6, 7, 10),
                    (7, 8, 8),
                ],
            ),
            // nested blossom, augment, expand recursively
            (
                8,
                vec![
                    (1, 2, 8),
                    (1, 3, 8),
                    (2, 3, 10),
                    (2, 4, 12),
                    (3, 5, 12),
                    (4, 5, 14),
                    (4, 6, 12),
                    (5, 7, 12),
                    (6, 7, 14),
                    (7, 8, 12),
                ],
            ),
            // blossom relabeled inner, then expanded
            (
                8,
                vec![
                    (1, 2, 23),
                    (1, 5, 22),
                    (1, 6, 15),
                    (2, 3, 25),
                    (3, 4, 22),
                    (4, 5, 25),
                    (4, 8, 14),
                    (5, 7, 13),
                ],
            ),
            // nested blossom relabeled inner, then expanded
            (
                8,
                vec![
                    (1, 2, 19),
                    (1, 3, 20),
                    (1, 8, 8),
                    (2, 3, 25),
                    (2, 4, 18),
                    (3, 5, 18),
                    (4, 5, 13),
                    (4, 7, 7),
                    (5, 6, 7),
                ],
            ),
            // nested blossoms expanded and relabeled within one search
            (
                10,
                vec![
                    (1, 2, 45),
                    (1, 5, 45),
                    (2, 3, 50),
                    (3, 4, 45),
                    (4, 5, 50),
                    (1, 6, 30),
                    (3, 9, 35),
                    (4, 8, 35),
                    (5, 7, 26),
                    (9, 10, 5),
                ],
            ),
            (
                10,
                vec![
                    (1, 2, 45),
                    (1, 5, 45),
                    (2, 3, 50),
                    (3, 4, 45),
                    (4, 5, 50),
                    (1, 6, 30),
                    (3, 9, 35),
                    (4, 8, 26),
                    (5, 7, 40),
                    (9, 10, 5),
                ],
            ),
            (
                10,
                vec![
                    (1, 2, 45),
                    (1, 5, 45),
                    (2, 3, 50),
                    (3, 4, 45),
                    (4, 5, 50),
                    (1, 6, 30),
                    (3, 9, 35),
                    (4, 8, 28),
                    (5, 7, 26),
                    (9, 10, 5),
                ],
            ),
            (
                12,
                vec![
                    (1, 2, 45),
                    (1, 7, 45),
                    (2, 3, 50),
                    (3, 4, 45),
                    (4, 5, 95),
                    (4, 6, 94),
                    (5, 6, 94),
                    (6, 7, 50),
                    (1, 8, 30),
                    (3, 11, 35),
                    (5, 9, 36),
                    (7, 10, 26),
                    (11, 12, 5),
                ],
            ),
        ];

        for (n, edges) in cases {
            let edges = edges.iter().map(WeightedEdge::from).collect_vec();
            let optimum = brute_force_max_weight(n, &edges);

            for config in all_configs() {
                let matching = solve_with(n, &edges, config);
                assert_valid_matching(n, &edges, &matching);
                assert_eq!(matching.weight(), optimum, "{config:?} {edges:?}");
            }
        }
    }

    #[test]
    fn optimal_on_small_random_graphs() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1234_5678);

        for round in 0..600 {
            let n = rng.random_range(1..=8);
            let p = [0.3, 0.6, 1.0][round % 3];
            let max_weight = [1, 4, 30][(round / 3) % 3];

            let edges = WeightedGnp::new()
                .nodes(n)
                .prob(p)
                .weights(0..=max_weight)
                .generate(rng);
            let optimum = brute_force_max_weight(n, &edges);

            for config in all_configs() {
                let matching = solve_with(n, &edges, config);
                assert_valid_matching(n, &edges, &matching);
                assert_eq!(matching.weight(), optimum, "{config:?} n={n} {edges:?}");
            }
        }
    }

    #[test]
    fn optimal_with_parallel_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);

        for _ in 0..200 {
            let n = rng.random_range(2..=7);
            let edges = (0..rng.random_range(0..20))
                .map(|_| {
                    let u = rng.random_range(1..n);
                    let v = rng.random_range(u + 1..=n);
                    if rng.random_bool(0.5) {
                        WeightedEdge(u, v, rng.random_range(0..20))
                    } else {
                        WeightedEdge(v, u, rng.random_range(0..20))
                    }
                })
                .collect_vec();

            let matching = solve_with(n, &edges, SolverConfig::default());
            assert_valid_matching(n, &edges, &matching);
            assert_eq!(matching.weight(), brute_force_max_weight(n, &edges));
        }
    }

    #[test]
    fn dense_graph_beats_greedy() {
        let rng = &mut Pcg64Mcg::seed_from_u64(50);
        let n = 50;

        for _ in 0..5 {
            let edges = WeightedGnp::new()
                .nodes(n)
                .prob(0.9)
                .weights(0..=1000)
                .generate(rng);

            let greedy = greedy_matching(n, edges.iter());
            for config in all_configs() {
                let matching = solve_with(n, &edges, config);
                assert_valid_matching(n, &edges, &matching);
                assert!(matching.weight() >= greedy.weight());
            }
        }
    }

    #[test]
    fn merge_orders_agree_on_larger_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [20, 41, 80] {
            let edges = WeightedGnp::new()
                .nodes(n)
                .avg_deg(6.0)
                .weights(0..=5)
                .generate(rng);

            let weights = all_configs()
                .into_iter()
                .map(|config| {
                    let matching = solve_with(n, &edges, config);
                    assert_valid_matching(n, &edges, &matching);
                    matching.weight()
                })
                .collect_vec();
            assert!(weights.iter().all_equal(), "{weights:?}");
        }
    }

    #[test]
    fn odd_cycles() {
        for k in (3..=21).step_by(2) {
            let mut matcher = BlossomMatcher::new(k).unwrap();
            matcher.connect_cycle(nodes(k), 4).unwrap();
            let matching = matcher.solve().unwrap();
            assert_eq!(matching.len(), (k / 2) as usize);
            assert_eq!(matching.weight(), 4 * (k / 2) as Weight);
            assert_eq!(matching.unmatched().len(), 1);
        }
    }

    #[test]
    fn input_validation() {
        assert_eq!(
            BlossomMatcher::new(0).unwrap_err(),
            MatchingError::EmptyGraph
        );

        let mut matcher = BlossomMatcher::new(3).unwrap();
        assert_eq!(
            matcher.add_edge(0, 1, 1),
            Err(MatchingError::NodeOutOfRange { node: 0, n: 3 })
        );
        assert_eq!(
            matcher.add_edge(1, 4, 1),
            Err(MatchingError::NodeOutOfRange { node: 4, n: 3 })
        );
        assert_eq!(
            matcher.add_edge(2, 2, 1),
            Err(MatchingError::SelfLoop { node: 2 })
        );
        assert_eq!(
            matcher.add_edge(1, 2, -1),
            Err(MatchingError::NegativeWeight {
                u: 1,
                v: 2,
                weight: -1
            })
        );
        assert!(matches!(
            matcher.add_edge(1, 2, MAX_WEIGHT + 1),
            Err(MatchingError::WeightTooLarge { .. })
        ));
        assert_eq!(matcher.number_of_edges(), 0);

        matcher.add_edge(1, 2, MAX_WEIGHT).unwrap();
        matcher.add_edge(2, 3, 1).unwrap();
        let matching = matcher.solve().unwrap();
        assert_eq!(matching.weight(), MAX_WEIGHT);
    }

    #[test]
    fn duplicate_edges() {
        let mut matcher = BlossomMatcher::new(3).unwrap();
        matcher.add_edge(1, 2, 3).unwrap();
        matcher.add_edge(2, 1, 7).unwrap();
        matcher.add_edge(1, 2, 5).unwrap();
        matcher.add_edge(2, 3, 6).unwrap();
        assert_eq!(matcher.number_of_edges(), 2);
        let matching = matcher.solve().unwrap();
        assert_eq!(matching.pairs(), &[(1, 2)]);
        assert_eq!(matching.weight(), 7);

        let mut matcher = BlossomMatcher::new(3)
            .unwrap()
            .duplicate_edges(DuplicateEdges::Reject);
        matcher.add_edge(1, 2, 3).unwrap();
        assert_eq!(
            matcher.add_edge(2, 1, 7),
            Err(MatchingError::DuplicateEdge { u: 2, v: 1 })
        );
        assert_eq!(matcher.config().duplicate_edges, DuplicateEdges::Reject);
    }

    #[test]
    fn deterministic_results() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let edges = WeightedGnp::new()
            .nodes(30)
            .prob(0.4)
            .weights(0..=3)
            .generate(rng);

        let first = solve_with(30, &edges, SolverConfig::default());
        for _ in 0..3 {
            assert_eq!(solve_with(30, &edges, SolverConfig::default()), first);
        }
    }
}
