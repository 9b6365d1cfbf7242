use crate::heap::MergeOrder;

/// How [`BlossomMatcher::add_edge`](super::BlossomMatcher::add_edge) treats a second edge
/// between the same pair of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateEdges {
    /// Parallel edges are collapsed into one edge carrying the largest weight. The edge keeps
    /// the position of its first occurrence in the adjacency order.
    #[default]
    KeepHeaviest,
    /// A parallel edge is refused with [`MatchingError::DuplicateEdge`](crate::MatchingError::DuplicateEdge)
    Reject,
}

/// Tunables of the blossom solver.
///
/// None of the options changes the weight of the computed matching; they only influence
/// which of several optimal matchings is reported and how much work the search needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SolverConfig {
    /// Tie comparison of the per-blossom slack heaps
    pub merge_order: MergeOrder,
    /// Seed the search with a maximal matching on initially tight edges
    pub greedy_initialization: bool,
    /// Treatment of parallel edges
    pub duplicate_edges: DuplicateEdges,
}

impl SolverConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the tie comparison of the pairing heaps
    pub fn merge_order(mut self, order: MergeOrder) -> Self {
        self.merge_order = order;
        self
    }

    /// Enables or disables the initial tight-edge matching
    pub fn greedy_initialization(mut self, enable: bool) -> Self {
        self.greedy_initialization = enable;
        self
    }

    /// Updates how parallel edges are handled
    pub fn duplicate_edges(mut self, policy: DuplicateEdges) -> Self {
        self.duplicate_edges = policy;
        self
    }
}
