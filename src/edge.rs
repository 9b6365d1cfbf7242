use std::fmt::{Debug, Display};

use crate::Node;

/// Edge weights are signed so that negative inputs can be detected and rejected.
/// The solver itself only operates on non-negative weights.
pub type Weight = i64;

/// Largest weight accepted by the solver.
///
/// Costs are doubled internally and the event clock adds up to a few potentials,
/// so this leaves plenty of headroom below [`Weight::MAX`].
pub const MAX_WEIGHT: Weight = 1 << 40;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A weighted undirected edge `{u, v}` with weight `w`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }

    /// Returns the normalized pair of endpoints
    pub fn endpoints(&self) -> (Node, Node) {
        let WeightedEdge(u, v, _) = self.normalized();
        (u, v)
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
