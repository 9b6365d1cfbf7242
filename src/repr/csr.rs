/*!
# Weighted Compressed Sparse Row (CSR) Graph

[`WeightedCsrGraph`] stores an undirected weighted graph on the nodes `1..=n` in the
**Compressed Sparse Row** format:

- a single flattened array of [`HalfEdge`]s, where each undirected edge appears twice
  (once per endpoint),
- an offset array marking the start of each node's adjacency; node `0` is a dummy with an
  empty adjacency so that node ids can be used as slice indices directly.

The neighbors of every node are stored in the order in which the edges were supplied. The
position of a half-edge in the flattened array is its **arc id**, which stays stable for the
lifetime of the graph.

Costs are stored **doubled** so that dual adjustments split evenly across both sides of an odd
blossom stay integral.
*/

use std::ops::Range;

use super::*;
use crate::utils::sliced_buffer::SlicedBuffer;

/// One direction of an undirected edge as stored in the CSR arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HalfEdge {
    pub from: Node,
    pub to: Node,
    /// Twice the weight of the edge
    pub cost: Weight,
}

impl HalfEdge {
    /// Returns the original (un-doubled) weight of the edge
    pub fn weight(&self) -> Weight {
        self.cost >> 1
    }
}

/// Undirected weighted **CSR graph** on the nodes `1..=n`.
///
/// - Each edge is stored twice, once per endpoint, with doubled cost.
/// - Immutable after construction and optimized for sequential scans.
#[derive(Debug, Clone)]
pub struct WeightedCsrGraph {
    arcs: SlicedBuffer<HalfEdge, NumEdges>,
}

impl WeightedCsrGraph {
    /// Builds the CSR representation of `edges` on the nodes `1..=n`.
    ///
    /// # Panics
    /// Panics if an endpoint lies outside of `1..=n`. Callers are expected to validate
    /// their input beforehand (see [`BlossomMatcher::add_edge`](crate::algo::BlossomMatcher::add_edge)).
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let entries = edges
            .into_iter()
            .flat_map(|e| {
                let WeightedEdge(u, v, w) = e.into();
                assert!(is_valid_node(u, n) && is_valid_node(v, n));

                let cost = w * 2;
                [
                    (u as usize, HalfEdge { from: u, to: v, cost }),
                    (v as usize, HalfEdge { from: v, to: u, cost }),
                ]
            })
            .collect();

        Self {
            arcs: SlicedBuffer::from_keyed_entries(n as usize + 1, entries),
        }
    }

    /// Returns the number of nodes `n`
    pub fn number_of_nodes(&self) -> NumNodes {
        (self.arcs.len() - 1) as NumNodes
    }

    /// Returns the number of undirected edges
    pub fn number_of_edges(&self) -> NumEdges {
        (self.arcs.number_of_entries() / 2) as NumEdges
    }

    /// Returns the arc ids of all half-edges leaving `u`
    #[inline(always)]
    pub fn arc_ids_of(&self, u: Node) -> Range<usize> {
        self.arcs.range_of(u as usize)
    }

    /// Returns the half-edge with arc id `id`
    #[inline(always)]
    pub fn arc(&self, id: usize) -> HalfEdge {
        *self.arcs.entry(id)
    }

    /// Returns all half-edges leaving `u` in insertion order
    #[inline(always)]
    pub fn arcs_of(&self, u: Node) -> &[HalfEdge] {
        &self.arcs[u]
    }

    /// Returns the number of half-edges leaving `u`
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.arcs.size_of(u as usize) as NumNodes
    }

    /// Returns the largest (doubled) cost of an edge incident to `u`, or `0` for isolated nodes
    pub fn max_cost_at(&self, u: Node) -> Weight {
        self.arcs_of(u).iter().map(|a| a.cost).max().unwrap_or(0)
    }

    /// Returns the largest (doubled) cost among all parallel edges `{u, v}`, if any exists
    pub fn max_cost_between(&self, u: Node, v: Node) -> Option<Weight> {
        self.arcs_of(u)
            .iter()
            .filter(|a| a.to == v)
            .map(|a| a.cost)
            .max()
    }

    /// Returns the initial dual variables: `potential[u]` is half of the largest doubled cost
    /// incident to `u`, ie. the heaviest weight at `u`. Index `0` is unused and set to `0`.
    ///
    /// With non-negative weights, this makes every edge's reduced cost non-negative.
    pub fn initial_potentials(&self) -> Vec<Weight> {
        (0..=self.number_of_nodes())
            .map(|u| if u == NO_NODE { 0 } else { self.max_cost_at(u) >> 1 })
            .collect()
    }

    /// Returns an iterator over all edges (with original weights) as `WeightedEdge(u, v, w)`
    /// with `u < v`, each reported once
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.arcs
            .raw_buffer_slice()
            .iter()
            .filter(|a| a.from < a.to)
            .map(|a| WeightedEdge(a.from, a.to, a.weight()))
    }
}
