/*!
# Matchings

A *matching* is a set of edges without shared endpoints. [`Matching`] is the result type of all
matching algorithms in this crate:

- the matched pairs `(u, v)` with `u < v`, sorted by `u`,
- the unmatched nodes in increasing order,
- the total weight of the matched edges.

Together, the pairs and the unmatched nodes partition `1..=n`.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::*;

/// A matching on the nodes `1..=n` together with its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    mates: Vec<Node>,
    pairs: Vec<(Node, Node)>,
    unmatched: Vec<Node>,
    weight: Weight,
}

impl Matching {
    /// Creates a matching on the nodes `1..=n` from its pairs and total weight.
    ///
    /// # Panics
    /// Panics if a pair contains a node outside of `1..=n`.
    pub fn new<I>(n: NumNodes, pairs: I, weight: Weight) -> Self
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut mates = vec![NO_NODE; n as usize + 1];
        let pairs = pairs
            .into_iter()
            .map(|(u, v)| {
                assert!(is_valid_node(u, n) && is_valid_node(v, n));
                mates[u as usize] = v;
                mates[v as usize] = u;
                (u.min(v), u.max(v))
            })
            .sorted_unstable()
            .collect_vec();

        let unmatched = nodes(n).filter(|&u| mates[u as usize] == NO_NODE).collect();

        Self {
            mates,
            pairs,
            unmatched,
            weight,
        }
    }

    /// Returns the number of nodes the matching is defined on
    pub fn number_of_nodes(&self) -> NumNodes {
        (self.mates.len() - 1) as NumNodes
    }

    /// Returns all matched pairs `(u, v)` with `u < v` in increasing order
    pub fn pairs(&self) -> &[(Node, Node)] {
        &self.pairs
    }

    /// Returns all nodes without partner in increasing order
    pub fn unmatched(&self) -> &[Node] {
        &self.unmatched
    }

    /// Returns the sum of the weights of all matched edges
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the number of matched pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the partner of `u`, if `u` is matched
    pub fn mate_of(&self, u: Node) -> Option<Node> {
        self.mates
            .get(u as usize)
            .copied()
            .filter(|&v| v != NO_NODE)
    }

    /// Splits the matching into `(pairs, unmatched, weight)`
    pub fn into_parts(self) -> (Vec<(Node, Node)>, Vec<Node>, Weight) {
        (self.pairs, self.unmatched, self.weight)
    }

    /// Checks that the matching is valid for `edges`: every pair is an edge, no node is used
    /// twice, and the weight equals the sum of the matched edge weights (the heaviest one for
    /// parallel edges).
    pub fn verify<I, E>(&self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let n = self.number_of_nodes();
        let mut heaviest: FxHashMap<(Node, Node), Weight> = FxHashMap::default();
        for e in edges {
            let edge: WeightedEdge = e.into();
            let WeightedEdge(u, v, w) = edge.normalized();
            let entry = heaviest.entry((u, v)).or_insert(w);
            *entry = (*entry).max(w);
        }

        let mut seen = NodeBitSet::with_capacity(n as usize + 1);
        let mut total = 0;
        for &(u, v) in &self.pairs {
            for x in [u, v] {
                if !is_valid_node(x, n) || seen.put(x as usize) {
                    return Err(MatchingError::InvalidMatching(format!(
                        "node {x} is invalid or matched twice"
                    )));
                }
            }

            match heaviest.get(&(u, v)) {
                Some(w) => total += w,
                None => {
                    return Err(MatchingError::InvalidMatching(format!(
                        "pair ({u},{v}) is not an edge"
                    )));
                }
            }
        }

        if let Some(&u) = self.unmatched.iter().find(|&&u| seen.contains(u as usize)) {
            return Err(MatchingError::InvalidMatching(format!(
                "node {u} is reported both matched and unmatched"
            )));
        }
        if self.pairs.len() * 2 + self.unmatched.len() != n as usize {
            return Err(MatchingError::InvalidMatching(
                "pairs and unmatched nodes do not partition all nodes".into(),
            ));
        }
        if total != self.weight {
            return Err(MatchingError::InvalidMatching(format!(
                "reported weight {} differs from matched weight {total}",
                self.weight
            )));
        }

        Ok(())
    }
}
