use std::cmp::Reverse;

use itertools::Itertools;

use super::Matching;
use crate::*;

/// Computes a **maximal matching** by scanning the edges from heaviest to lightest and taking
/// every edge whose endpoints are both still free.
///
/// Ties are resolved by input order. The result is at least half as heavy as a maximum-weight
/// matching, which makes it a cheap lower bound. Self-loops are skipped.
///
/// # Panics
/// Panics if an endpoint lies outside of `1..=n`.
pub fn greedy_matching<I, E>(n: NumNodes, edges: I) -> Matching
where
    I: IntoIterator<Item = E>,
    E: Into<WeightedEdge>,
{
    let mut matched = NodeBitSet::with_capacity(n as usize + 1);
    let mut pairs = Vec::new();
    let mut weight = 0;

    for WeightedEdge(u, v, w) in edges
        .into_iter()
        .map(Into::into)
        .filter(|e: &WeightedEdge| !e.is_loop())
        .sorted_by_key(|e| Reverse(e.weight()))
    {
        assert!(is_valid_node(u, n) && is_valid_node(v, n));
        if matched.contains(u as usize) || matched.contains(v as usize) {
            continue;
        }

        matched.insert(u as usize);
        matched.insert(v as usize);
        pairs.push((u, v));
        weight += w;
    }

    Matching::new(n, pairs, weight)
}
