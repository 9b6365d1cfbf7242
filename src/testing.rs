//! Shared helpers for unit tests

use crate::{algo::Matching, *};

/// Enables `log` output for tests run with `RUST_LOG` set; repeated calls are ignored
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Computes the weight of a maximum-weight matching by exhaustive search.
///
/// Branches on the smallest undecided node: either it stays exposed or it is matched to an
/// undecided neighbor. Parallel edges contribute their heaviest weight.
/// Only feasible for small instances (dense graphs up to ~12 nodes).
pub(crate) fn brute_force_max_weight(n: NumNodes, edges: &[WeightedEdge]) -> Weight {
    let n = n as usize;
    let mut adj: Vec<Vec<Option<Weight>>> = vec![vec![None; n + 1]; n + 1];
    for &WeightedEdge(u, v, w) in edges {
        if u == v {
            continue;
        }
        let (u, v) = (u as usize, v as usize);
        let best = adj[u][v].map_or(w, |x| x.max(w));
        adj[u][v] = Some(best);
        adj[v][u] = Some(best);
    }

    fn recurse(adj: &[Vec<Option<Weight>>], decided: &mut [bool], from: usize) -> Weight {
        let Some(u) = (from..decided.len()).find(|&u| !decided[u]) else {
            return 0;
        };

        decided[u] = true;
        let mut best = recurse(adj, decided, u + 1);
        for v in (u + 1)..decided.len() {
            if decided[v] {
                continue;
            }
            if let Some(w) = adj[u][v] {
                decided[v] = true;
                best = best.max(w + recurse(adj, decided, u + 1));
                decided[v] = false;
            }
        }
        decided[u] = false;

        best
    }

    let mut decided = vec![false; n + 1];
    recurse(&adj, &mut decided, 1)
}

/// Asserts that `matching` is a valid matching of the instance `(n, edges)`
pub(crate) fn assert_valid_matching(n: NumNodes, edges: &[WeightedEdge], matching: &Matching) {
    assert_eq!(matching.number_of_nodes(), n);
    if let Err(e) = matching.verify(edges) {
        panic!("{e}");
    }
}
