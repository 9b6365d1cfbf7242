/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.

In contrast to most graph libraries, nodes handed to the matching solver are **1-indexed**:
a solver for `n` nodes accepts ids `1..=n`. Id `0` is reserved internally as the *none*-value
for mates, links and heap slots, which keeps every per-node array free of `Option`-padding.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `1` to `Node::MAX`
pub type Node = u32;

/// Node-Value that is considered *no node* (e.g. the mate of an unmatched node)
pub const NO_NODE: Node = 0;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = FixedBitSet;

/// Returns *true* if `u` is a valid node id for a graph with `n` nodes (ie. `1 <= u <= n`)
#[inline(always)]
pub const fn is_valid_node(u: Node, n: NumNodes) -> bool {
    u != NO_NODE && u <= n
}

/// Iterator over all valid node ids `1..=n`
#[inline(always)]
pub fn nodes(n: NumNodes) -> std::ops::RangeInclusive<Node> {
    1..=n
}
