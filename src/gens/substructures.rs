/*!
# Substructure Generators

Adds common motifs with a uniform weight to a matching instance:

- **Paths**
- **Cycles** (odd cycles are the smallest instances that force blossoms)
- **Cliques**

# Example

```rust
use wmatching::{algo::*, gens::*};

let mut matcher = BlossomMatcher::new(5).unwrap();
matcher.connect_cycle([1, 2, 3], 2).unwrap();
matcher.connect_path([3, 4, 5], 3).unwrap();

assert_eq!(matcher.number_of_edges(), 5);
assert_eq!(matcher.solve().unwrap().weight(), 5);
```
*/

use itertools::Itertools;

use super::*;
use crate::algo::BlossomMatcher;

/// Trait for creating additional **substructures** (paths, cycles, cliques) in a matching instance
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path** whose edges all have weight `w`.
    fn connect_path<P>(&mut self, nodes_on_path: P, w: Weight) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle** whose edges all have weight `w`.
    ///
    /// The closing edge from the last back to the first node is only added for at least three
    /// nodes, so that neither a self-loop nor a parallel edge is created.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, w: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** whose edges all have weight `w`.
    fn connect_clique<C>(&mut self, nodes: C, w: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl GeneratorSubstructures for BlossomMatcher {
    fn connect_path<P>(&mut self, nodes_on_path: P, w: Weight) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, w: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let cycle = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(cycle.iter().copied(), w)?;
        if cycle.len() > 2 {
            self.add_edge(cycle[cycle.len() - 1], cycle[0], w)?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C, w: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes.into_iter().collect_vec().into_iter().tuple_combinations() {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_path() {
        let mut matcher = BlossomMatcher::new(6).unwrap();
        matcher.connect_path([], 1).unwrap();
        matcher.connect_path([1], 1).unwrap();
        assert_eq!(matcher.number_of_edges(), 0);

        matcher.connect_path([1, 4, 2, 6], 1).unwrap();
        assert_eq!(matcher.number_of_edges(), 3);

        let matching = matcher.solve().unwrap();
        assert_eq!(matching.pairs(), &[(1, 4), (2, 6)]);
    }

    #[test]
    fn connect_cycle() {
        let mut matcher = BlossomMatcher::new(6).unwrap();
        matcher.connect_cycle([1], 1).unwrap();
        matcher.connect_cycle([1, 2], 1).unwrap();
        assert_eq!(matcher.number_of_edges(), 1);

        matcher.connect_cycle([3, 4, 5, 6], 2).unwrap();
        assert_eq!(matcher.number_of_edges(), 5);
        assert_eq!(matcher.solve().unwrap().weight(), 5);
    }

    #[test]
    fn connect_clique() {
        for k in 1..8 {
            let mut matcher = BlossomMatcher::new(k).unwrap();
            matcher.connect_clique(nodes(k), 3).unwrap();
            assert_eq!(matcher.number_of_edges(), k * (k - 1) / 2);

            let matching = matcher.solve().unwrap();
            assert_eq!(matching.len(), (k / 2) as usize);
            assert_eq!(matching.weight(), 3 * (k / 2) as Weight);
        }
    }

    #[test]
    fn invalid_substructures_are_rejected() {
        let mut matcher = BlossomMatcher::new(3).unwrap();
        assert!(matcher.connect_path([1, 1], 1).is_err());
        assert!(matcher.connect_clique([1, 2, 9], 1).is_err());
    }
}
