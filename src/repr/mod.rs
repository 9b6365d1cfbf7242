/*!
# Graph Representations

The matching solver reads its input through a single immutable representation:

- [`WeightedCsrGraph`]: undirected weighted CSR graph on the nodes `1..=n` with doubled costs
  and stable arc ids.
*/

use crate::*;

mod csr;

pub use csr::*;
