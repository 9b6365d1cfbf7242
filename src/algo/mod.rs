/*!
# Matching Algorithms

This module provides algorithms for computing **weighted matchings** in general graphs.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wmatching::algo::*;
```

- [`BlossomMatcher`]: exact maximum-weight matching via a primal-dual blossom algorithm,
- [`greedy_matching`]: heaviest-edge-first maximal matching, a fast 1/2-approximation.

Both return a [`Matching`].
*/

mod blossom;
mod greedy;
mod matching;

pub use blossom::*;
pub use greedy::*;
pub use matching::*;
