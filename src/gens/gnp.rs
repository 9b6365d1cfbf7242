use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// Weighted `G(n,p)` graphs contain every pair `{u, v}` of the nodes `1..=n` independently with
/// probability `p`; each present edge gets a weight drawn uniformly from the weight range
/// (default `0..=1`).
///
/// Pairs are enumerated in lexicographic order, so for a fixed seed the output is reproducible.
#[derive(Debug, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    p: GnpType,
    weights: RangeInclusive<Weight>,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            weights: 0..=1,
        }
    }
}

impl WeightedGnp {
    /// Creates a new empty weighted `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of WeightedGnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n > 1 {
                    d / (self.n - 1) as f64
                } else {
                    0.0
                };
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for WeightedGnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for WeightedGnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl WeightRangeGen for WeightedGnp {
    fn weights(mut self, range: RangeInclusive<Weight>) -> Self {
        assert_valid_weight_range(&range);
        self.weights = range;
        self
    }
}

impl GraphGenerator for WeightedGnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge> {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = self.probability();
        let n = self.n;
        let weights = self.weights.clone();

        (1..=n)
            .flat_map(move |u| ((u + 1)..=n).map(move |v| (u, v)))
            .filter_map(move |(u, v)| {
                rng.random_bool(p)
                    .then(|| WeightedEdge(u, v, rng.random_range(weights.clone())))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn edges_are_normalized_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for n in [1, 2, 10, 30] {
            let edges = WeightedGnp::new()
                .nodes(n)
                .prob(0.3)
                .weights(5..=9)
                .generate(rng);

            assert!(edges.is_sorted());
            for &WeightedEdge(u, v, w) in &edges {
                assert!(u < v && is_valid_node(v, n));
                assert!((5..=9).contains(&w));
            }
        }
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let n = 12;
        assert!(WeightedGnp::new().nodes(n).prob(0.0).generate(rng).is_empty());
        assert_eq!(
            WeightedGnp::new().nodes(n).prob(1.0).generate(rng).len(),
            (n * (n - 1) / 2) as usize
        );
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 400;
        let m = WeightedGnp::new().nodes(n).avg_deg(10.0).generate(rng).len();
        let avg = 2.0 * m as f64 / n as f64;
        assert!((8.0..12.0).contains(&avg), "{avg}");
    }
}
