//! Weight maps for Dijkstra and A*.

use std::ops::RangeInclusive;

use pathviz_core::WeightMap;
use rand::Rng;

/// Every cell costs 1.
pub fn unit_weights(width: i32, height: i32) -> WeightMap {
    WeightMap::new(width, height, 1)
}

/// Every cell costs a uniform random value in `range`.
///
/// Weights are positive: the lower bound is raised to 1, and a range left
/// empty by that falls back to unit weights.
pub fn random_weights<R: Rng>(
    width: i32,
    height: i32,
    rng: &mut R,
    range: RangeInclusive<i32>,
) -> WeightMap {
    let (lo, hi) = ((*range.start()).max(1), *range.end());
    let mut w = unit_weights(width, height);
    if lo <= hi {
        w.fill_fn(|_| rng.random_range(lo..=hi));
    }
    w
}

/// How a front-end obtains the weight map for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weighting {
    /// Unit weights: Dijkstra and A* behave like BFS in path length.
    #[default]
    Unweighted,
    /// Uniform random weights in `min..=max`.
    Random { min: i32, max: i32 },
}

impl Weighting {
    /// The random weighting used when weights are switched on.
    pub const RANDOM: Weighting = Weighting::Random { min: 1, max: 3 };

    /// Produce a fresh weight map of the given dimensions.
    pub fn supply<R: Rng>(self, width: i32, height: i32, rng: &mut R) -> WeightMap {
        match self {
            Weighting::Unweighted => unit_weights(width, height),
            Weighting::Random { min, max } => random_weights(width, height, rng, min..=max),
        }
    }
}
