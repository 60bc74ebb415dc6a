//! Algorithm selection and run configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pathviz_core::{Cancel, ConfigError, Terrain, WeightMap};

use crate::explorer::{Explorer, Outcome};
use crate::observer::Observer;

/// Parameters of a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalConfig {
    /// Cells covered by one move. Must be at least 1.
    pub step: i32,
    /// Emit intermediate snapshots and pause between expansions.
    pub animate: bool,
    /// Pause length between animation steps.
    pub delay: Duration,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            step: 1,
            animate: true,
            delay: Duration::ZERO,
        }
    }
}

/// The traversal algorithms an [`Explorer`] can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dfs,
    Bfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }

    /// Whether the algorithm reads the weight map.
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl Explorer {
    /// Run `algorithm`. DFS and BFS ignore `weights` apart from its
    /// dimensions, which must still match the terrain.
    pub fn run<C, O>(
        &mut self,
        algorithm: Algorithm,
        terrain: &Terrain,
        weights: &WeightMap,
        config: &TraversalConfig,
        cancel: &C,
        observer: &mut O,
    ) -> Result<Outcome, ConfigError>
    where
        C: Cancel + ?Sized,
        O: Observer + ?Sized,
    {
        if weights.size() != terrain.size() {
            return Err(ConfigError::DimensionMismatch {
                expected: terrain.size(),
                found: weights.size(),
            });
        }
        match algorithm {
            Algorithm::Dfs => self.dfs(terrain, config, cancel, observer),
            Algorithm::Bfs => self.bfs(terrain, config, cancel, observer),
            Algorithm::Dijkstra => self.dijkstra(terrain, weights, config, cancel, observer),
            Algorithm::Astar => self.astar(terrain, weights, config, cancel, observer),
        }
    }
}

/// Run `algorithm` once on a fresh [`Explorer`].
///
/// Use [`Explorer::run`] instead to reuse buffers across runs or to inspect
/// the visited order afterwards.
pub fn run_traversal<C, O>(
    algorithm: Algorithm,
    terrain: &Terrain,
    weights: &WeightMap,
    config: &TraversalConfig,
    cancel: &C,
    observer: &mut O,
) -> Result<Outcome, ConfigError>
where
    C: Cancel + ?Sized,
    O: Observer + ?Sized,
{
    Explorer::with_bounds(terrain.bounds()).run(algorithm, terrain, weights, config, cancel, observer)
}
