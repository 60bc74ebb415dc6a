use pathviz_core::{Cancel, ConfigError, Terrain, WeightMap};

use crate::explorer::{Explorer, Outcome};
use crate::heuristic::Heuristic;
use crate::observer::Observer;
use crate::run::TraversalConfig;

impl Explorer {
    /// Dijkstra's algorithm: A* without an estimate.
    ///
    /// Entering a cell costs its weight (summed over the run for step sizes
    /// above one). The path is reconstructed by least accumulated weight.
    pub fn dijkstra<C, O>(
        &mut self,
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
        self.astar_with(terrain, weights, Heuristic::Zero, config, cancel, observer)
    }
}
