use pathviz_core::{Cancel, ConfigError, Terrain};

use crate::explore::Search;
use crate::explorer::{Explorer, Outcome};
use crate::frontier::Stack;
use crate::observer::Observer;
use crate::run::TraversalConfig;

impl Explorer {
    /// Depth-first search from the source to the target.
    ///
    /// Successors are explored in down, left, up, right order, exactly as a
    /// recursive visit would, but on an explicit stack. Weights are ignored;
    /// the path is reconstructed by latest discovery.
    pub fn dfs<C, O>(
        &mut self,
        terrain: &Terrain,
        config: &TraversalConfig,
        cancel: &C,
        observer: &mut O,
    ) -> Result<Outcome, ConfigError>
    where
        C: Cancel + ?Sized,
        O: Observer + ?Sized,
    {
        let mut frontier = Stack::default();
        self.explore(Search::unweighted("dfs", terrain), &mut frontier, config, cancel, observer)
    }
}
