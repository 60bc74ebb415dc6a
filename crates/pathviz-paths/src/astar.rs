use pathviz_core::{Cancel, ConfigError, Terrain, WeightMap};

use crate::explore::Search;
use crate::explorer::{Explorer, Outcome};
use crate::frontier::Priority;
use crate::heuristic::Heuristic;
use crate::observer::Observer;
use crate::run::TraversalConfig;
use crate::step::StepSize;

impl Explorer {
    /// A* search with the default heuristic for the configured step size
    /// (see [`Heuristic::for_step`]).
    pub fn astar<C, O>(
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
        let heuristic = Heuristic::for_step(StepSize::new(config.step)?);
        self.astar_with(terrain, weights, heuristic, config, cancel, observer)
    }

    /// A* search with an explicit heuristic.
    ///
    /// The frontier is ordered by accumulated weight plus the estimate to
    /// the target; equal priorities leave in insertion order.
    pub fn astar_with<C, O>(
        &mut self,
        terrain: &Terrain,
        weights: &WeightMap,
        heuristic: Heuristic,
        config: &TraversalConfig,
        cancel: &C,
        observer: &mut O,
    ) -> Result<Outcome, ConfigError>
    where
        C: Cancel + ?Sized,
        O: Observer + ?Sized,
    {
        let name = match heuristic {
            Heuristic::Zero => "dijkstra",
            _ => "astar",
        };
        let mut frontier = Priority::default();
        self.explore(
            Search::weighted(name, terrain, weights, heuristic),
            &mut frontier,
            config,
            cancel,
            observer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Never, Point, UNVISITED};

    #[test]
    fn astar_heads_for_the_target() {
        let t = Terrain::parse(
            "
            .......
            S.....T
            .......",
        )
        .unwrap();
        let w = WeightMap::new(7, 3, 1);
        let mut e = Explorer::new();
        let out = e
            .astar(&t, &w, &TraversalConfig::default(), &Never, &mut ())
            .unwrap();
        assert_eq!(out.found().map(|f| f.cost), Some(6));
        // Nothing behind the source is worth exploring.
        assert_eq!(e.visited().at(Point::new(0, 0)), Some(UNVISITED));
        assert_eq!(e.visited().at(Point::new(0, 2)), Some(UNVISITED));
        assert_eq!(e.visited_count(), 7);
    }

    #[test]
    fn astar_explores_less_than_dijkstra() {
        let t = Terrain::parse(
            "
            ........
            ........
            S......T
            ........
            ........",
        )
        .unwrap();
        let w = WeightMap::new(8, 5, 2);
        let cfg = TraversalConfig::default();
        let mut e = Explorer::new();
        let a = e.astar(&t, &w, &cfg, &Never, &mut ()).unwrap();
        let a_visited = e.visited_count();
        let d = e.dijkstra(&t, &w, &cfg, &Never, &mut ()).unwrap();
        assert_eq!(a.found().map(|f| f.cost), d.found().map(|f| f.cost));
        assert!(a_visited < e.visited_count());
    }

    #[test]
    fn custom_heuristic_is_used() {
        let t = Terrain::parse("S...T").unwrap();
        let w = WeightMap::new(5, 1, 1);
        let mut e = Explorer::new();
        let out = e
            .astar_with(
                &t,
                &w,
                Heuristic::Custom(|a, b| (b.x - a.x).abs()),
                &TraversalConfig::default(),
                &Never,
                &mut (),
            )
            .unwrap();
        assert_eq!(out.found().map(|f| f.path.len()), Some(5));
    }
}
