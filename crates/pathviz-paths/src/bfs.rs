use pathviz_core::{Cancel, ConfigError, Terrain};

use crate::explore::Search;
use crate::explorer::{Explorer, Outcome};
use crate::frontier::Queue;
use crate::observer::Observer;
use crate::run::TraversalConfig;

impl Explorer {
    /// Breadth-first search from the source to the target.
    ///
    /// Every move costs the same, so the reconstructed path has the fewest
    /// moves. Weights are ignored.
    pub fn bfs<C, O>(
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
        let mut frontier = Queue::default();
        self.explore(Search::unweighted("bfs", terrain), &mut frontier, config, cancel, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Never, Point};

    #[test]
    fn bfs_visits_in_rings() {
        let t = Terrain::parse(
            "
            ...
            .S.
            ..T",
        )
        .unwrap();
        let mut e = Explorer::new();
        e.bfs(&t, &TraversalConfig::default(), &Never, &mut ()).unwrap();
        let v = e.visited();
        assert_eq!(v.at(Point::new(1, 1)), Some(0));
        // Ring one in down, left, up, right order.
        assert_eq!(v.at(Point::new(1, 2)), Some(1));
        assert_eq!(v.at(Point::new(0, 1)), Some(2));
        assert_eq!(v.at(Point::new(1, 0)), Some(3));
        assert_eq!(v.at(Point::new(2, 1)), Some(4));
    }

    #[test]
    fn bfs_finds_fewest_moves_around_water() {
        let t = Terrain::parse(
            "
            S.....
            ~~~~~.
            T.....",
        )
        .unwrap();
        let mut e = Explorer::new();
        let out = e.bfs(&t, &TraversalConfig::default(), &Never, &mut ()).unwrap();
        let found = out.found().unwrap();
        assert_eq!(found.cost, 12);
        assert_eq!(found.path.len(), 13);
        assert!(found.path.contains(&Point::new(5, 1)));
    }
}
