//! Backward walk from the target to the source.

use pathviz_core::{Point, UNVISITED};

use crate::explorer::Explorer;
use crate::observer::Observer;
use crate::run::TraversalConfig;

/// How the backward walk picks the predecessor among the neighbours
/// finalized before the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Highest visit order: the most recently discovered predecessor.
    LatestDiscovery,
    /// Lowest accumulated weight; the first neighbour in direction order
    /// wins ties.
    LeastCost,
}

impl Explorer {
    /// Walk back from `from` to the source along the visited order.
    ///
    /// Each step moves to a cardinal neighbour whose order is non-negative
    /// and strictly below the current cell's, chosen by `ranking`, and marks
    /// it on the path mask. The walk stops when no neighbour qualifies,
    /// which is the source on a consistent run. Because the order strictly
    /// decreases it always terminates.
    ///
    /// Returns the path from the last cell reached to `from`.
    pub(crate) fn walk_back<O: Observer + ?Sized>(
        &mut self,
        from: Point,
        ranking: Ranking,
        config: &TraversalConfig,
        observer: &mut O,
    ) -> Vec<Point> {
        let mut path = vec![from];
        let mut cur = from;
        while let Some(next) = self.predecessor(cur, ranking) {
            self.path.set(next, true);
            path.push(next);
            cur = next;
            if config.animate {
                observer.on_path(&self.path);
                observer.pause(config.delay);
            }
        }
        observer.on_path(&self.path);
        path.reverse();
        path
    }

    fn predecessor(&self, p: Point, ranking: Ranking) -> Option<Point> {
        let order = self.visited.at(p)?;
        let mut best: Option<(Point, i32)> = None;
        for n in p.neighbors_4() {
            let Some(o) = self.visited.at(n) else {
                continue;
            };
            if o == UNVISITED || o >= order {
                continue;
            }
            let score = match ranking {
                Ranking::LatestDiscovery => -o,
                Ranking::LeastCost => self.costs.at(n).unwrap_or(i32::MAX),
            };
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((n, score));
            }
        }
        best.map(|(n, _)| n)
    }
}
