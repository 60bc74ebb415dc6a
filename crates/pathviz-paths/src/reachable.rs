//! Flood-fill reachability over passable cells.

use pathviz_core::{Point, Terrain};

use crate::explorer::Explorer;

impl Explorer {
    /// Flood-fill from `from` and return every passable cell connected to
    /// it through 4-neighbour moves, `from` first.
    ///
    /// Returns an empty vector when `from` is out of bounds or water. The
    /// visited order and path layers of the last run are left untouched.
    pub fn reachable(&mut self, terrain: &Terrain, from: Point) -> Vec<Point> {
        let mut result = Vec::new();
        if !terrain.at(from).is_some_and(|k| k.is_passable()) {
            return result;
        }

        self.seen.reset(terrain.bounds(), false);
        self.stack.clear();
        self.stack.push(from);
        self.seen.set(from, true);
        result.push(from);

        while let Some(p) = self.stack.pop() {
            for n in terrain.neighbors4(p) {
                if self.seen.at(n) == Some(false) && terrain.at(n).is_some_and(|k| k.is_passable()) {
                    self.seen.set(n, true);
                    self.stack.push(n);
                    result.push(n);
                }
            }
        }

        result
    }

    /// Whether a 4-neighbour path of passable cells joins `from` and `to`.
    pub fn is_reachable(&mut self, terrain: &Terrain, from: Point, to: Point) -> bool {
        self.reachable(terrain, from);
        terrain.at(to).is_some_and(|k| k.is_passable()) && self.seen.at(to) == Some(true)
    }
}
