use pathviz_core::{Matrix, PathMask, Point, Range, UNVISITED, VisitedOrder, WeightMap};

/// Lifecycle of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No run has started since the explorer was created or cleared.
    #[default]
    Idle,
    /// A run is in progress (observable from inside observer callbacks).
    Running,
    /// The last run reached the target.
    Found,
    /// The last run emptied its frontier, was cancelled, or had no
    /// source/target to start from.
    Exhausted,
}

/// A path from source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Found {
    pub source: Point,
    pub target: Point,
    /// Cells from source to target, both inclusive.
    pub path: Vec<Point>,
    /// Accumulated weight for weighted runs, number of moves otherwise.
    pub cost: i32,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found(Found),
    Exhausted,
    Cancelled,
}

impl Outcome {
    /// The path, if the target was reached.
    pub fn found(&self) -> Option<&Found> {
        match self {
            Outcome::Found(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// Central coordinator for traversals on a terrain.
///
/// `Explorer` owns the output layers of a run (visited order, path mask,
/// current node) together with the scratch buffers the algorithms need, so
/// repeated runs reuse their allocations. Every run resets the layers to the
/// terrain's dimensions before exploring; after it returns they stay
/// readable until the next run or [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct Explorer {
    pub(crate) visited: VisitedOrder,
    pub(crate) path: PathMask,
    /// Working copy of the weight map. Finalized cells hold their
    /// accumulated weight instead.
    pub(crate) costs: Matrix<i32>,
    pub(crate) order: i32,
    pub(crate) current: Option<Point>,
    pub(crate) status: Status,
    // reachability scratch
    pub(crate) seen: Matrix<bool>,
    pub(crate) stack: Vec<Point>,
}

impl Explorer {
    /// Create an explorer with empty layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an explorer with layers preallocated for `bounds`.
    pub fn with_bounds(bounds: Range) -> Self {
        let mut e = Self::default();
        e.reset(bounds, None);
        e.status = Status::Idle;
        e
    }

    /// Discard the results of the last run.
    pub fn clear(&mut self) {
        let bounds = self.visited.bounds();
        self.reset(bounds, None);
        self.status = Status::Idle;
    }

    /// Where the last run stands.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Visited order of the last run.
    #[inline]
    pub fn visited(&self) -> &VisitedOrder {
        &self.visited
    }

    /// Path mask of the last run.
    #[inline]
    pub fn path_mask(&self) -> &PathMask {
        &self.path
    }

    /// The node last processed, `None` when idle or after a run that found
    /// nothing.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Number of cells finalized by the last run.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.order.max(0) as usize
    }

    /// Accumulated weight at which `p` was finalized by the last weighted
    /// run, or `None` if it was never finalized.
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        match self.visited.at(p) {
            Some(o) if o != UNVISITED => self.costs.at(p),
            _ => None,
        }
    }

    /// Reset the layers for a run over `bounds`.
    pub(crate) fn reset(&mut self, bounds: Range, weights: Option<&WeightMap>) {
        self.visited.reset(bounds, UNVISITED);
        self.path.reset(bounds, false);
        match weights {
            Some(w) => self.costs.clone_from(w),
            None => self.costs.reset(bounds, 0),
        }
        self.order = 0;
        self.current = None;
        self.status = Status::Running;
    }

    #[inline]
    pub(crate) fn is_finalized(&self, p: Point) -> bool {
        self.visited.at(p).is_some_and(|o| o != UNVISITED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_sizes_layers_to_bounds() {
        let mut e = Explorer::with_bounds(Range::sized(4, 3));
        assert_eq!(e.status(), Status::Idle);
        assert_eq!(e.visited().size(), Point::new(4, 3));
        assert_eq!(e.visited().count(UNVISITED), 12);
        assert_eq!(e.path_mask().count(true), 0);

        let w = WeightMap::new(2, 2, 3);
        e.reset(Range::sized(2, 2), Some(&w));
        assert_eq!(e.visited().size(), Point::new(2, 2));
        assert_eq!(e.costs, w);
        assert_eq!(e.status(), Status::Running);
        assert_eq!(e.cost_at(Point::ZERO), None);
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut e = Explorer::with_bounds(Range::sized(2, 2));
        e.visited.set(Point::ZERO, 0);
        e.order = 1;
        e.status = Status::Found;
        e.clear();
        assert_eq!(e.status(), Status::Idle);
        assert_eq!(e.visited_count(), 0);
        assert!(!e.is_finalized(Point::ZERO));
    }
}
