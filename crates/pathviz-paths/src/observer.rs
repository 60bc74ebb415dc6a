use std::thread;
use std::time::Duration;

use pathviz_core::{PathMask, Point, VisitedOrder};

/// Receives the intermediate states of a traversal.
///
/// Every method has a default, so an observer only implements what it
/// renders. `()` observes nothing but still honours pauses.
pub trait Observer {
    /// A new visited-order snapshot.
    fn on_visited(&mut self, _visited: &VisitedOrder) {}

    /// The node being processed, `None` once the run stops without a path.
    fn on_current(&mut self, _node: Option<Point>) {}

    /// A new path snapshot.
    fn on_path(&mut self, _path: &PathMask) {}

    /// Suspend between animation steps. A zero delay still yields the
    /// thread once.
    fn pause(&mut self, delay: Duration) {
        if delay.is_zero() {
            thread::yield_now();
        } else {
            thread::sleep(delay);
        }
    }
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_visited(&mut self, visited: &VisitedOrder) {
        (**self).on_visited(visited);
    }

    fn on_current(&mut self, node: Option<Point>) {
        (**self).on_current(node);
    }

    fn on_path(&mut self, path: &PathMask) {
        (**self).on_path(path);
    }

    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay);
    }
}

/// A headless observer that keeps the latest snapshots and counts events.
///
/// Pauses are recorded, not slept.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub visited: Option<VisitedOrder>,
    pub path: Option<PathMask>,
    /// Every `on_current` call, in order.
    pub currents: Vec<Option<Point>>,
    pub visited_events: usize,
    pub path_events: usize,
    pub pauses: usize,
    pub slept: Duration,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last reported current node.
    pub fn current(&self) -> Option<Point> {
        self.currents.last().copied().flatten()
    }
}

impl Observer for Recorder {
    fn on_visited(&mut self, visited: &VisitedOrder) {
        self.visited_events += 1;
        self.visited = Some(visited.clone());
    }

    fn on_current(&mut self, node: Option<Point>) {
        self.currents.push(node);
    }

    fn on_path(&mut self, path: &PathMask) {
        self.path_events += 1;
        self.path = Some(path.clone());
    }

    fn pause(&mut self, delay: Duration) {
        self.pauses += 1;
        self.slept += delay;
    }
}
