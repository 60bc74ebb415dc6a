use pathviz_core::Point;

use crate::distance::manhattan;
use crate::step::StepSize;

/// Estimate of the remaining cost from a cell to the target.
///
/// The priority of a frontier entry is its accumulated weight plus this
/// estimate. [`Heuristic::Zero`] turns A* into Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub enum Heuristic {
    /// No estimate; plain Dijkstra ordering.
    #[default]
    Zero,
    /// Manhattan distance multiplied by `scale`.
    Manhattan { scale: i32 },
    /// Caller-supplied estimate.
    Custom(fn(Point, Point) -> i32),
}

impl Heuristic {
    /// The default A* heuristic for a step size: Manhattan distance scaled
    /// by `k + 1`, so the estimate grows with the cost of a macro move.
    pub fn for_step(step: StepSize) -> Self {
        Heuristic::Manhattan {
            scale: step.get().saturating_add(1),
        }
    }

    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::Manhattan { scale } => scale.saturating_mul(manhattan(from, to)),
            Heuristic::Custom(f) => f(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_scales_with_step() {
        let h = Heuristic::for_step(StepSize::ONE);
        assert_eq!(h.estimate(Point::new(0, 0), Point::new(2, 3)), 10);
        let h = Heuristic::for_step(StepSize::new(3).unwrap());
        assert_eq!(h.estimate(Point::new(0, 0), Point::new(1, 0)), 4);
    }

    #[test]
    fn huge_steps_saturate() {
        let h = Heuristic::for_step(StepSize::new(i32::MAX).unwrap());
        assert!(matches!(h, Heuristic::Manhattan { scale: i32::MAX }));
        assert_eq!(h.estimate(Point::ZERO, Point::new(3, 0)), i32::MAX);
    }

    #[test]
    fn zero_and_custom() {
        assert_eq!(Heuristic::Zero.estimate(Point::ZERO, Point::new(9, 9)), 0);
        let h = Heuristic::Custom(|a, b| (a.x - b.x).abs());
        assert_eq!(h.estimate(Point::new(1, 0), Point::new(4, 8)), 3);
    }
}
