use pathviz_core::{ConfigError, Point, Terrain, WeightMap};

/// Macro-move granularity: how many cells must be clear for one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepSize(i32);

impl StepSize {
    /// Classic single-cell movement.
    pub const ONE: Self = Self(1);

    /// Validate a step size. Sizes below 1 are rejected.
    pub fn new(k: i32) -> Result<Self, ConfigError> {
        if k < 1 {
            return Err(ConfigError::InvalidStepSize(k));
        }
        Ok(Self(k))
    }

    /// The raw size.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i32> for StepSize {
    type Error = ConfigError;

    fn try_from(k: i32) -> Result<Self, ConfigError> {
        Self::new(k)
    }
}

/// A candidate move produced by [`StepGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// The one-cell neighbour the move reports as its destination.
    pub to: Point,
    /// Summed weight of every cell in the validated run.
    pub weight: i32,
}

/// Cached successor computation for macro moves.
///
/// For each direction (down, left, up, right) the run of `size` cells
/// starting next to the current cell must be in bounds and free of water.
/// A valid run yields a [`Step`] whose destination is the adjacent cell,
/// not the far end of the run: clearance is checked over `size` cells while
/// the search keeps single-cell resolution.
pub struct StepGenerator {
    size: StepSize,
    buf: Vec<Step>,
}

impl StepGenerator {
    /// Create a generator for the given step size.
    pub fn new(size: StepSize) -> Self {
        Self {
            size,
            buf: Vec::with_capacity(4),
        }
    }

    /// The step size this generator validates.
    #[inline]
    pub fn size(&self) -> StepSize {
        self.size
    }

    /// Valid moves out of `p`, in direction order.
    ///
    /// Run weights come from `weights`; without a weight map every step
    /// weighs 0.
    pub fn steps(&mut self, terrain: &Terrain, weights: Option<&WeightMap>, p: Point) -> &[Step] {
        self.buf.clear();
        for d in Point::CARDINALS {
            if let Some(weight) = self.run_weight(terrain, weights, p, d) {
                self.buf.push(Step { to: p + d, weight });
            }
        }
        &self.buf
    }

    /// Weight of the run leaving `p` in direction `d`, or `None` if any of
    /// its cells is out of bounds or water.
    pub fn run_weight(
        &self,
        terrain: &Terrain,
        weights: Option<&WeightMap>,
        p: Point,
        d: Point,
    ) -> Option<i32> {
        let mut total: i32 = 0;
        for i in 1..=self.size.get() {
            let c = p + d * i;
            if !terrain.at(c)?.is_passable() {
                return None;
            }
            total = weights.and_then(|w| w.at(c)).map_or(total, |w| total.saturating_add(w));
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_size_rejects_non_positive() {
        assert_eq!(StepSize::new(0), Err(ConfigError::InvalidStepSize(0)));
        assert_eq!(StepSize::try_from(-2), Err(ConfigError::InvalidStepSize(-2)));
        assert_eq!(StepSize::new(3).map(StepSize::get), Ok(3));
        assert_eq!(StepSize::default(), StepSize::ONE);
    }

    #[test]
    fn unit_steps_match_four_neighbors() {
        let t = Terrain::grass(3, 3);
        let mut w = WeightMap::new(3, 3, 1);
        w.set(Point::new(1, 2), 5);
        let mut g = StepGenerator::new(StepSize::ONE);
        let steps = g.steps(&t, Some(&w), Point::new(1, 1)).to_vec();
        assert_eq!(
            steps,
            vec![
                Step { to: Point::new(1, 2), weight: 5 },
                Step { to: Point::new(0, 1), weight: 1 },
                Step { to: Point::new(1, 0), weight: 1 },
                Step { to: Point::new(2, 1), weight: 1 },
            ]
        );
    }

    #[test]
    fn water_anywhere_in_run_blocks_direction() {
        let t = Terrain::parse(
            "
            .....
            .....
            ....~
            .....
            .....",
        )
        .unwrap();
        let mut g = StepGenerator::new(StepSize::new(2).unwrap());
        let to: Vec<_> = g
            .steps(&t, None, Point::new(2, 2))
            .iter()
            .map(|s| s.to)
            .collect();
        // Right is blocked by the water two cells away.
        assert_eq!(to, vec![Point::new(2, 3), Point::new(1, 2), Point::new(2, 1)]);
    }

    #[test]
    fn runs_leaving_the_grid_are_dropped() {
        let t = Terrain::grass(5, 1);
        let mut g = StepGenerator::new(StepSize::new(2).unwrap());
        let steps = g.steps(&t, None, Point::new(3, 0)).to_vec();
        assert_eq!(steps, vec![Step { to: Point::new(2, 0), weight: 0 }]);
    }

    #[test]
    fn run_weight_sums_every_cell() {
        let t = Terrain::grass(4, 1);
        let mut w = WeightMap::new(4, 1, 1);
        w.fill_fn(|p| p.x + 1);
        let g = StepGenerator::new(StepSize::new(3).unwrap());
        assert_eq!(g.run_weight(&t, Some(&w), Point::new(0, 0), Point::RIGHT), Some(2 + 3 + 4));
        assert_eq!(g.run_weight(&t, None, Point::new(0, 0), Point::RIGHT), Some(0));
        assert_eq!(g.run_weight(&t, Some(&w), Point::new(1, 0), Point::RIGHT), None);
    }
}
