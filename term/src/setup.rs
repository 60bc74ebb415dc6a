//! Building the terrain and weights for a run from the command line.

use std::fmt;

use log::{debug, warn};
use pathviz_core::{CellKind, ConfigError, Point, Terrain, WeightMap};
use pathviz_gen::{Generator, MapGen, Weighting};
use pathviz_paths::Explorer;
use rand::Rng;

/// Why a scene could not be set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    Config(ConfigError),
    /// The grid must be at least one cell in each direction.
    EmptyGrid { width: i32, height: i32 },
    /// No open square of the step size was found for the endpoint.
    NoRoom(CellKind),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Config(e) => write!(f, "{e}"),
            SetupError::EmptyGrid { width, height } => {
                write!(f, "grid of {width}x{height} has no cells")
            }
            SetupError::NoRoom(kind) => write!(f, "no room to place the {kind:?}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

/// A generated terrain with its endpoints and weights.
#[derive(Debug)]
pub struct Scene {
    pub terrain: Terrain,
    pub weights: WeightMap,
    pub source: Point,
    pub target: Point,
    /// Whether the target can be reached at all, ignoring the step size.
    pub reachable: bool,
}

/// Generate a terrain, then place the source near the top-left corner and
/// the target near the bottom-right one as `step × step` blobs on open
/// ground.
pub fn build_scene<R: Rng>(
    width: i32,
    height: i32,
    generator: Generator,
    weighting: Weighting,
    step: i32,
    rng: R,
) -> Result<Scene, SetupError> {
    if width < 1 || height < 1 {
        return Err(SetupError::EmptyGrid { width, height });
    }
    let mut mg = MapGen::with_terrain(Terrain::grass(width, height), rng);
    mg.generate(generator, step)?;

    let source = open_anchor(&mg.terrain, Point::new(0, step - 1), step)
        .ok_or(SetupError::NoRoom(CellKind::Source))?;
    mg.terrain.place_endpoint(CellKind::Source, source, step);
    let target = open_anchor(&mg.terrain, Point::new(width - step, height - 1), step)
        .ok_or(SetupError::NoRoom(CellKind::Target))?;
    mg.terrain.place_endpoint(CellKind::Target, target, step);
    debug!("source at {source}, target at {target}");

    let weights = weighting.supply(width, height, &mut mg.rng);
    let terrain = mg.into_terrain();
    let reachable = Explorer::new().is_reachable(&terrain, source, target);
    if !reachable {
        warn!("the target at {target} cannot be reached from {source}");
    }
    Ok(Scene {
        terrain,
        weights,
        source,
        target,
        reachable,
    })
}

/// The anchor closest to `ideal` whose `size × size` blob, extending up
/// and right, lies on grass only.
fn open_anchor(terrain: &Terrain, ideal: Point, size: i32) -> Option<Point> {
    let fits = |anchor: Point| {
        (0..size).all(|dy| {
            (0..size).all(|dx| terrain.at(anchor + Point::new(dx, -dy)) == Some(CellKind::Grass))
        })
    };
    let reach = terrain.width() + terrain.height();
    (0..reach).find_map(|r| {
        // Points at Manhattan distance `r`, in a fixed order.
        (-r..=r)
            .flat_map(|dx| {
                let dy = r - dx.abs();
                [Point::new(dx, dy), Point::new(dx, -dy)]
            })
            .map(|d| ideal + d)
            .find(|&p| fits(p))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn flat_scene_uses_the_corners() {
        let scene = build_scene(10, 6, Generator::Flat, Weighting::Unweighted, 2, StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(scene.source, Point::new(0, 1));
        assert_eq!(scene.target, Point::new(8, 5));
        assert_eq!(scene.terrain.count(CellKind::Source), 4);
        assert_eq!(scene.terrain.count(CellKind::Target), 4);
        assert_eq!(scene.terrain.find_isolated(CellKind::Source), Some(scene.source));
        assert!(scene.reachable);
        assert_eq!(scene.weights.count(1), 60);
    }

    #[test]
    fn endpoints_avoid_water() {
        let terrain = Terrain::parse(
            "
            ~~...
            ~~...
            .....",
        )
        .unwrap();
        let anchor = open_anchor(&terrain, Point::new(0, 1), 2).unwrap();
        assert!(anchor.x >= 2 || anchor.y == 2);
        assert_eq!(open_anchor(&Terrain::parse("~~").unwrap(), Point::ZERO, 1), None);
    }

    #[test]
    fn generated_scenes_place_both_endpoints() {
        for seed in 0..10 {
            for generator in Generator::ALL {
                let scene = build_scene(
                    30,
                    20,
                    generator,
                    Weighting::RANDOM,
                    1,
                    StdRng::seed_from_u64(seed),
                )
                .unwrap();
                assert_eq!(scene.terrain.count(CellKind::Source), 1);
                assert_eq!(scene.terrain.count(CellKind::Target), 1);
            }
        }
    }

    #[test]
    fn bad_dimensions_and_steps_are_rejected() {
        let rng = StdRng::seed_from_u64(0);
        assert_eq!(
            build_scene(0, 5, Generator::Flat, Weighting::Unweighted, 1, rng.clone()).unwrap_err(),
            SetupError::EmptyGrid { width: 0, height: 5 }
        );
        assert_eq!(
            build_scene(5, 5, Generator::Flat, Weighting::Unweighted, 0, rng).unwrap_err(),
            SetupError::Config(ConfigError::InvalidStepSize(0))
        );
    }
}
