//! Terrain generators.
//!
//! - **Flat**: plain grass everywhere.
//! - **Rivers**: meandering water bands with occasional bridges.
//! - **Recursive division**: a maze of water walls with doors sized for
//!   the traversal step.

use std::fmt;
use std::str::FromStr;

use log::debug;
use pathviz_core::{CellKind, ConfigError, Matrix, Point, Terrain};
use rand::Rng;

/// Parameters of [`MapGen::rivers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiverConfig {
    /// Number of rivers carved.
    pub rivers: u32,
    /// Expected number of bridges per river length, shared across all
    /// rivers. Zero disables bridges.
    pub bridges: u32,
    /// Nominal band width. Each sweep step widens it by up to one cell on
    /// either side.
    pub width: i32,
}

impl Default for RiverConfig {
    fn default() -> Self {
        Self {
            rivers: 4,
            bridges: 3,
            width: 2,
        }
    }
}

/// Which generator [`MapGen::generate`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generator {
    #[default]
    Flat,
    Rivers,
    RecursiveDivision,
}

impl Generator {
    pub const ALL: [Generator; 3] = [
        Generator::Flat,
        Generator::Rivers,
        Generator::RecursiveDivision,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Generator::Flat => "flat",
            Generator::Rivers => "rivers",
            Generator::RecursiveDivision => "maze",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown generator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenerator(pub String);

impl fmt::Display for UnknownGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown generator '{}'", self.0)
    }
}

impl std::error::Error for UnknownGenerator {}

impl FromStr for Generator {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGenerator(s.to_string()))
    }
}

/// An inclusive rectangle of rows `i1..=i2` and columns `j1..=j2`.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    i1: i32,
    j1: i32,
    i2: i32,
    j2: i32,
}

/// Terrain generator owning the terrain it mutates and its random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub terrain: Terrain,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given terrain.
    pub fn with_terrain(terrain: Terrain, rng: R) -> Self {
        Self { rng, terrain }
    }

    /// Release the terrain.
    pub fn into_terrain(self) -> Terrain {
        self.terrain
    }

    /// Run `generator`. `step` is the door size of recursive division and
    /// is validated for every generator.
    ///
    /// Returns the number of cells carved.
    pub fn generate(&mut self, generator: Generator, step: i32) -> Result<usize, ConfigError> {
        if step < 1 {
            return Err(ConfigError::InvalidStepSize(step));
        }
        let carved = match generator {
            Generator::Flat => self.flat(),
            Generator::Rivers => self.rivers(&RiverConfig::default()),
            Generator::RecursiveDivision => self.recursive_division(step)?,
        };
        debug!(
            "{generator}: carved {carved} cells on {}",
            self.terrain.bounds()
        );
        Ok(carved)
    }

    /// Turn every cell into grass, endpoints included.
    ///
    /// Returns the number of cells that changed.
    pub fn flat(&mut self) -> usize {
        let changed = self.terrain.count_fn(|_, k| k != CellKind::Grass);
        self.terrain.fill(CellKind::Grass);
        changed
    }

    /// Carve `config.rivers` rivers across the terrain.
    ///
    /// Each river picks an orientation and a starting centerline at
    /// random, then sweeps across the other axis one line at a time. On
    /// every line a band around the centerline is flooded, or bridged with
    /// probability `bridges / (length × rivers)`, and the centerline drifts
    /// by at most one cell. Only grass is ever carved, so endpoints and
    /// earlier rivers are left alone.
    ///
    /// Returns the number of cells carved.
    pub fn rivers(&mut self, config: &RiverConfig) -> usize {
        let (w, h) = (self.terrain.width(), self.terrain.height());
        if w == 0 || h == 0 {
            return 0;
        }
        let mut carved = 0;
        for _ in 0..config.rivers {
            let vertical = self.rng.random_bool(0.5);
            // The band runs across `breadth`, the sweep along `length`.
            let (breadth, length) = if vertical { (w, h) } else { (h, w) };
            let at = |line: i32, across: i32| {
                if vertical {
                    Point::new(across, line)
                } else {
                    Point::new(line, across)
                }
            };
            let p_bridge =
                (f64::from(config.bridges) / (f64::from(length) * f64::from(config.rivers))).min(1.0);

            let mut center = self.rng.random_range(0..breadth);
            for line in 0..length {
                let lo = (center - (config.width / 2 + self.rng.random_range(0..=1))).clamp(0, breadth - 1);
                let hi = (center + (config.width / 2 + self.rng.random_range(0..=1))).clamp(0, breadth - 1);
                let bridge = self.rng.random_bool(p_bridge);
                center = (center + self.rng.random_range(-1..=1)).clamp(0, breadth - 1);

                let kind = if bridge { CellKind::Bridge } else { CellKind::Water };
                for across in lo..=hi {
                    let p = at(line, across);
                    if self.terrain.at(p) == Some(CellKind::Grass) {
                        self.terrain.set(p, kind);
                        carved += 1;
                    }
                }
            }
        }
        carved
    }

    /// Build a maze by recursive division with doors `size` cells wide.
    ///
    /// Chambers narrower than `2 × size` in either direction are left
    /// open. A wall splits the longer side of each chamber (either side
    /// when square) and gets one door; wall cells within `size` of an
    /// earlier door along the wall line stay open so every door remains
    /// passable. Source and target cells are never walled over.
    ///
    /// Returns the net number of cells turned into water.
    pub fn recursive_division(&mut self, size: i32) -> Result<usize, ConfigError> {
        if size < 1 {
            return Err(ConfigError::InvalidStepSize(size));
        }
        let (w, h) = (self.terrain.width(), self.terrain.height());
        if w == 0 || h == 0 {
            return Ok(0);
        }

        let before = self.terrain.count(CellKind::Water);
        let mut doors = Matrix::with_bounds(self.terrain.bounds(), false);
        let mut pending = vec![Chamber {
            i1: 0,
            j1: 0,
            i2: h - 1,
            j2: w - 1,
        }];

        while let Some(c) = pending.pop() {
            let (rows, cols) = (c.i2 - c.i1, c.j2 - c.j1);
            let min_span = size.saturating_mul(2);
            if rows < min_span || cols < min_span {
                continue;
            }
            let j = self.wall_offset(c.j1, cols, size);
            let i = self.wall_offset(c.i1, rows, size);
            let vertical = match rows.cmp(&cols) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => self.rng.random_bool(0.5),
            };

            // Wall cells, the direction along the wall, and the door start.
            let (cells, along, door): (Vec<Point>, Point, Point) = if vertical {
                ((c.i1..=c.i2).map(|k| Point::new(j, k)).collect(), Point::DOWN, Point::new(j, i))
            } else {
                ((c.j1..=c.j2).map(|k| Point::new(k, i)).collect(), Point::RIGHT, Point::new(j, i))
            };

            for p in cells {
                let near_door = (1..=size)
                    .any(|d| doors.at(p - along * d) == Some(true) || doors.at(p + along * d) == Some(true));
                if near_door {
                    continue;
                }
                if self.terrain.at(p).is_some_and(|k| !k.is_endpoint()) {
                    self.terrain.set(p, CellKind::Water);
                }
            }

            for d in 0..size {
                let p = door + along * d;
                if !doors.contains(p) {
                    continue;
                }
                doors.set(p, true);
                if self.terrain.at(p) == Some(CellKind::Water) {
                    self.terrain.set(p, CellKind::Grass);
                }
            }

            // Pushed in reverse so the first half is divided first.
            if vertical {
                pending.push(Chamber { j1: j + 1, ..c });
                pending.push(Chamber { j2: j - 1, ..c });
            } else {
                pending.push(Chamber { i1: i + 1, ..c });
                pending.push(Chamber { i2: i - 1, ..c });
            }
        }

        Ok(self.terrain.count(CellKind::Water).saturating_sub(before))
    }

    /// Wall position within a chamber side starting at `lo` and spanning
    /// `span` cells past it: at least `size` past `lo`, in the first half
    /// of what remains.
    fn wall_offset(&mut self, lo: i32, span: i32, size: i32) -> i32 {
        let room = f64::from(span - size) / 2.0;
        lo + (self.rng.random::<f64>() * room) as i32 + size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_paths::Explorer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mapgen(w: i32, h: i32, seed: u64) -> MapGen<StdRng> {
        MapGen::with_terrain(Terrain::grass(w, h), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn flat_clears_everything() {
        let mut mg = MapGen::with_terrain(
            Terrain::parse(
                "
                S~=
                ~.T",
            )
            .unwrap(),
            StdRng::seed_from_u64(0),
        );
        assert_eq!(mg.flat(), 5);
        assert_eq!(mg.terrain.count(CellKind::Grass), 6);
        assert_eq!(mg.flat(), 0);
    }

    #[test]
    fn rivers_only_carve_grass() {
        for seed in 0..20 {
            let mut mg = mapgen(30, 20, seed);
            mg.terrain.place_endpoint(CellKind::Source, Point::new(0, 19), 2);
            mg.terrain.place_endpoint(CellKind::Target, Point::new(28, 1), 2);
            let carved = mg.rivers(&RiverConfig::default());
            let t = &mg.terrain;
            assert_eq!(t.size(), Point::new(30, 20));
            assert_eq!(t.count(CellKind::Source), 4);
            assert_eq!(t.count(CellKind::Target), 4);
            assert!(carved > 0);
            assert_eq!(carved, t.count(CellKind::Water) + t.count(CellKind::Bridge));
        }
    }

    #[test]
    fn rivers_leave_existing_features_alone() {
        for seed in 0..20 {
            let mut mg = mapgen(30, 20, seed);
            for p in mg.terrain.bounds() {
                match (p.x * 3 + p.y * 5) % 13 {
                    0 => mg.terrain.set(p, CellKind::Water),
                    1 => mg.terrain.set(p, CellKind::Bridge),
                    _ => {}
                }
            }
            let before = mg.terrain.clone();
            let carved = mg.rivers(&RiverConfig::default());
            let mut changed = 0;
            for (p, old) in before.iter() {
                let new = mg.terrain.at(p).unwrap();
                if old != CellKind::Grass {
                    assert_eq!(new, old, "seed {seed}: {p} was rewritten");
                } else if new != CellKind::Grass {
                    changed += 1;
                }
            }
            assert_eq!(changed, carved);
        }
    }

    #[test]
    fn bridges_span_whole_lines() {
        let cfg = RiverConfig {
            rivers: 1,
            bridges: 6,
            width: 2,
        };
        let mut bridges = 0;
        for seed in 0..30 {
            let mut mg = mapgen(24, 16, seed);
            mg.rivers(&cfg);
            let t = &mg.terrain;
            bridges += t.count(CellKind::Bridge);
            // A single river sweeps either rows or columns; every carved
            // cell of a swept line has the same kind.
            let uniform = |line: Vec<CellKind>| {
                let mut carved = line.into_iter().filter(|&k| k != CellKind::Grass);
                carved.next().is_none_or(|first| carved.all(|k| k == first))
            };
            let rows_uniform = (0..t.height())
                .all(|y| uniform((0..t.width()).filter_map(|x| t.at(Point::new(x, y))).collect()));
            let cols_uniform = (0..t.width())
                .all(|x| uniform((0..t.height()).filter_map(|y| t.at(Point::new(x, y))).collect()));
            assert!(rows_uniform || cols_uniform, "seed {seed}:\n{t}");
        }
        assert!(bridges > 0);
    }

    #[test]
    fn huge_door_sizes_leave_the_grid_open() {
        let mut mg = mapgen(5, 5, 1);
        assert_eq!(mg.generate(Generator::RecursiveDivision, i32::MAX), Ok(0));
        assert_eq!(mg.terrain.count(CellKind::Grass), 25);
    }

    #[test]
    fn rivers_without_bridges_are_all_water() {
        let mut mg = mapgen(25, 25, 9);
        let cfg = RiverConfig {
            bridges: 0,
            ..RiverConfig::default()
        };
        let carved = mg.rivers(&cfg);
        assert_eq!(mg.terrain.count(CellKind::Bridge), 0);
        assert_eq!(mg.terrain.count(CellKind::Water), carved);
    }

    #[test]
    fn rivers_with_saturated_bridges_have_no_water() {
        let mut mg = mapgen(25, 25, 9);
        let cfg = RiverConfig {
            bridges: 10_000,
            ..RiverConfig::default()
        };
        let carved = mg.rivers(&cfg);
        assert!(carved > 0);
        assert_eq!(mg.terrain.count(CellKind::Water), 0);
        assert_eq!(mg.terrain.count(CellKind::Bridge), carved);
    }

    #[test]
    fn river_band_reaches_half_width_past_centerline() {
        let cfg = RiverConfig {
            rivers: 1,
            bridges: 0,
            width: 4,
        };
        for seed in 0..10 {
            // At least the centerline and two cells on one side.
            let mut mg = mapgen(40, 1, seed);
            assert!(mg.rivers(&cfg) >= 3);
        }
    }

    #[test]
    fn small_chambers_are_left_open() {
        let mut mg = mapgen(3, 3, 1);
        assert_eq!(mg.recursive_division(2), Ok(0));
        assert_eq!(mg.terrain.count(CellKind::Grass), 9);
    }

    #[test]
    fn division_rejects_invalid_door_size() {
        let mut mg = mapgen(5, 5, 1);
        assert_eq!(mg.recursive_division(0), Err(ConfigError::InvalidStepSize(0)));
        assert_eq!(
            mg.generate(Generator::Flat, -1),
            Err(ConfigError::InvalidStepSize(-1))
        );
    }

    #[test]
    fn division_keeps_open_cells_connected() {
        let mut e = Explorer::new();
        for (w, h, size) in [(5, 5, 1), (11, 7, 1), (21, 21, 1), (24, 17, 2), (30, 30, 3)] {
            for seed in 0..25 {
                let mut mg = mapgen(w, h, seed);
                let carved = mg.recursive_division(size).unwrap();
                let t = &mg.terrain;
                assert_eq!(carved, t.count(CellKind::Water));
                let open = t.count_fn(|_, k| k.is_passable());
                let Some((start, _)) = t.iter().find(|&(_, k)| k.is_passable()) else {
                    panic!("no open cell on {w}x{h} seed {seed}");
                };
                assert_eq!(
                    e.reachable(t, start).len(),
                    open,
                    "{w}x{h} size {size} seed {seed}:\n{t}"
                );
            }
        }
    }

    #[test]
    fn division_builds_walls() {
        let mut mg = mapgen(21, 21, 4);
        assert!(mg.recursive_division(1).unwrap() > 0);
    }

    #[test]
    fn division_spares_endpoints() {
        for seed in 0..20 {
            let mut mg = mapgen(15, 15, seed);
            mg.terrain.place_endpoint(CellKind::Source, Point::new(0, 14), 3);
            mg.terrain.place_endpoint(CellKind::Target, Point::new(12, 2), 3);
            mg.generate(Generator::RecursiveDivision, 1).unwrap();
            assert_eq!(mg.terrain.count(CellKind::Source), 9);
            assert_eq!(mg.terrain.count(CellKind::Target), 9);
        }
    }

    #[test]
    fn generator_names_parse() {
        for g in Generator::ALL {
            assert_eq!(g.to_string().parse::<Generator>(), Ok(g));
        }
        assert!("swamp".parse::<Generator>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn river_config_serializes() {
        let cfg = RiverConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: RiverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
