//! **pathviz-core**: core types for the grid search visualizer.
//!
//! This crate provides the types shared by the search engine, the terrain
//! generators and the front-end: geometry primitives, an owned per-cell
//! [`Matrix`], the [`Terrain`] model with its endpoint and neighbour
//! queries, cooperative cancellation, and configuration errors.

pub mod context;
pub mod error;
pub mod geom;
pub mod matrix;
pub mod terrain;

pub use context::{Cancel, Context, Never};
pub use error::{ConfigError, ParseError};
pub use geom::{Point, Range};
pub use matrix::Matrix;
pub use terrain::{CellKind, Terrain};

/// Cost to enter each cell. All ones when a run is unweighted.
pub type WeightMap = Matrix<i32>;

/// Discovery index per cell, [`UNVISITED`] for cells never finalized.
pub type VisitedOrder = Matrix<i32>;

/// Cells on the reconstructed path.
pub type PathMask = Matrix<bool>;

/// Marker stored in a [`VisitedOrder`] for cells that were never finalized.
pub const UNVISITED: i32 = -1;
