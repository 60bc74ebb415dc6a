//! Terrain and weight generation for the grid search visualizer.
//!
//! [`MapGen`] mutates a [`Terrain`](pathviz_core::Terrain) in place with
//! one of the [`Generator`]s; [`Weighting`] supplies the per-cell costs
//! used by Dijkstra and A*.

mod mapgen;
mod weights;

pub use mapgen::{Generator, MapGen, RiverConfig, UnknownGenerator};
pub use weights::{Weighting, random_weights, unit_weights};
