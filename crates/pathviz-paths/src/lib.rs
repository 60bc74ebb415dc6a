//! Animated grid traversals.
//!
//! This crate runs the classic search algorithms over a [`Terrain`]
//! (see `pathviz-core`) and reports every intermediate state to an
//! [`Observer`] so a front-end can animate it:
//!
//! - **DFS** ([`Explorer::dfs`]) explicit-stack depth-first search
//! - **BFS** ([`Explorer::bfs`]) fewest moves
//! - **Dijkstra** ([`Explorer::dijkstra`]) least accumulated weight
//! - **A\*** ([`Explorer::astar`]) Dijkstra guided by a [`Heuristic`]
//! - **Reachability** ([`Explorer::reachable`]) flood fill over passable cells
//!
//! All algorithms run through [`Explorer`], which owns the visited order,
//! path mask and scratch buffers and reuses them across runs.
//!
//! # Frontiers
//!
//! | Algorithm | Frontier | Path reconstruction |
//! |---|---|---|
//! | DFS | stack | [`Ranking::LatestDiscovery`] |
//! | BFS | FIFO queue | [`Ranking::LatestDiscovery`] |
//! | Dijkstra | min-heap on weight | [`Ranking::LeastCost`] |
//! | A* | min-heap on weight + estimate | [`Ranking::LeastCost`] |
//!
//! [`Terrain`]: pathviz_core::Terrain

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod explore;
mod explorer;
mod frontier;
mod heuristic;
mod observer;
mod reachable;
mod reconstruct;
mod run;
mod step;

pub use distance::manhattan;
pub use explorer::{Explorer, Found, Outcome, Status};
pub use heuristic::Heuristic;
pub use observer::{Observer, Recorder};
pub use reconstruct::Ranking;
pub use run::{Algorithm, TraversalConfig, UnknownAlgorithm, run_traversal};
pub use step::{Step, StepGenerator, StepSize};
