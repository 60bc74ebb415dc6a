//! `pathviz`: watch DFS, BFS, Dijkstra and A* explore a generated terrain.
//!
//! Press `q` or `Esc` to stop a run early.

mod render;
mod setup;

use std::time::Duration;

use clap::Parser;
use log::info;
use pathviz_core::Context;
use pathviz_gen::{Generator, Weighting};
use pathviz_paths::{Algorithm, Explorer, Outcome, TraversalConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::render::{Screen, TerminalView};
use crate::setup::build_scene;

/// Largest grid side the terminal can draw.
const MAX_SIDE: i64 = 1000;

#[derive(Parser, Debug)]
#[command(name = "pathviz", version, about = "Animated grid pathfinding in the terminal")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(i32).range(1..=MAX_SIDE))]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(1..=MAX_SIDE))]
    height: i32,

    /// dfs, bfs, dijkstra or astar
    #[arg(short, long, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// flat, rivers or maze
    #[arg(short, long, default_value_t = Generator::Rivers)]
    generator: Generator,

    /// Cells covered by a single move; also the maze door width
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..=MAX_SIDE))]
    step: i32,

    /// Give cells random weights from 1 to 3
    #[arg(short, long)]
    weighted: bool,

    /// Pause between animation steps, in milliseconds
    #[arg(short, long, default_value_t = 10)]
    delay_ms: u64,

    /// Only show the final result
    #[arg(long)]
    no_animate: bool,

    /// Seed for terrain and weights
    #[arg(long)]
    seed: Option<u64>,
}

fn summary(args: &Args, outcome: &Outcome, visited: usize) -> String {
    let what = match outcome {
        Outcome::Found(f) => format!(
            "path of {} cells from {} to {}, cost {}",
            f.path.len(),
            f.source,
            f.target,
            f.cost
        ),
        Outcome::Exhausted => "no path".to_string(),
        Outcome::Cancelled => "cancelled".to_string(),
    };
    format!(
        "{} on {}x{} {} (step {}): {what}, {visited} cells visited",
        args.algorithm, args.width, args.height, args.generator, args.step
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env().init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let weighting = if args.weighted {
        Weighting::RANDOM
    } else {
        Weighting::Unweighted
    };
    let scene = build_scene(
        args.width,
        args.height,
        args.generator,
        weighting,
        args.step,
        StdRng::seed_from_u64(seed),
    )?;

    let config = TraversalConfig {
        step: args.step,
        animate: !args.no_animate,
        delay: Duration::from_millis(args.delay_ms),
    };
    let ctx = Context::new();
    let mut explorer = Explorer::with_bounds(scene.terrain.bounds());

    let outcome = {
        let _screen = Screen::enter()?;
        let mut view = TerminalView::new(&scene.terrain, &scene.weights, ctx.clone());
        view.draw()?;
        view.status("q or Esc to stop")?;
        let outcome = explorer.run(
            args.algorithm,
            &scene.terrain,
            &scene.weights,
            &config,
            &ctx,
            &mut view,
        )?;
        view.draw()?;
        if !ctx.is_done() {
            view.status(&format!("{}, any key to quit", summary(&args, &outcome, explorer.visited_count())))?;
            render::wait_for_key()?;
        }
        outcome
    };

    println!("seed {seed}: {}", summary(&args, &outcome, explorer.visited_count()));
    Ok(())
}
