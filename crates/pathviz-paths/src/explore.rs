//! The frontier-driven exploration loop shared by every algorithm.

use log::{debug, trace};
use pathviz_core::{Cancel, CellKind, ConfigError, Terrain, WeightMap};

use crate::explorer::{Explorer, Found, Outcome, Status};
use crate::frontier::{Candidate, Frontier};
use crate::heuristic::Heuristic;
use crate::observer::Observer;
use crate::reconstruct::Ranking;
use crate::run::TraversalConfig;
use crate::step::{StepGenerator, StepSize};

/// What distinguishes one algorithm from another, apart from its frontier.
pub(crate) struct Search<'a> {
    pub(crate) name: &'static str,
    pub(crate) terrain: &'a Terrain,
    /// `None` for unweighted searches.
    pub(crate) weights: Option<&'a WeightMap>,
    pub(crate) heuristic: Heuristic,
}

impl<'a> Search<'a> {
    pub(crate) fn unweighted(name: &'static str, terrain: &'a Terrain) -> Self {
        Self {
            name,
            terrain,
            weights: None,
            heuristic: Heuristic::Zero,
        }
    }

    pub(crate) fn weighted(
        name: &'static str,
        terrain: &'a Terrain,
        weights: &'a WeightMap,
        heuristic: Heuristic,
    ) -> Self {
        Self {
            name,
            terrain,
            weights: Some(weights),
            heuristic,
        }
    }

    fn ranking(&self) -> Ranking {
        if self.weights.is_some() {
            Ranking::LeastCost
        } else {
            Ranking::LatestDiscovery
        }
    }
}

impl Explorer {
    /// Run one traversal to completion.
    ///
    /// Candidates leave `frontier` one at a time. Out-of-bounds, water and
    /// already finalized cells are discarded; anything else is finalized
    /// with the next order index. Reaching a target cell reconstructs the
    /// path and ends the run. Cancellation is polled once per finalized
    /// node, before the animation pause.
    pub(crate) fn explore<F, C, O>(
        &mut self,
        search: Search<'_>,
        frontier: &mut F,
        config: &TraversalConfig,
        cancel: &C,
        observer: &mut O,
    ) -> Result<Outcome, ConfigError>
    where
        F: Frontier,
        C: Cancel + ?Sized,
        O: Observer + ?Sized,
    {
        let step = StepSize::new(config.step)?;
        let terrain = search.terrain;
        if let Some(w) = search.weights {
            if w.size() != terrain.size() {
                return Err(ConfigError::DimensionMismatch {
                    expected: terrain.size(),
                    found: w.size(),
                });
            }
        }

        self.reset(terrain.bounds(), search.weights);

        let endpoints = terrain
            .find_isolated(CellKind::Source)
            .zip(terrain.find_isolated(CellKind::Target));
        let Some((source, target)) = endpoints else {
            debug!("{}: no source or target on the terrain", search.name);
            self.exhaust(observer);
            return Ok(Outcome::Exhausted);
        };
        debug!(
            "{}: exploring {} from {source} to {target} with step {}",
            search.name,
            terrain.bounds(),
            step.get()
        );

        frontier.push(Candidate {
            pos: source,
            cost: 0,
            key: search.heuristic.estimate(source, target),
        });

        let mut steps = StepGenerator::new(step);
        let mut successors: Vec<Candidate> = Vec::with_capacity(4);

        while let Some(c) = frontier.pop() {
            let Some(kind) = terrain.at(c.pos) else {
                continue;
            };
            if !kind.is_passable() || self.is_finalized(c.pos) {
                continue;
            }

            self.visited.set(c.pos, self.order);
            self.costs.set(c.pos, c.cost);
            self.order += 1;
            trace!("{}: finalized {} at cost {}", search.name, c.pos, c.cost);

            if kind == CellKind::Target {
                self.path.set(c.pos, true);
                self.current = Some(c.pos);
                observer.on_current(self.current);
                observer.on_visited(&self.visited);
                observer.on_path(&self.path);

                let path = self.walk_back(c.pos, search.ranking(), config, observer);
                let cost = match search.weights {
                    Some(_) => c.cost,
                    None => path.len() as i32 - 1,
                };
                self.status = Status::Found;
                debug!(
                    "{}: found {} after {} nodes, path of {} cells costing {cost}",
                    search.name,
                    c.pos,
                    self.order,
                    path.len()
                );
                return Ok(Outcome::Found(Found {
                    source,
                    target: c.pos,
                    path,
                    cost,
                }));
            }

            if cancel.is_cancelled() {
                debug!("{}: cancelled after {} nodes", search.name, self.order);
                self.exhaust(observer);
                return Ok(Outcome::Cancelled);
            }

            if config.animate {
                self.current = Some(c.pos);
                observer.on_current(self.current);
                observer.on_visited(&self.visited);
                observer.pause(config.delay);
            }

            successors.clear();
            for s in steps.steps(terrain, search.weights, c.pos) {
                if self.is_finalized(s.to) {
                    continue;
                }
                // Costs saturate at i32::MAX.
                let cost = c.cost.saturating_add(s.weight);
                successors.push(Candidate {
                    pos: s.to,
                    cost,
                    key: cost.saturating_add(search.heuristic.estimate(s.to, target)),
                });
            }
            frontier.push_successors(&successors);
        }

        debug!("{}: exhausted after {} nodes", search.name, self.order);
        self.exhaust(observer);
        Ok(Outcome::Exhausted)
    }

    /// End a run without a path. The visited order is kept for inspection.
    fn exhaust<O: Observer + ?Sized>(&mut self, observer: &mut O) {
        self.current = None;
        self.path.fill(false);
        self.status = Status::Exhausted;
        observer.on_visited(&self.visited);
        observer.on_current(None);
        observer.on_path(&self.path);
    }
}

