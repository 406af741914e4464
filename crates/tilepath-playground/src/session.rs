//! A headless pathfinding playground.
//!
//! A [`Session`] owns a generated grid and a pathfinder. Each
//! [`Session::tick`] either plans a new route between random passable
//! cells, advances a stepwise search by one expansion, or moves the player
//! one cell along the route it found. Reaching the goal starts a new route
//! from there. Editing terrain drops the route and replans from a fresh
//! start.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::{Cell, Grid, Point};
use tilepath_paths::{Pathfinder, SearchState};
use tilepath_terrain::TerrainGen;

use crate::config::{PlaygroundConfig, PlaygroundError};
use crate::display::{TileState, render_ascii};

/// Goals tried per start before the start is re-rolled.
pub const MAX_END_ATTEMPTS: usize = 10;

/// Starts tried before planning gives up for this tick.
pub const MAX_START_ATTEMPTS: usize = 10;

/// What a single [`Session::tick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// A new route was set up: solved at once, or ready to be searched
    /// step by step.
    Planned { start: Point, end: Point },
    /// A stepwise search expanded one cell.
    Searching,
    /// A stepwise search reached its goal with a route of `len` cells.
    Found { len: usize },
    /// A stepwise search could not reach its goal.
    Exhausted,
    /// The player advanced to this cell.
    Moved(Point),
    /// The player reached the end of its route.
    Arrived(Point),
    /// No pair of connected passable cells could be found.
    NoRoute,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: PlaygroundConfig,
    grid: Grid,
    pathfinder: Pathfinder,
    rng: StdRng,
    /// Where the next route starts. `None` picks a random cell.
    next_start: Option<Point>,
    route: Option<Vec<Point>>,
    route_index: usize,
    needs_replan: bool,
}

impl Session {
    pub fn new(config: PlaygroundConfig) -> Result<Self, PlaygroundError> {
        config.validate()?;
        let grid = TerrainGen::new(config.noise, config.iso_value).generate(config.size);
        let pathfinder = Pathfinder::from_config(&grid, &config.search);
        info!(
            "playground {} with {} of {} cells passable, algorithm {}",
            config.size,
            grid.passable_count(),
            grid.len(),
            config.search.algorithm
        );
        Ok(Self {
            config,
            grid,
            pathfinder,
            rng: StdRng::seed_from_u64(config.seed),
            next_start: None,
            route: None,
            route_index: 0,
            needs_replan: true,
        })
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pathfinder(&self) -> &Pathfinder {
        &self.pathfinder
    }

    /// The current route, once one has been found.
    pub fn route(&self) -> Option<&[Point]> {
        self.route.as_deref()
    }

    /// The player's cell on the current route.
    pub fn player(&self) -> Option<Point> {
        self.route
            .as_ref()
            .and_then(|r| r.get(self.route_index).copied())
    }

    pub fn needs_replan(&self) -> bool {
        self.needs_replan
    }

    /// Switch between stepwise and one-shot search. Takes effect with a new
    /// route on the next tick.
    pub fn set_stepwise(&mut self, stepwise: bool) {
        if self.config.stepwise != stepwise {
            self.config.stepwise = stepwise;
            self.needs_replan = true;
        }
    }

    /// Regenerate terrain and pathfinder from `config`, dropping any route.
    pub fn reconfigure(&mut self, config: PlaygroundConfig) -> Result<(), PlaygroundError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Set the passability of `p`. Any route or search in progress is
    /// abandoned and the next tick plans from a random start.
    ///
    /// Returns `false` if `p` is outside the grid.
    pub fn set_tile(&mut self, p: Point, passability: u8) -> bool {
        if !self.grid.contains(p) {
            return false;
        }
        self.pathfinder.clear(&mut self.grid);
        self.grid.set_passability(p, passability);
        debug!("tile {p} set to {passability}, replanning");
        self.route = None;
        self.route_index = 0;
        self.next_start = None;
        self.needs_replan = true;
        true
    }

    /// Advance the playground by one step.
    pub fn tick(&mut self) -> TickEvent {
        if self.needs_replan {
            return self.plan();
        }
        if self.route.is_some() {
            return self.advance_player();
        }
        if self.pathfinder.state() != SearchState::Active {
            self.needs_replan = true;
            return self.plan();
        }
        match self.pathfinder.step_once(&mut self.grid) {
            None => TickEvent::Searching,
            Some(path) if path.is_empty() => {
                debug!("stepwise search exhausted, picking new endpoints");
                self.next_start = None;
                self.needs_replan = true;
                TickEvent::Exhausted
            }
            Some(path) => {
                let len = path.len();
                self.route = Some(path);
                self.route_index = 0;
                TickEvent::Found { len }
            }
        }
    }

    fn plan(&mut self) -> TickEvent {
        self.needs_replan = false;
        self.route = None;
        self.route_index = 0;

        let passable: Vec<Point> = self
            .grid
            .iter()
            .filter(|c| c.is_passable())
            .map(Cell::position)
            .collect();
        let carried = self
            .next_start
            .take()
            .filter(|&p| self.grid.get(p).is_passable());

        if self.config.stepwise {
            let start = carried.or_else(|| pick(&mut self.rng, &passable, None));
            let end = start.and_then(|s| pick(&mut self.rng, &passable, Some(s)));
            let (Some(start), Some(end)) = (start, end) else {
                warn!("no two passable cells to search between");
                return TickEvent::NoRoute;
            };
            self.pathfinder.init_stepwise(&mut self.grid, start, end);
            info!("stepwise search {start} -> {end}");
            return TickEvent::Planned { start, end };
        }

        let mut carried = carried;
        for _ in 0..MAX_START_ATTEMPTS {
            let Some(start) = carried.take().or_else(|| pick(&mut self.rng, &passable, None))
            else {
                break;
            };
            for _ in 0..MAX_END_ATTEMPTS {
                let Some(end) = pick(&mut self.rng, &passable, Some(start)) else {
                    break;
                };
                let path = self.pathfinder.calculate_path(&mut self.grid, start, end);
                if !path.is_empty() {
                    info!("route {start} -> {end}, {} cells", path.len());
                    self.route = Some(path);
                    return TickEvent::Planned { start, end };
                }
            }
            debug!("no goal reachable from {start}, re-rolling start");
        }
        warn!("no route found after {MAX_START_ATTEMPTS} starts");
        self.needs_replan = true;
        TickEvent::NoRoute
    }

    fn advance_player(&mut self) -> TickEvent {
        let Some(route) = &self.route else {
            return TickEvent::NoRoute;
        };
        let last = route.len().saturating_sub(1);
        self.route_index = (self.route_index + 1).min(last);
        let p = route[self.route_index];
        if self.route_index == last {
            self.next_start = Some(p);
            self.needs_replan = true;
            TickEvent::Arrived(p)
        } else {
            TickEvent::Moved(p)
        }
    }

    /// Display state of every cell, row-major.
    ///
    /// In stepwise mode, while no route is known, the frontier, the settled
    /// set and the best partial path are shown. The route ahead of the
    /// player is drawn on top when `show_path` is set.
    pub fn display_buffer(&self) -> Vec<TileState> {
        let mut states: Vec<TileState> = self
            .grid
            .iter()
            .map(|c| {
                if c.is_passable() {
                    TileState::Passable
                } else {
                    TileState::Impassable
                }
            })
            .collect();
        let mut mark = |p: Point, state: TileState| {
            if let Some(i) = self.grid.linear_index(p) {
                states[i] = state;
            }
        };

        if self.config.stepwise
            && self.route.is_none()
            && self.pathfinder.state() == SearchState::Active
        {
            for c in self.pathfinder.frontier(&self.grid) {
                mark(c.position(), TileState::Open);
            }
            for c in self.pathfinder.settled(&self.grid) {
                mark(c.position(), TileState::Closed);
            }
            let temp = self.pathfinder.get_temp_path(&self.grid);
            if temp.len() > 2 {
                for &p in &temp[1..temp.len() - 1] {
                    mark(p, TileState::Path);
                }
            }
            if let Some(p) = self.pathfinder.start() {
                mark(p, TileState::Player);
            }
            if let Some(p) = self.pathfinder.end() {
                mark(p, TileState::End);
            }
        }

        if self.config.show_path {
            if let Some(route) = &self.route {
                for &p in route.iter().skip(self.route_index + 1) {
                    mark(p, TileState::Path);
                }
                if let Some(&p) = route.last() {
                    mark(p, TileState::End);
                }
                if let Some(&p) = route.get(self.route_index) {
                    mark(p, TileState::Player);
                }
            }
        }
        states
    }

    /// [`Session::display_buffer`] as text, top row first.
    pub fn render_ascii(&self) -> String {
        render_ascii(&self.display_buffer(), self.grid.width().max(0) as usize)
    }
}

/// A random entry of `cells` other than `exclude`.
fn pick(rng: &mut StdRng, cells: &[Point], exclude: Option<Point>) -> Option<Point> {
    match exclude {
        None if cells.is_empty() => None,
        None => Some(cells[rng.random_range(0..cells.len())]),
        Some(_) if cells.len() < 2 => None,
        Some(ex) => {
            let p = cells[rng.random_range(0..cells.len() - 1)];
            // `ex` is in `cells` at most once; swap it for the slot the draw
            // could not reach.
            Some(if p == ex { cells[cells.len() - 1] } else { p })
        }
    }
}
