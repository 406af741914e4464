//! The resumable search engine.

use log::{debug, trace, warn};
use tilepath_core::{Cell, Grid, Point};

use crate::frontier::{Membership, SearchSets, SetCells};
use crate::path;
use crate::traits::CostModel;

/// Lifecycle of a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search has been started, or the last one was cleared.
    #[default]
    Uninitialized,
    /// A search is in progress and can be stepped.
    Active,
    /// The last search reached its goal.
    Found,
    /// The last search ran out of frontier without reaching its goal.
    Exhausted,
}

impl SearchState {
    /// Whether the last search has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// A best-first search over a [`Grid`] that can be advanced one expansion
/// at a time.
///
/// The engine keeps its frontier and settled sets between calls and writes
/// per-cell search state (predecessor, g/h/f costs) into the grid it is
/// handed. Every call that touches the grid takes it by reference, so the
/// borrow checker guarantees a single caller drives a search at a time.
///
/// Whether the search behaves as A* or Dijkstra, and whether it walks four
/// or eight neighbours, is decided entirely by the [`CostModel`].
///
/// Terminal steps reset every cell the search wrote, so the same grid can
/// be searched again at once.
#[derive(Debug, Clone)]
pub struct SearchEngine<C> {
    cost: C,
    sets: SearchSets,
    state: SearchState,
    start: Option<Point>,
    end: Option<Point>,
    start_idx: Option<usize>,
    current: Option<Cell>,
    steps: usize,
}

impl<C: CostModel> SearchEngine<C> {
    /// Create an engine sized for `grid`.
    pub fn new(grid: &Grid, cost: C) -> Self {
        Self {
            cost,
            sets: SearchSets::new(grid.len()),
            state: SearchState::Uninitialized,
            start: None,
            end: None,
            start_idx: None,
            current: None,
            steps: 0,
        }
    }

    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Start of the current or last search.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Goal of the current or last search.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Expansions performed by the current or last search.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The cell most recently selected from the frontier, while a search is
    /// active.
    pub fn current(&self) -> Option<&Cell> {
        self.current.as_ref()
    }

    /// Cells currently in the frontier, in the order they first received
    /// search state.
    pub fn frontier<'a>(&'a self, grid: &'a Grid) -> SetCells<'a> {
        SetCells::frontier(grid, &self.sets)
    }

    /// Cells settled so far, in expansion order.
    pub fn settled<'a>(&'a self, grid: &'a Grid) -> SetCells<'a> {
        SetCells::settled(grid, &self.sets)
    }

    pub fn frontier_len(&self) -> usize {
        self.sets.frontier_len()
    }

    pub fn settled_len(&self) -> usize {
        self.sets.settled_len()
    }

    /// Whether the cell at linear index `idx` is in the frontier.
    pub fn is_frontier(&self, idx: usize) -> bool {
        self.sets.membership(idx) == Membership::Frontier
    }

    /// Whether the cell at linear index `idx` has been settled.
    pub fn is_settled(&self, idx: usize) -> bool {
        self.sets.membership(idx) == Membership::Settled
    }

    /// Reset all search state written into `grid` and forget the current
    /// search.
    pub fn clear(&mut self, grid: &mut Grid) {
        self.sets.clear(grid);
        self.state = SearchState::Uninitialized;
        self.start = None;
        self.end = None;
        self.start_idx = None;
        self.current = None;
        self.steps = 0;
    }

    /// Prepare a search from `start` to `end` without expanding anything.
    ///
    /// Any previous search is cleared first. The start enters the frontier
    /// with `g = 0`, and its passable neighbours receive provisional costs
    /// and predecessors, which later expansions may overwrite. A start
    /// outside the grid leaves the frontier empty, so the first step
    /// reports exhaustion.
    pub fn init(&mut self, grid: &mut Grid, start: Point, end: Point) {
        self.clear(grid);
        if self.sets.capacity() != grid.len() {
            self.sets = SearchSets::new(grid.len());
        }
        self.start = Some(start);
        self.end = Some(end);
        self.state = SearchState::Active;

        let Some(si) = grid.linear_index(start) else {
            warn!("search start {start} is outside the grid");
            return;
        };
        self.start_idx = Some(si);

        let h = self.cost.estimate(start, end);
        grid.cell_mut(si).set_costs(0, h, h);
        self.sets.push(si, h, h);

        let origin = *grid.cell(si);
        for &dir in self.cost.topology().dirs() {
            let np = start + dir;
            let Some(ni) = grid.linear_index(np) else {
                continue;
            };
            if !grid.cell(ni).is_passable() {
                continue;
            }
            let g = self.cost.move_cost(&origin, grid.cell(ni));
            let h = self.cost.estimate(np, end);
            let cell = grid.cell_mut(ni);
            cell.set_predecessor(&origin);
            cell.set_costs(g, h, g.saturating_add(h));
            self.sets.touch(ni);
        }
        trace!("search {start} -> {end} initialized");
    }

    /// Perform one expansion.
    ///
    /// Returns `None` while the search is still running. Once it ends the
    /// step returns `Some(path)`: the route from start to goal, or an empty
    /// vector when the goal is unreachable. A terminal step resets the grid
    /// and both sets. Stepping an engine that is not active returns an
    /// empty path and changes nothing.
    pub fn step(&mut self, grid: &mut Grid) -> Option<Vec<Point>> {
        let (SearchState::Active, Some(end)) = (self.state, self.end) else {
            return Some(Vec::new());
        };

        let Some(ci) = self.sets.pop_min() else {
            debug!(
                "search {} -> {end} exhausted after {} steps",
                self.start.unwrap_or_default(),
                self.steps
            );
            self.finish(grid, SearchState::Exhausted);
            return Some(Vec::new());
        };
        self.steps += 1;

        let current = *grid.cell(ci);
        self.current = Some(current);
        trace!(
            "expand {} g={} h={} f={}",
            current.position(),
            current.g_cost(),
            current.h_cost(),
            current.f_cost()
        );

        if current.position() == end {
            let path = match self.start_idx {
                Some(si) => path::reconstruct(grid, si, ci),
                None => Vec::new(),
            };
            debug!(
                "search {} -> {end} found a {}-point path (cost {}) in {} steps",
                self.start.unwrap_or_default(),
                path.len(),
                current.g_cost(),
                self.steps
            );
            self.finish(grid, SearchState::Found);
            return Some(path);
        }

        for &dir in self.cost.topology().dirs() {
            let np = current.position() + dir;
            let Some(ni) = grid.linear_index(np) else {
                continue;
            };
            let neighbor = grid.cell(ni);
            if !neighbor.is_passable() {
                continue;
            }
            let g = current
                .g_cost()
                .saturating_add(self.cost.move_cost(&current, neighbor));
            match self.sets.membership(ni) {
                Membership::Settled => continue,
                Membership::Frontier if g >= neighbor.g_cost() => continue,
                _ => {}
            }
            let h = self.cost.estimate(np, end);
            let f = g.saturating_add(h);
            let cell = grid.cell_mut(ni);
            cell.set_predecessor(&current);
            cell.set_costs(g, h, f);
            self.sets.push(ni, f, h);
        }
        None
    }

    /// Run a whole search and return its path, empty if none exists.
    pub fn calculate_path(&mut self, grid: &mut Grid, start: Point, end: Point) -> Vec<Point> {
        self.init(grid, start, end);
        loop {
            if let Some(path) = self.step(grid) {
                return path;
            }
        }
    }

    /// Best path known so far: from the start to the most recently selected
    /// cell. Empty unless a search is active and has taken a step.
    pub fn get_temp_path(&self, grid: &Grid) -> Vec<Point> {
        match (self.state, self.start_idx, &self.current) {
            (SearchState::Active, Some(si), Some(current)) => match current.index() {
                Some(ci) => path::reconstruct(grid, si, ci),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Total move cost of `path` under this engine's cost model.
    pub fn path_cost(&self, grid: &Grid, path: &[Point]) -> i32 {
        path.windows(2)
            .map(|w| self.cost.move_cost(grid.get(w[0]), grid.get(w[1])))
            .fold(0, i32::saturating_add)
    }

    fn finish(&mut self, grid: &mut Grid, state: SearchState) {
        self.sets.clear(grid);
        self.state = state;
        self.current = None;
    }
}
