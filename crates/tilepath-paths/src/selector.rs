//! Runtime choice between the engine variants.

use std::fmt;
use std::str::FromStr;

use tilepath_core::{Grid, Point};

use crate::cost::{Cardinal, Octile, UnitCost, Uninformed};
use crate::engine::{SearchEngine, SearchState};
use crate::frontier::SetCells;

/// The search variants a [`Pathfinder`] can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Weighted 8-connected A* with an octile estimate.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    /// Weighted 4-connected A* with a Manhattan estimate.
    #[cfg_attr(feature = "serde", serde(rename = "astar4"))]
    AStar4,
    /// Unweighted 4-connected A*, every move costs 1.
    #[cfg_attr(feature = "serde", serde(rename = "astar_simple"))]
    AStarSimple,
    /// Weighted 8-connected Dijkstra.
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    /// Weighted 4-connected Dijkstra.
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra4"))]
    Dijkstra4,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AStar,
        Algorithm::AStar4,
        Algorithm::AStarSimple,
        Algorithm::Dijkstra,
        Algorithm::Dijkstra4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::AStar4 => "astar4",
            Algorithm::AStarSimple => "astar_simple",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Dijkstra4 => "dijkstra4",
        }
    }

    /// Whether the variant uses a goal estimate at all.
    pub fn is_informed(self) -> bool {
        matches!(
            self,
            Algorithm::AStar | Algorithm::AStar4 | Algorithm::AStarSimple
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}, expected one of: ", self.0)?;
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(a.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownAlgorithm {}

/// Lowercases and drops `-`/`_` separators, so `Dijkstra-4`, `dijkstra_4`
/// and `dijkstra4` all name the same algorithm.
fn fold_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_name(s);
        Algorithm::ALL
            .into_iter()
            .find(|a| fold_name(a.name()) == wanted)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Algorithm plus heuristic weighting, as stored in configuration files.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Scales the goal estimate of the weighted A* variants. Ignored by
    /// the others.
    pub heuristic_multiplier: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            heuristic_multiplier: 1.0,
        }
    }
}

/// A search engine of any [`Algorithm`], dispatched at runtime.
///
/// Every method forwards unchanged to the wrapped [`SearchEngine`].
#[derive(Debug, Clone)]
pub enum Pathfinder {
    AStar(SearchEngine<Octile>),
    AStar4(SearchEngine<Cardinal>),
    AStarSimple(SearchEngine<UnitCost>),
    Dijkstra(SearchEngine<Uninformed<Octile>>),
    Dijkstra4(SearchEngine<Uninformed<Cardinal>>),
}

macro_rules! dispatch {
    ($self:expr, $e:ident => $body:expr) => {
        match $self {
            Pathfinder::AStar($e) => $body,
            Pathfinder::AStar4($e) => $body,
            Pathfinder::AStarSimple($e) => $body,
            Pathfinder::Dijkstra($e) => $body,
            Pathfinder::Dijkstra4($e) => $body,
        }
    };
}

impl Pathfinder {
    /// Build an engine for `grid` running `algorithm`.
    pub fn new(grid: &Grid, algorithm: Algorithm, heuristic_multiplier: f32) -> Self {
        match algorithm {
            Algorithm::AStar => Pathfinder::AStar(SearchEngine::new(
                grid,
                Octile {
                    heuristic_multiplier,
                },
            )),
            Algorithm::AStar4 => Pathfinder::AStar4(SearchEngine::new(
                grid,
                Cardinal {
                    heuristic_multiplier,
                },
            )),
            Algorithm::AStarSimple => Pathfinder::AStarSimple(SearchEngine::new(grid, UnitCost)),
            Algorithm::Dijkstra => {
                Pathfinder::Dijkstra(SearchEngine::new(grid, Uninformed(Octile::default())))
            }
            Algorithm::Dijkstra4 => {
                Pathfinder::Dijkstra4(SearchEngine::new(grid, Uninformed(Cardinal::default())))
            }
        }
    }

    pub fn from_config(grid: &Grid, config: &SearchConfig) -> Self {
        Self::new(grid, config.algorithm, config.heuristic_multiplier)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Pathfinder::AStar(_) => Algorithm::AStar,
            Pathfinder::AStar4(_) => Algorithm::AStar4,
            Pathfinder::AStarSimple(_) => Algorithm::AStarSimple,
            Pathfinder::Dijkstra(_) => Algorithm::Dijkstra,
            Pathfinder::Dijkstra4(_) => Algorithm::Dijkstra4,
        }
    }

    /// Run a whole search. See [`SearchEngine::calculate_path`].
    pub fn calculate_path(&mut self, grid: &mut Grid, start: Point, end: Point) -> Vec<Point> {
        dispatch!(self, e => e.calculate_path(grid, start, end))
    }

    /// Prepare a search to be advanced with [`Pathfinder::step_once`].
    pub fn init_stepwise(&mut self, grid: &mut Grid, start: Point, end: Point) {
        dispatch!(self, e => e.init(grid, start, end))
    }

    /// Perform one expansion. See [`SearchEngine::step`].
    pub fn step_once(&mut self, grid: &mut Grid) -> Option<Vec<Point>> {
        dispatch!(self, e => e.step(grid))
    }

    pub fn get_temp_path(&self, grid: &Grid) -> Vec<Point> {
        dispatch!(self, e => e.get_temp_path(grid))
    }

    pub fn clear(&mut self, grid: &mut Grid) {
        dispatch!(self, e => e.clear(grid))
    }

    pub fn frontier<'a>(&'a self, grid: &'a Grid) -> SetCells<'a> {
        dispatch!(self, e => e.frontier(grid))
    }

    pub fn settled<'a>(&'a self, grid: &'a Grid) -> SetCells<'a> {
        dispatch!(self, e => e.settled(grid))
    }

    pub fn frontier_len(&self) -> usize {
        dispatch!(self, e => e.frontier_len())
    }

    pub fn settled_len(&self) -> usize {
        dispatch!(self, e => e.settled_len())
    }

    pub fn is_frontier(&self, idx: usize) -> bool {
        dispatch!(self, e => e.is_frontier(idx))
    }

    pub fn is_settled(&self, idx: usize) -> bool {
        dispatch!(self, e => e.is_settled(idx))
    }

    pub fn start(&self) -> Option<Point> {
        dispatch!(self, e => e.start())
    }

    pub fn end(&self) -> Option<Point> {
        dispatch!(self, e => e.end())
    }

    pub fn state(&self) -> SearchState {
        dispatch!(self, e => e.state())
    }

    pub fn steps(&self) -> usize {
        dispatch!(self, e => e.steps())
    }

    pub fn current(&self) -> Option<Point> {
        dispatch!(self, e => e.current().map(|c| c.position()))
    }

    pub fn path_cost(&self, grid: &Grid, path: &[Point]) -> i32 {
        dispatch!(self, e => e.path_cost(grid, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::Topology;

    #[test]
    fn every_algorithm_crosses_an_open_grid() {
        let mut grid = Grid::new(Point::new(6, 6));
        for a in Algorithm::ALL {
            let mut pf = Pathfinder::new(&grid, a, 1.0);
            assert_eq!(pf.algorithm(), a);
            let path = pf.calculate_path(&mut grid, Point::new(0, 0), Point::new(5, 5));
            assert_eq!(path.first(), Some(&Point::new(0, 0)), "{a}");
            assert_eq!(path.last(), Some(&Point::new(5, 5)), "{a}");
            assert_eq!(pf.state(), SearchState::Found);
            let expected = match a {
                Algorithm::AStar | Algorithm::Dijkstra => 6,
                _ => 11,
            };
            assert_eq!(path.len(), expected, "{a}");
        }
    }

    #[test]
    fn four_connected_variants_never_move_diagonally() {
        let mut grid = Grid::from_fn(Point::new(9, 9), |p| if p.x == 4 && p.y < 7 { 0 } else { 60 });
        for a in [Algorithm::AStar4, Algorithm::AStarSimple, Algorithm::Dijkstra4] {
            let mut pf = Pathfinder::new(&grid, a, 1.0);
            let path = pf.calculate_path(&mut grid, Point::new(0, 0), Point::new(8, 0));
            assert!(!path.is_empty());
            for w in path.windows(2) {
                assert!(Topology::Four.adjacent(w[0], w[1]));
            }
        }
    }

    #[test]
    fn dijkstra_agrees_with_astar() {
        let mut grid = Grid::from_fn(Point::new(16, 16), |p| (20 + (p.x * 13 + p.y * 29) % 81) as u8);
        let (start, end) = (Point::new(2, 14), Point::new(15, 0));
        for (informed, uninformed) in [
            (Algorithm::AStar, Algorithm::Dijkstra),
            (Algorithm::AStar4, Algorithm::Dijkstra4),
        ] {
            let mut a = Pathfinder::new(&grid, informed, 1.0);
            let mut d = Pathfinder::new(&grid, uninformed, 1.0);
            let pa = a.calculate_path(&mut grid, start, end);
            let pd = d.calculate_path(&mut grid, start, end);
            assert_eq!(a.path_cost(&grid, &pa), d.path_cost(&grid, &pd));
        }
    }

    #[test]
    fn stepwise_forwards_to_engine() {
        let mut grid = Grid::new(Point::new(5, 5));
        let mut pf = Pathfinder::new(&grid, Algorithm::AStarSimple, 1.0);
        pf.init_stepwise(&mut grid, Point::new(0, 0), Point::new(4, 0));
        assert_eq!(pf.start(), Some(Point::new(0, 0)));
        assert_eq!(pf.end(), Some(Point::new(4, 0)));
        assert_eq!(pf.frontier_len(), 1);
        assert!(pf.step_once(&mut grid).is_none());
        assert_eq!(pf.current(), Some(Point::new(0, 0)));
        assert!(pf.is_settled(0));
        assert!(pf.is_frontier(1));
        assert_eq!(pf.settled(&grid).count(), 1);
        assert_eq!(pf.frontier(&grid).count(), pf.frontier_len());
        assert_eq!(pf.get_temp_path(&grid), vec![Point::new(0, 0)]);
        let path = loop {
            if let Some(path) = pf.step_once(&mut grid) {
                break path;
            }
        };
        assert_eq!(path.len(), 5);
        assert_eq!(pf.steps(), 5);
        pf.clear(&mut grid);
        assert_eq!(pf.state(), SearchState::Uninitialized);
    }

    #[test]
    fn parse_names() {
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("Dijkstra-4".parse::<Algorithm>(), Ok(Algorithm::Dijkstra4));
        assert_eq!(" astar_simple ".parse::<Algorithm>(), Ok(Algorithm::AStarSimple));
        assert_eq!("astar-simple".parse::<Algorithm>(), Ok(Algorithm::AStarSimple));
        assert_eq!("AStar_Simple".parse::<Algorithm>(), Ok(Algorithm::AStarSimple));
        assert_eq!("astar-4".parse::<Algorithm>(), Ok(Algorithm::AStar4));
        assert_eq!("dijkstra_4".parse::<Algorithm>(), Ok(Algorithm::Dijkstra4));
        assert!("".parse::<Algorithm>().is_err());
        let err = "bfs".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("astar4"));
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn config_builds_matching_engine() {
        let grid = Grid::new(Point::new(3, 3));
        let config = SearchConfig {
            algorithm: Algorithm::Dijkstra4,
            heuristic_multiplier: 3.0,
        };
        assert_eq!(Pathfinder::from_config(&grid, &config).algorithm(), Algorithm::Dijkstra4);
        assert!(!Algorithm::Dijkstra.is_informed());
        assert!(Algorithm::AStarSimple.is_informed());
    }
}
