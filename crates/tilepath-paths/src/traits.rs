use tilepath_core::{Cell, Point};

use crate::neighbors::Topology;

/// The pluggable part of a search: which neighbours exist, what a move
/// costs and how far the goal is estimated to be.
///
/// Costs are fixed-point integers. A model whose estimate never exceeds the
/// true remaining cost keeps the search optimal.
pub trait CostModel {
    /// Neighbour set expanded from every cell.
    fn topology(&self) -> Topology;

    /// Cost of stepping from `from` to the adjacent `to`. Must be > 0.
    fn move_cost(&self, from: &Cell, to: &Cell) -> i32;

    /// Estimated remaining cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
