//! Concrete [`CostModel`]s.
//!
//! Weighted models scale a base step cost by the average passability of the
//! two cells involved: a move between two fully passable cells costs exactly
//! the base, and rougher terrain makes it proportionally dearer.

use tilepath_core::{Cell, MAX_PASSABILITY, Point};

use crate::distance::{DIAGONAL_COST, STEP_COST, manhattan, octile};
use crate::neighbors::Topology;
use crate::traits::CostModel;

/// `base / clamp(avg(a, b) / 100, 0.01, 1)` in integer arithmetic.
#[inline]
pub fn weighted_cost(base: i32, a: u8, b: u8) -> i32 {
    let full = 2 * i32::from(MAX_PASSABILITY);
    let sum = (i32::from(a) + i32::from(b)).clamp(2, full);
    base * full / sum
}

#[inline]
fn scaled(estimate: i32, multiplier: f32) -> i32 {
    (estimate as f32 * multiplier) as i32
}

/// Unweighted 4-connected moves of cost 1, Manhattan estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitCost;

impl CostModel for UnitCost {
    fn topology(&self) -> Topology {
        Topology::Four
    }

    fn move_cost(&self, _from: &Cell, _to: &Cell) -> i32 {
        1
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Passability-weighted 4-connected moves with a scaled Manhattan estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cardinal {
    /// Multiplier on the estimate. Values above 1 trade optimality for
    /// fewer expansions.
    pub heuristic_multiplier: f32,
}

impl Default for Cardinal {
    fn default() -> Self {
        Self {
            heuristic_multiplier: 1.0,
        }
    }
}

impl CostModel for Cardinal {
    fn topology(&self) -> Topology {
        Topology::Four
    }

    fn move_cost(&self, from: &Cell, to: &Cell) -> i32 {
        weighted_cost(STEP_COST, from.passability(), to.passability())
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        scaled(
            manhattan(from, to).saturating_mul(STEP_COST),
            self.heuristic_multiplier,
        )
    }
}

/// Passability-weighted 8-connected moves with a scaled octile estimate.
///
/// Diagonal moves may cut past blocked corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octile {
    pub heuristic_multiplier: f32,
}

impl Default for Octile {
    fn default() -> Self {
        Self {
            heuristic_multiplier: 1.0,
        }
    }
}

impl CostModel for Octile {
    fn topology(&self) -> Topology {
        Topology::Eight
    }

    fn move_cost(&self, from: &Cell, to: &Cell) -> i32 {
        let base = if (to.position() - from.position()).is_diagonal() {
            DIAGONAL_COST
        } else {
            STEP_COST
        };
        weighted_cost(base, from.passability(), to.passability())
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        scaled(octile(from, to), self.heuristic_multiplier)
    }
}

/// Wraps a model and drops its estimate, turning A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uninformed<M>(pub M);

impl<M: CostModel> CostModel for Uninformed<M> {
    fn topology(&self) -> Topology {
        self.0.topology()
    }

    fn move_cost(&self, from: &Cell, to: &Cell) -> i32 {
        self.0.move_cost(from, to)
    }

    fn estimate(&self, _from: Point, _to: Point) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i32, y: i32, passability: u8) -> Cell {
        Cell::new(Point::new(x, y), 0, passability)
    }

    #[test]
    fn weighting_scales_with_average_passability() {
        assert_eq!(weighted_cost(STEP_COST, 100, 100), 1000);
        assert_eq!(weighted_cost(STEP_COST, 50, 50), 2000);
        assert_eq!(weighted_cost(STEP_COST, 100, 0), 2000);
        assert_eq!(weighted_cost(DIAGONAL_COST, 100, 100), 1414);
        // Floor at an average of 1%.
        assert_eq!(weighted_cost(STEP_COST, 0, 0), 100_000);
        assert_eq!(weighted_cost(STEP_COST, 1, 1), 100_000);
    }

    #[test]
    fn octile_moves() {
        let m = Octile::default();
        assert_eq!(m.move_cost(&cell(0, 0, 100), &cell(1, 0, 100)), 1000);
        assert_eq!(m.move_cost(&cell(0, 0, 100), &cell(1, 1, 100)), 1414);
        assert_eq!(m.move_cost(&cell(0, 0, 50), &cell(1, 1, 50)), 2828);
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(3, 1)), 1414 + 2000);
    }

    #[test]
    fn multiplier_scales_estimate() {
        let m = Cardinal {
            heuristic_multiplier: 2.5,
        };
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(2, 2)), 10_000);
        let m = Cardinal {
            heuristic_multiplier: 0.0,
        };
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(2, 2)), 0);
    }

    #[test]
    fn estimates_saturate_for_distant_goals() {
        let (a, b) = (Point::new(0, 0), Point::new(3_000_000, 0));
        assert_eq!(Cardinal::default().estimate(a, b), i32::MAX);
        let c = Cardinal {
            heuristic_multiplier: 4.0,
        };
        assert_eq!(c.estimate(a, b), i32::MAX);
        assert_eq!(
            Octile::default().estimate(a, Point::new(2_000_000, 2_000_000)),
            i32::MAX
        );
        assert_eq!(UnitCost.estimate(a, b), 3_000_000);
    }

    #[test]
    fn unit_cost_ignores_weights() {
        assert_eq!(UnitCost.move_cost(&cell(0, 0, 10), &cell(0, 1, 20)), 1);
        assert_eq!(UnitCost.estimate(Point::new(0, 0), Point::new(3, 4)), 7);
    }

    #[test]
    fn uninformed_keeps_costs_and_drops_estimate() {
        let m = Uninformed(Octile::default());
        assert_eq!(m.topology(), Topology::Eight);
        assert_eq!(m.move_cost(&cell(0, 0, 100), &cell(1, 1, 100)), 1414);
        assert_eq!(m.estimate(Point::new(0, 0), Point::new(9, 9)), 0);
    }
}
