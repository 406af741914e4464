//! The [`Cell`] type: one grid position with its passability and the
//! search state a pathfinder attaches to it.

use crate::geom::Point;

/// Passability of a completely free cell. Zero means impassable.
pub const MAX_PASSABILITY: u8 = 100;

/// A grid cell.
///
/// Besides its position and terrain weight, a cell stores the search state
/// of the last pathfinder that touched it: the predecessor it was reached
/// from and the g/h/f costs. `f_cost == g_cost + h_cost` holds whenever the
/// costs were written through [`Cell::set_costs`] by a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Point,
    index: Option<usize>,
    passability: u8,
    predecessor: Option<usize>,
    predecessor_dir: Point,
    g_cost: i32,
    h_cost: i32,
    f_cost: i32,
}

impl Cell {
    /// The shared out-of-bounds cell returned for invalid coordinates.
    pub const OUT_OF_BOUNDS: Cell = Cell {
        position: Point::new(-1, -1),
        index: None,
        passability: 0,
        predecessor: None,
        predecessor_dir: Point::ZERO,
        g_cost: 0,
        h_cost: 0,
        f_cost: 0,
    };

    /// Create a cell at `position` stored at linear `index`.
    ///
    /// Passability is clamped to [`MAX_PASSABILITY`].
    pub const fn new(position: Point, index: usize, passability: u8) -> Self {
        let passability = if passability > MAX_PASSABILITY {
            MAX_PASSABILITY
        } else {
            passability
        };
        Self {
            position,
            index: Some(index),
            passability,
            predecessor: None,
            predecessor_dir: Point::ZERO,
            g_cost: 0,
            h_cost: 0,
            f_cost: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Linear index in the owning grid, `None` for the out-of-bounds cell.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether this is the out-of-bounds sentinel.
    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        self.index.is_none()
    }

    #[inline]
    pub fn passability(&self) -> u8 {
        self.passability
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        self.passability > 0
    }

    /// Set the terrain weight, clamped to [`MAX_PASSABILITY`].
    #[inline]
    pub fn set_passability(&mut self, value: u8) {
        self.passability = value.min(MAX_PASSABILITY);
    }

    #[inline]
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    /// Offset from this cell to its predecessor.
    #[inline]
    pub fn predecessor_dir(&self) -> Point {
        self.predecessor_dir
    }

    #[inline]
    pub fn g_cost(&self) -> i32 {
        self.g_cost
    }

    #[inline]
    pub fn h_cost(&self) -> i32 {
        self.h_cost
    }

    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.f_cost
    }

    /// Record `pred` as the cell this one was reached from.
    ///
    /// Stores the predecessor's index and the offset
    /// `pred.position - self.position`, so a path can later be walked
    /// without consulting neighbour tables.
    pub fn set_predecessor(&mut self, pred: &Cell) {
        self.predecessor = pred.index;
        self.predecessor_dir = pred.position - self.position;
    }

    /// Plain setter, no recomputation.
    #[inline]
    pub fn set_costs(&mut self, g: i32, h: i32, f: i32) {
        self.g_cost = g;
        self.h_cost = h;
        self.f_cost = f;
    }

    /// Drop all search state, keeping position and passability.
    pub fn clear(&mut self) {
        self.predecessor = None;
        self.predecessor_dir = Point::ZERO;
        self.g_cost = 0;
        self.h_cost = 0;
        self.f_cost = 0;
    }

    /// Whether the cell carries no search state.
    pub fn is_pristine(&self) -> bool {
        self.predecessor.is_none()
            && self.predecessor_dir == Point::ZERO
            && self.g_cost == 0
            && self.h_cost == 0
            && self.f_cost == 0
    }
}
