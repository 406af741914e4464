//! The [`Grid`] type: a row-major arena of [`Cell`]s.
//!
//! The shape of a grid is fixed at construction. Passability can be edited
//! in place, but positions and linear indices never change, so every index
//! handed out by [`Grid::to_linear_index`] stays valid for the grid's
//! lifetime.

use crate::cell::{Cell, MAX_PASSABILITY};
use crate::geom::{Point, Range};

static OUT_OF_BOUNDS: Cell = Cell::OUT_OF_BOUNDS;

/// A 2D grid of [`Cell`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given size where every cell is fully passable.
    pub fn new(size: Point) -> Self {
        Self::from_fn(size, |_| MAX_PASSABILITY)
    }

    /// Create a grid whose passability is given by `f` for each position.
    pub fn from_fn(size: Point, f: impl Fn(Point) -> u8) -> Self {
        let bounds = Range::from_size(size);
        let cells = bounds
            .iter()
            .enumerate()
            .map(|(i, p)| Cell::new(p, i, f(p)))
            .collect();
        Self { cells, bounds }
    }

    /// Create a grid from a row-major passability buffer.
    ///
    /// Returns `None` if `values.len()` does not match `size`.
    pub fn from_passability(size: Point, values: &[u8]) -> Option<Self> {
        let bounds = Range::from_size(size);
        if values.len() != bounds.len() {
            return None;
        }
        let cells = bounds
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (p, &v))| Cell::new(p, i, v))
            .collect();
        Some(Self { cells, bounds })
    }

    /// The bounding range `[0, size)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major linear index of `p`: `x + y * width`.
    ///
    /// Pure arithmetic, no bounds check. Use [`Grid::linear_index`] when `p`
    /// may lie outside the grid.
    #[inline]
    pub fn to_linear_index(&self, p: Point) -> usize {
        (p.x + p.y * self.width()) as usize
    }

    /// Linear index of `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn linear_index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| self.to_linear_index(p))
    }

    /// Position stored at linear index `idx`.
    #[inline]
    pub fn position(&self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or the shared out-of-bounds cell.
    #[inline]
    pub fn get(&self, p: Point) -> &Cell {
        match self.linear_index(p) {
            Some(i) => &self.cells[i],
            None => &OUT_OF_BOUNDS,
        }
    }

    /// Mutable access to the cell at `p`. `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Cell> {
        let i = self.linear_index(p)?;
        Some(&mut self.cells[i])
    }

    /// The cell at linear index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at linear index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Passability at `p`, 0 when out of bounds.
    #[inline]
    pub fn passability(&self, p: Point) -> u8 {
        self.get(p).passability()
    }

    /// Edit the passability at `p` in place. Returns `false` if `p` is out
    /// of bounds.
    ///
    /// Any search running against this grid keeps its stale costs; callers
    /// must re-initialize it.
    pub fn set_passability(&mut self, p: Point, value: u8) -> bool {
        match self.get_mut(p) {
            Some(cell) => {
                cell.set_passability(value);
                true
            }
            None => false,
        }
    }

    /// Number of cells with non-zero passability.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Row-major copy of every cell's passability, addressed by linear index.
    pub fn passability_map(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::passability).collect()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_is_fully_passable() {
        let g = Grid::new(Point::new(4, 3));
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.passable_count(), 12);
        assert_eq!(g.passability(Point::new(3, 2)), MAX_PASSABILITY);
    }

    #[test]
    fn linear_index_is_row_major() {
        let g = Grid::new(Point::new(5, 4));
        assert_eq!(g.to_linear_index(Point::new(0, 0)), 0);
        assert_eq!(g.to_linear_index(Point::new(3, 2)), 13);
        assert_eq!(g.position(13), Point::new(3, 2));
        for (i, c) in g.iter().enumerate() {
            assert_eq!(c.index(), Some(i));
            assert_eq!(g.to_linear_index(c.position()), i);
        }
    }

    #[test]
    fn out_of_bounds_returns_sentinel() {
        let mut g = Grid::new(Point::new(3, 3));
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(3, 0),
            Point::new(0, 3),
        ] {
            let c = g.get(p);
            assert!(c.is_out_of_bounds());
            assert_eq!(c.position(), Point::new(-1, -1));
            assert_eq!(c.passability(), 0);
            assert!(g.linear_index(p).is_none());
            assert!(g.get_mut(p).is_none());
        }
    }

    #[test]
    fn set_passability_edits_one_cell() {
        let mut g = Grid::new(Point::new(3, 3));
        assert!(g.set_passability(Point::new(1, 1), 0));
        assert!(!g.set_passability(Point::new(7, 7), 0));
        assert_eq!(g.passability(Point::new(1, 1)), 0);
        assert_eq!(g.passable_count(), 8);
        let c = g.get(Point::new(1, 1));
        assert_eq!(c.position(), Point::new(1, 1));
        assert_eq!(c.index(), Some(4));
    }

    #[test]
    fn from_passability_checks_length() {
        let size = Point::new(2, 2);
        assert!(Grid::from_passability(size, &[1, 2, 3]).is_none());
        let g = Grid::from_passability(size, &[0, 50, 100, 200]).unwrap();
        assert_eq!(g.passability_map(), vec![0, 50, 100, 100]);
    }

    #[test]
    fn from_fn_sees_positions() {
        let g = Grid::from_fn(Point::new(4, 2), |p| if p.x == 2 { 0 } else { 100 });
        assert_eq!(g.passable_count(), 6);
        assert_eq!(g.passability(Point::new(2, 1)), 0);
    }
}
