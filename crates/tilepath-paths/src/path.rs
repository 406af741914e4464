use log::error;
use tilepath_core::{Grid, Point};

/// Walk predecessors from `terminal` back to `start_idx` and return the
/// coordinates from start to terminal.
///
/// Only the stored direction offsets are followed forward from the start,
/// so the result does not depend on neighbour tables. A broken chain (a
/// missing predecessor, or more links than the grid has cells) is an
/// engine bug: it panics in debug builds and yields an empty path
/// otherwise.
pub(crate) fn reconstruct(grid: &Grid, start_idx: usize, terminal: usize) -> Vec<Point> {
    let mut dirs = Vec::new();
    let mut idx = terminal;
    while idx != start_idx {
        if dirs.len() >= grid.len() {
            return corrupted(grid, terminal, "predecessor cycle");
        }
        let cell = grid.cell(idx);
        let Some(pred) = cell.predecessor() else {
            return corrupted(grid, terminal, "missing predecessor");
        };
        dirs.push(cell.predecessor_dir());
        idx = pred;
    }

    let mut current = grid.position(start_idx);
    let mut path = Vec::with_capacity(dirs.len() + 1);
    path.push(current);
    for &dir in dirs.iter().rev() {
        current = current - dir;
        path.push(current);
    }
    path
}

fn corrupted(grid: &Grid, terminal: usize, reason: &str) -> Vec<Point> {
    error!(
        "cannot rebuild path to {}: {reason}",
        grid.position(terminal)
    );
    if cfg!(debug_assertions) {
        panic!("corrupted predecessor chain: {reason}");
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(grid: &mut Grid, from: Point, to: Point) {
        let pred = *grid.get(from);
        if let Some(c) = grid.get_mut(to) {
            c.set_predecessor(&pred);
        }
    }

    #[test]
    fn follows_chain_from_start() {
        let mut grid = Grid::new(Point::new(4, 4));
        let chain = [
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        for w in chain.windows(2) {
            link(&mut grid, w[0], w[1]);
        }
        let start = grid.to_linear_index(chain[0]);
        let end = grid.to_linear_index(chain[3]);
        assert_eq!(reconstruct(&grid, start, end), chain.to_vec());
    }

    #[test]
    fn terminal_at_start_is_single_point() {
        let grid = Grid::new(Point::new(2, 2));
        assert_eq!(reconstruct(&grid, 3, 3), vec![Point::new(1, 1)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing predecessor")]
    fn broken_chain_panics_in_debug() {
        let grid = Grid::new(Point::new(3, 3));
        reconstruct(&grid, 0, 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "predecessor cycle")]
    fn cycle_panics_in_debug() {
        let mut grid = Grid::new(Point::new(3, 1));
        link(&mut grid, Point::new(1, 0), Point::new(2, 0));
        link(&mut grid, Point::new(2, 0), Point::new(1, 0));
        reconstruct(&grid, 0, 2);
    }
}
