use tilepath_core::Point;

/// Cardinal directions in expansion order: down, left, up, right.
pub const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(1, 0),
];

/// All eight directions in expansion order, turning clockwise from down.
pub const ALL: [Point; 8] = [
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
];

/// Which neighbours a search expands.
///
/// The fixed order matters: combined with the frontier's tie-breaking it
/// makes every search reproducible step for step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Four,
    Eight,
}

impl Topology {
    /// Direction offsets, in expansion order.
    #[inline]
    pub fn dirs(self) -> &'static [Point] {
        match self {
            Topology::Four => &CARDINAL,
            Topology::Eight => &ALL,
        }
    }

    /// Whether `a` and `b` are adjacent under this topology.
    pub fn adjacent(self, a: Point, b: Point) -> bool {
        self.dirs().contains(&(b - a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_unit_and_distinct() {
        for dirs in [&CARDINAL[..], &ALL[..]] {
            for (i, d) in dirs.iter().enumerate() {
                assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && *d != Point::ZERO);
                assert!(!dirs[i + 1..].contains(d));
            }
        }
        assert!(CARDINAL.iter().all(|d| !d.is_diagonal()));
        assert_eq!(ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }

    #[test]
    fn adjacency() {
        let p = Point::new(3, 3);
        assert!(Topology::Four.adjacent(p, Point::new(3, 4)));
        assert!(!Topology::Four.adjacent(p, Point::new(4, 4)));
        assert!(Topology::Eight.adjacent(p, Point::new(4, 4)));
        assert!(!Topology::Eight.adjacent(p, p));
        assert!(!Topology::Eight.adjacent(p, Point::new(5, 3)));
    }
}
