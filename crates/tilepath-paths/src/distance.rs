use tilepath_core::Point;

/// Fixed-point cost of one orthogonal step.
pub const STEP_COST: i32 = 1000;

/// Fixed-point cost of one diagonal step (√2 · [`STEP_COST`]).
pub const DIAGONAL_COST: i32 = 1414;

#[inline]
fn clamp_i32(v: i64) -> i32 {
    v.min(i64::from(i32::MAX)) as i32
}

#[inline]
fn axis_deltas(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(a.x) - i64::from(b.x)).abs(),
        (i64::from(a.y) - i64::from(b.y)).abs(),
    )
}

/// Manhattan (L1) distance between two points, saturating at `i32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = axis_deltas(a, b);
    clamp_i32(dx + dy)
}

/// Octile distance in fixed-point units: diagonal steps cost
/// [`DIAGONAL_COST`], the straight remainder [`STEP_COST`]. Saturates at
/// `i32::MAX`.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let (dx, dy) = axis_deltas(a, b);
    let (min, max) = (dx.min(dy), dx.max(dy));
    clamp_i32(min * i64::from(DIAGONAL_COST) + (max - min) * i64::from(STEP_COST))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn octile_mixes_diagonal_and_straight() {
        assert_eq!(octile(Point::new(0, 0), Point::new(4, 4)), 4 * DIAGONAL_COST);
        assert_eq!(octile(Point::new(0, 0), Point::new(5, 0)), 5 * STEP_COST);
        assert_eq!(
            octile(Point::new(2, 1), Point::new(-1, 3)),
            2 * DIAGONAL_COST + STEP_COST
        );
    }

    #[test]
    fn distant_points_saturate() {
        let far = Point::new(i32::MAX, i32::MAX);
        let near = Point::new(i32::MIN, 0);
        assert_eq!(manhattan(far, near), i32::MAX);
        assert_eq!(octile(Point::new(2_000_000, 2_000_000), Point::ZERO), i32::MAX);
        assert_eq!(manhattan(Point::new(3_000_000, 0), Point::ZERO), 3_000_000);
    }
}
