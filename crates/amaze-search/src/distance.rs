use amaze_core::Point;

/// Manhattan (L1) distance between two cells.
///
/// Never overestimates the true remaining cost on a 4-connected unit-cost
/// grid and satisfies the triangle inequality along edges, which is what
/// lets the best-first strategy return shortest paths without reopening
/// closed states.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
