use geo::Point;

/// Returns whether two points coincide within `epsilon` on both axes.
///
/// The comparison is made per-axis (a square window), not by radius,
/// so that it stays independent of the chosen [`Metric`](crate::Metric).
#[inline]
pub fn almost_equal(a: Point, b: Point, epsilon: f64) -> bool {
    (a.x() - b.x()).abs() <= epsilon && (a.y() - b.y()).abs() <= epsilon
}
