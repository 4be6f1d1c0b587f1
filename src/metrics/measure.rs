//! Length, orientation and center of point sequences.

use crate::primitives::{Point3, Vec2};
use num_traits::Float;

/// Sum of distances between consecutive points.
///
/// Includes the closing edge from the last point back to the first when
/// `closed` is set.
///
/// # Example
///
/// ```
/// use pathstack::{Point3, metrics::path_length};
///
/// let square = [
///     Point3::new(0.0_f64, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// assert_eq!(path_length(&square, false), 3.0);
/// assert_eq!(path_length(&square, true), 4.0);
/// ```
pub fn path_length<F: Float>(points: &[Point3<F>], closed: bool) -> F {
    let mut length = F::zero();
    for w in points.windows(2) {
        length = length + w[0].distance(w[1]);
    }
    if closed && points.len() > 1 {
        length = length + points[points.len() - 1].distance(points[0]);
    }
    length
}

/// Signed area of the polygon formed by `points` (shoelace formula).
///
/// Positive for counter-clockwise order in the xy plane.
pub fn closed_winding<F: Float>(points: &[Point3<F>]) -> F {
    let n = points.len();
    if n < 3 {
        return F::zero();
    }
    let mut sum = shoelace(points);
    let (last, first) = (points[n - 1], points[0]);
    sum = sum + (last.x * first.y - first.x * last.y);
    sum / (F::one() + F::one())
}

/// Signed area swept by an open polyline, without the closing edge.
///
/// For nearly closed strokes the sign agrees with [`closed_winding`], which
/// makes it usable while a shape is still being drawn.
pub fn winding<F: Float>(points: &[Point3<F>]) -> F {
    if points.len() < 2 {
        return F::zero();
    }
    shoelace(points) / (F::one() + F::one())
}

fn shoelace<F: Float>(points: &[Point3<F>]) -> F {
    points
        .windows(2)
        .fold(F::zero(), |acc, w| acc + (w[0].x * w[1].y - w[1].x * w[0].y))
}

/// Total signed turning of the path, in full turns.
///
/// A simple counter-clockwise loop returns `1`, a clockwise one `-1`, and a
/// straight stroke `0`. Open paths only count interior vertices.
pub fn turning_number<F: Float>(points: &[Point3<F>], closed: bool) -> F {
    let n = points.len();
    if n < 3 {
        return F::zero();
    }

    let dir = |a: Point3<F>, b: Point3<F>| -> Vec2<F> { (b - a).xy() };
    let mut total = F::zero();
    let vertices = if closed { 0..n } else { 1..n - 1 };
    for i in vertices {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];
        let d_in = dir(prev, curr);
        let d_out = dir(curr, next);
        if d_in.magnitude_squared() <= F::epsilon() || d_out.magnitude_squared() <= F::epsilon()
        {
            continue;
        }
        total = total + d_in.cross(d_out).atan2(d_in.dot(d_out));
    }

    let full_turn = F::from(std::f64::consts::TAU).unwrap_or_else(F::one);
    total / full_turn
}

/// Arithmetic mean of the positions, or `None` for an empty slice.
///
/// This is the vertex average, not the area centroid.
pub fn center<F: Float>(points: &[Point3<F>]) -> Option<Point3<F>> {
    if points.is_empty() {
        return None;
    }
    let count = F::from(points.len())?;
    let sum = points
        .iter()
        .fold(Point3::origin(), |acc, p| acc + p.to_vec());
    Some(Point3::new(sum.x / count, sum.y / count, sum.z / count))
}
