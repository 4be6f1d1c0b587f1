//! Equal arc-length resampling.

use super::path_length;
use crate::primitives::Point3;
use num_traits::Float;

/// Redistributes exactly `count` points at equal arc-length intervals.
///
/// Positions are interpolated linearly within the straddled segment. Closed
/// paths space samples `length / count` apart around the loop; open paths
/// keep both endpoints and space samples `length / (count - 1)` apart.
/// `count` below 2 is raised to 2. An empty input has nothing to sample and
/// returns an empty vector.
///
/// # Example
///
/// ```
/// use pathstack::{Point3, metrics::resample};
///
/// let line = [Point3::new(0.0_f64, 0.0, 0.0), Point3::new(9.0, 0.0, 0.0)];
/// let out = resample(&line, 4, false);
/// assert_eq!(out.len(), 4);
/// assert_eq!(out[1].x, 3.0);
/// ```
pub fn resample<F: Float>(points: &[Point3<F>], count: usize, closed: bool) -> Vec<Point3<F>> {
    let count = count.max(2);
    let n = points.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![points[0]; count],
        _ => {}
    }

    let total = path_length(points, closed);
    if total <= F::epsilon() {
        return vec![points[0]; count];
    }

    let seg_count = if closed { n } else { n - 1 };
    let divisions = if closed { count } else { count - 1 };
    let step = total / F::from(divisions).unwrap_or_else(F::one);

    let mut out = Vec::with_capacity(count);
    let mut seg = 0;
    let mut seg_start = F::zero();
    for k in 0..count {
        let target = step * F::from(k).unwrap_or_else(F::zero);
        let mut seg_len = points[seg].distance(points[(seg + 1) % n]);
        while seg + 1 < seg_count && seg_start + seg_len < target {
            seg_start = seg_start + seg_len;
            seg += 1;
            seg_len = points[seg].distance(points[(seg + 1) % n]);
        }

        let t = if seg_len > F::epsilon() {
            ((target - seg_start) / seg_len).max(F::zero()).min(F::one())
        } else {
            F::zero()
        };
        out.push(points[seg].lerp(points[(seg + 1) % n], t));
    }

    if !closed {
        out[count - 1] = points[n - 1];
    }
    out
}

/// Resamples at roughly `spacing` apart: `round(length / spacing)` points,
/// never fewer than 2. Empty input returns an empty vector.
pub fn resample_by_spacing<F: Float>(
    points: &[Point3<F>],
    spacing: F,
    closed: bool,
) -> Vec<Point3<F>> {
    let length = path_length(points, closed);
    let count = if spacing > F::epsilon() {
        (length / spacing).round().to_usize().unwrap_or(2)
    } else {
        2
    };
    resample(points, count, closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(side: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(side, 0.0, 0.0),
            Point3::new(side, side, 0.0),
            Point3::new(0.0, side, 0.0),
        ]
    }

    #[test]
    fn test_closed_square_lands_on_corners() {
        let out = resample(&square(2.0), 8, true);
        assert_eq!(out.len(), 8);
        assert_relative_eq!(out[2].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[2].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[5].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(out[5].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_keeps_endpoints() {
        let pts = square(1.0);
        let out = resample(&pts, 7, false);
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[6], pts[3]);
    }

    #[test]
    fn test_length_is_preserved_on_convex_loop() {
        let pts = square(3.0);
        let out = resample(&pts, 40, true);
        assert_relative_eq!(path_length(&out, true), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        let one = [Point3::new(1.0_f64, 2.0, 3.0)];
        assert_eq!(resample(&one, 3, false), vec![one[0]; 3]);
        assert!(resample::<f64>(&[], 3, false).is_empty());
        assert_eq!(resample(&square(1.0), 0, true).len(), 2);
    }

    #[test]
    fn test_resample_by_spacing_rounds() {
        let line = [Point3::new(0.0_f64, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)];
        assert_eq!(resample_by_spacing(&line, 4.0, false).len(), 3);
        assert_eq!(resample_by_spacing(&line, 100.0, false).len(), 2);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert!(resample::<f64>(&[], 5, false).is_empty());
        assert!(resample_by_spacing::<f64>(&[], 1.0, true).is_empty());
    }
}
