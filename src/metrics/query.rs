//! Nearest point and segment lookups for interactive editing.

use crate::primitives::Point3;
use num_traits::Float;

/// Index of the point nearest to `query`, or `None` for an empty slice.
///
/// Ties resolve to the lowest index.
pub fn closest_point_index<F: Float>(points: &[Point3<F>], query: Point3<F>) -> Option<usize> {
    let mut best: Option<(usize, F)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance_squared(query);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the segment nearest to `query`.
///
/// Segment `i` runs from `points[i]` to `points[(i + 1) % len]`; the closing
/// segment is only considered for closed paths. Inserting a new point at
/// `i + 1` splits the returned segment.
pub fn closest_segment<F: Float>(
    points: &[Point3<F>],
    closed: bool,
    query: Point3<F>,
) -> Option<usize> {
    let n = points.len();
    let segments = match n {
        0 | 1 => return None,
        _ if closed => n,
        _ => n - 1,
    };

    let mut best: Option<(usize, F)> = None;
    for i in 0..segments {
        let d = distance_to_segment_squared(query, points[i], points[(i + 1) % n]);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

fn distance_to_segment_squared<F: Float>(p: Point3<F>, a: Point3<F>, b: Point3<F>) -> F {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq <= F::epsilon() {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).max(F::zero()).min(F::one());
    p.distance_squared(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ]
    }

    #[test]
    fn test_closest_point() {
        let pts = square();
        assert_eq!(closest_point_index(&pts, Point3::new(3.5, 3.0, 0.0)), Some(2));
        assert_eq!(closest_point_index::<f64>(&[], Point3::origin()), None);
    }

    #[test]
    fn test_closest_segment_respects_closing_edge() {
        let pts = square();
        let left_side = Point3::new(-0.5, 2.0, 0.0);
        assert_eq!(closest_segment(&pts, true, left_side), Some(3));
        // without the closing edge, the nearest is an end of the top or bottom edge
        let open = closest_segment(&pts, false, left_side).unwrap();
        assert!(open == 0 || open == 2);
    }

    #[test]
    fn test_closest_segment_projects_onto_interior() {
        let pts = square();
        assert_eq!(closest_segment(&pts, false, Point3::new(2.0, -1.0, 0.0)), Some(0));
        assert_eq!(closest_segment(&pts[..1], false, Point3::origin()), None);
    }
}
