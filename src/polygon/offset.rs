//! Path offsetting along per-vertex miter normals.
//!
//! Each point moves along the bisector of its two adjacent segment normals,
//! scaled so both offset edges stay `distance` away from the original edges.
//! The point count never changes. Sharp concave corners may fold over
//! themselves; that output is returned as-is.
//!
//! # Example
//!
//! ```
//! use pathstack::{Point3, polygon::offset_path};
//!
//! // Clockwise square: left of travel points outward.
//! let square = vec![
//!     Point3::new(0.0_f64, 0.0, 0.0),
//!     Point3::new(0.0, 10.0, 0.0),
//!     Point3::new(10.0, 10.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//! ];
//!
//! let grown = offset_path(&square, 1.0, true);
//! assert!((grown[0].x + 1.0).abs() < 1e-12);
//! assert!((grown[0].y + 1.0).abs() < 1e-12);
//! ```

use crate::primitives::{Point3, Vec2};
use num_traits::Float;

/// Miter vectors longer than this multiple of the offset are clamped.
pub const MITER_LIMIT: f64 = 2.0;

/// Moves every point `distance` to the left of the direction of travel.
///
/// For a clockwise loop, positive distances grow the shape and negative
/// distances shrink it. Open paths offset their endpoints along the single
/// adjacent segment normal. Depth (z) is preserved.
pub fn offset_path<F: Float>(points: &[Point3<F>], distance: F, closed: bool) -> Vec<Point3<F>> {
    if distance == F::zero() || points.len() < 2 {
        return points.to_vec();
    }
    offset_normals(points, closed)
        .into_iter()
        .zip(points)
        .map(|(normal, p)| p.offset_xy(normal * distance))
        .collect()
}

/// Per-vertex miter normals pointing left of travel.
///
/// A unit offset along the returned vector keeps both adjacent edges one
/// unit away; its length is `1 / cos(half turn)`, capped at
/// [`MITER_LIMIT`]. Vertices with no usable neighbouring segment get a zero
/// vector.
pub fn offset_normals<F: Float>(points: &[Point3<F>], closed: bool) -> Vec<Vec2<F>> {
    let n = points.len();
    if n < 2 {
        return vec![Vec2::zero(); n];
    }

    let left = |a: Point3<F>, b: Point3<F>| (b - a).xy().normalize().map(|d| d.perpendicular());
    let limit = F::from(MITER_LIMIT).unwrap_or_else(F::one);

    (0..n)
        .map(|i| {
            let incoming = if i > 0 || closed {
                left(points[(i + n - 1) % n], points[i])
            } else {
                None
            };
            let outgoing = if i + 1 < n || closed {
                left(points[i], points[(i + 1) % n])
            } else {
                None
            };

            match (incoming, outgoing) {
                (Some(n1), Some(n2)) => miter(n1, n2, limit),
                (Some(only), None) | (None, Some(only)) => only,
                (None, None) => Vec2::zero(),
            }
        })
        .collect()
}

fn miter<F: Float>(n1: Vec2<F>, n2: Vec2<F>, limit: F) -> Vec2<F> {
    let Some(bisector) = (n1 + n2).normalize() else {
        // Full reversal: the edges overlap, push along the incoming normal.
        return n1;
    };
    let cos_half = bisector.dot(n1);
    let scale = if cos_half > F::one() / limit {
        F::one() / cos_half
    } else {
        limit
    };
    bisector * scale
}
