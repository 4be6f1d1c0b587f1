//! Polygon triangulation using ear clipping.
//!
//! Converts a simple polygon of either winding into triangles that cover it.
//! Degenerate or self-intersecting input still terminates with `n - 2`
//! triangles; they may overlap or have zero area.
//!
//! # Complexity
//!
//! - Time: O(n²) for a polygon with n vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use pathstack::polygon::triangulate_indices;
//! use pathstack::Point2;
//!
//! let l_shape = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let triangles = triangulate_indices(&l_shape);
//! assert_eq!(triangles.len(), 4); // 6 vertices -> 4 triangles
//! ```

use super::polygon_signed_area;
use crate::primitives::Point2;
use num_traits::Float;

/// Triangulates a polygon and returns triangles as indices into `vertices`.
///
/// Every triangle is counter-clockwise regardless of the input winding.
pub fn triangulate_indices<F: Float>(vertices: &[Point2<F>]) -> Vec<[usize; 3]> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }

    // Work on a CCW view of the polygon, remembering original indices
    let mut index_map: Vec<usize> = if polygon_signed_area(vertices) < F::zero() {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };

    let mut triangles = Vec::with_capacity(n - 2);

    while index_map.len() > 3 {
        let m = index_map.len();
        let at = |k: usize| vertices[index_map[k]];

        let ear = (0..m).find(|&i| is_ear(vertices, &index_map, (i + m - 1) % m, i, (i + 1) % m));

        // No clean ear: clip the most convex corner so the loop always
        // makes progress on degenerate input.
        let i = ear.unwrap_or_else(|| {
            (0..m)
                .max_by(|&a, &b| {
                    let ca = cross(at((a + m - 1) % m), at(a), at((a + 1) % m));
                    let cb = cross(at((b + m - 1) % m), at(b), at((b + 1) % m));
                    ca.partial_cmp(&cb).unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(0)
        });

        let prev = (i + m - 1) % m;
        let next = (i + 1) % m;
        triangles.push([index_map[prev], index_map[i], index_map[next]]);
        index_map.remove(i);
    }

    triangles.push([index_map[0], index_map[1], index_map[2]]);
    triangles
}

/// Checks if the vertex at working position `curr` forms an ear.
fn is_ear<F: Float>(
    vertices: &[Point2<F>],
    index_map: &[usize],
    prev: usize,
    curr: usize,
    next: usize,
) -> bool {
    let a = vertices[index_map[prev]];
    let b = vertices[index_map[curr]];
    let c = vertices[index_map[next]];

    // Reflex and flat corners cannot be ears
    if cross(a, b, c) <= F::zero() {
        return false;
    }

    index_map.iter().enumerate().all(|(k, &vi)| {
        k == prev || k == curr || k == next || !point_in_triangle(vertices[vi], a, b, c)
    })
}

/// Cross product of vectors (b-a) and (c-a).
#[inline]
fn cross<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Checks if point p is inside triangle abc (boundary counts as inside).
fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);

    let has_neg = d1 < F::zero() || d2 < F::zero() || d3 < F::zero();
    let has_pos = d1 > F::zero() || d2 > F::zero() || d3 > F::zero();

    !(has_neg && has_pos)
}

#[inline]
fn sign<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> F {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
