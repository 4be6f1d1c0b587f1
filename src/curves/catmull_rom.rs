//! Uniform Catmull-Rom splines through 3D control points.
//!
//! The curve passes through every control point. Each segment `i -> i+1` is
//! shaped by its neighbours `i-1` and `i+2`; closed splines wrap those
//! indices, open splines repeat the endpoint where a neighbour is missing.
//!
//! # Example
//!
//! ```
//! use pathstack::{Point3, curves::CatmullRom3};
//!
//! let spline = CatmullRom3::new(
//!     vec![
//!         Point3::new(0.0_f64, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(2.0, 0.0, 0.0),
//!     ],
//!     false,
//! );
//!
//! assert_eq!(spline.num_segments(), 2);
//! let p = spline.eval_segment(1, 0.0);
//! assert!((p.x - 1.0).abs() < 1e-12);
//! ```

use crate::primitives::Point3;
use num_traits::Float;

/// A uniform Catmull-Rom spline in 3D.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom3<F> {
    /// Control points that the spline passes through
    pub points: Vec<Point3<F>>,
    /// Whether the last point connects back to the first
    pub closed: bool,
}

impl<F: Float> CatmullRom3<F> {
    pub fn new(points: Vec<Point3<F>>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Returns the number of spline segments.
    pub fn num_segments(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// The four control points shaping `segment`.
    ///
    /// Open splines use the endpoint itself as the missing outer neighbour.
    pub fn control_points(&self, segment: usize) -> [Point3<F>; 4] {
        let n = self.points.len();
        let at = |i: usize| self.points[i % n];

        let start = at(segment);
        let end = at(segment + 1);
        let mut prev = at(segment + n - 1);
        let mut next = at(segment + 2);

        if !self.closed {
            if segment == 0 {
                prev = start;
            }
            if segment + 2 >= n {
                next = end;
            }
        }
        [prev, start, end, next]
    }

    /// Evaluates `segment` at local parameter `t` in `[0, 1]`.
    pub fn eval_segment(&self, segment: usize, t: F) -> Point3<F> {
        let [p0, p1, p2, p3] = self.control_points(segment);
        eval_uniform(p0, p1, p2, p3, t)
    }

    /// Samples `subdivisions` evenly spaced points per segment.
    ///
    /// Open splines append the final control point so the polyline reaches
    /// the end of the curve.
    pub fn to_polyline(&self, subdivisions: usize) -> Vec<Point3<F>> {
        let segments = self.num_segments();
        if segments == 0 || subdivisions == 0 {
            return self.points.clone();
        }

        let steps = F::from(subdivisions).unwrap_or_else(F::one);
        let mut out = Vec::with_capacity(segments * subdivisions + 1);
        for segment in 0..segments {
            for j in 0..subdivisions {
                let t = F::from(j).unwrap_or_else(F::zero) / steps;
                out.push(self.eval_segment(segment, t));
            }
        }
        if !self.closed {
            if let Some(&last) = self.points.last() {
                out.push(last);
            }
        }
        out
    }
}

/// Uniform Catmull-Rom blend of four control points.
///
/// Returns `p1` at `t = 0` and `p2` at `t = 1`.
pub fn eval_uniform<F: Float>(
    p0: Point3<F>,
    p1: Point3<F>,
    p2: Point3<F>,
    p3: Point3<F>,
    t: F,
) -> Point3<F> {
    let t2 = t * t;
    let t3 = t2 * t;

    let one = F::one();
    let two = one + one;
    let three = two + one;
    let four = two + two;
    let five = four + one;
    let half = one / two;

    let blend = |a: F, b: F, c: F, d: F| {
        half * ((two * b)
            + (-a + c) * t
            + (two * a - five * b + four * c - d) * t2
            + (-a + three * b - three * c + d) * t3)
    };

    Point3::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
        blend(p0.z, p1.z, p2.z, p3.z),
    )
}
