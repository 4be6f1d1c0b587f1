//! Cubic Bézier segments between path control points.

use crate::primitives::{Point3, Vec3};
use num_traits::Float;

/// A cubic Bézier curve in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier3<F> {
    /// Start point
    pub p0: Point3<F>,
    /// First control point
    pub p1: Point3<F>,
    /// Second control point
    pub p2: Point3<F>,
    /// End point
    pub p3: Point3<F>,
}

impl<F: Float> CubicBezier3<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point3<F>, p1: Point3<F>, p2: Point3<F>, p3: Point3<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Builds the segment between two anchors from their handle offsets.
    ///
    /// The first control point is `start + out_handle`, the second is
    /// `end + in_handle`.
    #[inline]
    pub fn from_handles(
        start: Point3<F>,
        out_handle: Vec3<F>,
        in_handle: Vec3<F>,
        end: Point3<F>,
    ) -> Self {
        Self::new(start, start + out_handle, end + in_handle, end)
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point3<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;
        let three = one + one + one;

        let blend = |a: F, b: F, c: F, d: F| {
            mt3 * a + three * mt2 * t * b + three * mt * t2 * c + t3 * d
        };

        Point3::new(
            blend(self.p0.x, self.p1.x, self.p2.x, self.p3.x),
            blend(self.p0.y, self.p1.y, self.p2.y, self.p3.y),
            blend(self.p0.z, self.p1.z, self.p2.z, self.p3.z),
        )
    }

    /// First derivative at `t`.
    pub fn derivative(&self, t: F) -> Vec3<F> {
        let one = F::one();
        let mt = one - t;
        let three = one + one + one;
        let six = three + three;

        (self.p1 - self.p0) * (three * mt * mt)
            + (self.p2 - self.p1) * (six * mt * t)
            + (self.p3 - self.p2) * (three * t * t)
    }
}
