//! Input data model: control points with per-point attributes.

use crate::color::Rgba;
use crate::error::{PolyError, Result};
use crate::primitives::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// A control point with tangents, color and size.
///
/// `in_tangent` and `out_tangent` are offsets from `position`, used as
/// Bézier handles. `size` multiplies every layer's element size at this
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPoint {
    pub position: Point3<f32>,
    pub in_tangent: Vec3<f32>,
    pub out_tangent: Vec3<f32>,
    pub color: Rgba,
    pub size: f32,
}

impl PathPoint {
    /// A white, unit-size point with horizontal handles.
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            in_tangent: -Vec3::unit_x(),
            out_tangent: Vec3::unit_x(),
            color: Rgba::WHITE,
            size: 1.0,
        }
    }

    /// Shorthand for a point on the z = 0 plane.
    pub fn xy(x: f32, y: f32) -> Self {
        Self::new(Point3::new(x, y, 0.0))
    }

    pub fn with_tangents(mut self, in_tangent: Vec3<f32>, out_tangent: Vec3<f32>) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.in_tangent.is_finite()
            && self.out_tangent.is_finite()
            && self.color.is_finite()
            && self.size.is_finite()
    }
}

impl Default for PathPoint {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}

/// An ordered sequence of control points, optionally closed into a loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
    pub points: Vec<PathPoint>,
    pub closed: bool,
}

impl Path {
    pub fn new(points: Vec<PathPoint>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Builds a path on the z = 0 plane from `(x, y)` pairs.
    pub fn from_xy(coords: &[(f32, f32)], closed: bool) -> Self {
        Self::new(
            coords.iter().map(|&(x, y)| PathPoint::xy(x, y)).collect(),
            closed,
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of drawable segments: `len` when closed, `len - 1` when open.
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Positions only, in path order.
    pub fn positions(&self) -> Vec<Point3<f32>> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Returns a copy with the point order reversed.
    ///
    /// Tangent handles swap roles so Bézier segments trace the same curve
    /// backwards.
    pub fn reversed(&self) -> Self {
        let points = self
            .points
            .iter()
            .rev()
            .map(|p| PathPoint {
                in_tangent: p.out_tangent,
                out_tangent: p.in_tangent,
                ..*p
            })
            .collect();
        Self::new(points, self.closed)
    }

    /// Rejects NaN or infinite point data.
    pub fn validate(&self) -> Result<()> {
        match self.points.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(PolyError::NonFinitePoint { index }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count() {
        let open = Path::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], false);
        assert_eq!(open.segment_count(), 2);
        let closed = Path { closed: true, ..open };
        assert_eq!(closed.segment_count(), 3);
        assert_eq!(Path::from_xy(&[(0.0, 0.0)], true).segment_count(), 0);
    }

    #[test]
    fn test_reversed_swaps_handles() {
        let a = PathPoint::xy(0.0, 0.0)
            .with_tangents(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let b = PathPoint::xy(5.0, 0.0);
        let rev = Path::new(vec![a, b], false).reversed();
        assert_eq!(rev.points[1].position, a.position);
        assert_eq!(rev.points[1].in_tangent, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(rev.points[1].out_tangent, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_validate_reports_first_bad_point() {
        let mut path = Path::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], false);
        assert!(path.validate().is_ok());
        path.points[1].size = f32::NAN;
        path.points[2].position.x = f32::INFINITY;
        assert_eq!(path.validate(), Err(PolyError::NonFinitePoint { index: 1 }));
    }

    #[test]
    fn test_defaults_are_white_unit_points() {
        let p = PathPoint::default();
        assert_eq!(p.color, Rgba::WHITE);
        assert_eq!(p.size, 1.0);
        assert_eq!(p.out_tangent, Vec3::unit_x());
    }
}
