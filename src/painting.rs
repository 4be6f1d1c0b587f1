//! Turning free-hand strokes into editable paths.
//!
//! Painted input is dense and noisy: many nearly colinear samples, repeated
//! points where the pointer paused, and an end that may or may not meet the
//! start. [`shape_from_stroke`] cleans that up into a path the layer stack
//! can walk.

use crate::metrics::{
    center, remove_colinear, remove_overlapping, resample_by_spacing, turning_number,
};
use crate::path::{Path, PathPoint};
use crate::primitives::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// A stroke whose absolute turning number exceeds this is treated as a loop.
pub const CLOSED_TURNING_THRESHOLD: f32 = 0.5;

/// Cleanup settings for painted strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintSettings {
    /// Resampling distance between control points.
    pub spacing: f32,
    /// Direction changes below this many degrees are removed.
    pub max_angle: f32,
    /// Points closer than this to the previous one are dropped.
    pub overlap_threshold: f32,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            max_angle: 10.0,
            overlap_threshold: 0.5,
        }
    }
}

impl PaintSettings {
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn max_angle(mut self, degrees: f32) -> Self {
        self.max_angle = degrees;
        self
    }

    pub fn overlap_threshold(mut self, threshold: f32) -> Self {
        self.overlap_threshold = threshold;
        self
    }
}

/// A cleaned stroke, recentered on its own origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedShape {
    /// Control points relative to `center`.
    pub path: Path,
    /// Where the shape sat in the input's space.
    pub center: Point3<f32>,
}

/// Cleans up a raw painted stroke.
///
/// The stroke is closed when it turns more than half a revolution. It is
/// then resampled at `spacing`, straightened, stripped of overlapping points
/// and recentered at the mean of what remains. Control point handles are set
/// so that Bézier evaluation follows the Catmull-Rom curve through the
/// points.
///
/// Returns `None` when fewer than two distinct points survive.
///
/// # Example
///
/// ```
/// use pathstack::painting::{shape_from_stroke, PaintSettings};
/// use pathstack::Point3;
///
/// let loop_points: Vec<_> = (0..64)
///     .map(|i| {
///         let a = i as f32 / 64.0 * std::f32::consts::TAU;
///         Point3::new(50.0 + 20.0 * a.cos(), 20.0 * a.sin(), 0.0)
///     })
///     .collect();
/// let shape = shape_from_stroke(&loop_points, &PaintSettings::default()).unwrap();
/// assert!(shape.path.closed);
/// assert!((shape.center.x - 50.0).abs() < 1.0);
/// ```
pub fn shape_from_stroke(raw: &[Point3<f32>], settings: &PaintSettings) -> Option<PaintedShape> {
    if raw.len() < 2 {
        return None;
    }
    let closed = turning_number(raw, false).abs() > CLOSED_TURNING_THRESHOLD;

    let resampled = resample_by_spacing(raw, settings.spacing, closed);
    let straightened = remove_colinear(&resampled, settings.max_angle, closed);
    let mut points = remove_overlapping(&straightened, settings.overlap_threshold);
    if closed && points.len() > 2 {
        let (first, last) = (points[0], points[points.len() - 1]);
        if first.distance(last) < settings.overlap_threshold {
            points.pop();
        }
    }
    if points.len() < 2 {
        return None;
    }

    let center = center(&points)?;
    let offset = center.to_vec();
    let local: Vec<Point3<f32>> = points.iter().map(|&p| p - offset).collect();
    let path = Path::new(with_handles(&local, closed), closed);
    Some(PaintedShape { path, center })
}

/// Catmull-Rom equivalent handles: `(next - prev) / 6` on either side.
fn with_handles(points: &[Point3<f32>], closed: bool) -> Vec<PathPoint> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = if closed || i > 0 { points[(i + n - 1) % n] } else { points[i] };
            let next = if closed || i + 1 < n { points[(i + 1) % n] } else { points[i] };
            let handle: Vec3<f32> = (next - prev) / 6.0;
            PathPoint::new(points[i]).with_tangents(-handle, handle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle(cx: f32, cy: f32, radius: f32, samples: usize) -> Vec<Point3<f32>> {
        (0..samples)
            .map(|i| {
                let a = i as f32 / samples as f32 * std::f32::consts::TAU;
                Point3::new(cx + radius * a.cos(), cy + radius * a.sin(), 0.0)
            })
            .collect()
    }

    #[test]
    fn test_loop_is_closed_and_recentered() {
        let shape = shape_from_stroke(&circle(10.0, -5.0, 20.0, 64), &PaintSettings::default())
            .unwrap();
        assert!(shape.path.closed);
        assert!((20..=31).contains(&shape.path.len()));
        assert_relative_eq!(shape.center.x, 10.0, epsilon = 0.5);
        assert_relative_eq!(shape.center.y, -5.0, epsilon = 0.5);

        let mean_x: f32 = shape.path.points.iter().map(|p| p.position.x).sum::<f32>()
            / shape.path.len() as f32;
        assert_relative_eq!(mean_x, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_straight_stroke_stays_open() {
        let raw: Vec<_> = (0..=40).map(|i| Point3::new(i as f32, 0.0, 0.0)).collect();
        let shape = shape_from_stroke(&raw, &PaintSettings::default()).unwrap();
        assert!(!shape.path.closed);
        assert_eq!(shape.path.len(), 3);
        assert!(shape.center.x > 0.0 && shape.center.x < 40.0);
    }

    #[test]
    fn test_half_turn_stays_open() {
        let arc: Vec<_> = circle(0.0, 0.0, 20.0, 64).into_iter().take(30).collect();
        let shape = shape_from_stroke(&arc, &PaintSettings::default()).unwrap();
        assert!(!shape.path.closed);
    }

    #[test]
    fn test_handles_follow_neighbours() {
        let shape = shape_from_stroke(&circle(0.0, 0.0, 20.0, 64), &PaintSettings::default())
            .unwrap();
        let p = &shape.path.points[3];
        assert_relative_eq!(p.out_tangent.x, -p.in_tangent.x);
        assert!(p.out_tangent.magnitude() > 0.5);
    }

    #[test]
    fn test_single_point_is_rejected() {
        assert!(shape_from_stroke(&[Point3::origin()], &PaintSettings::default()).is_none());
        let stuck = vec![Point3::new(1.0, 1.0, 0.0); 10];
        assert!(shape_from_stroke(&stuck, &PaintSettings::default()).is_none());
    }
}
