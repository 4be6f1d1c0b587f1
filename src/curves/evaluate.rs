//! Curve evaluation over whole paths, carrying point attributes along.

use super::{CatmullRom3, CubicBezier3};
use crate::path::{Path, PathPoint};
use serde::{Deserialize, Serialize};

/// How control points are joined before tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveType {
    /// Straight segments between control points.
    Linear,
    /// Interpolating spline through every control point.
    #[default]
    CatmullRom,
    /// Piecewise cubic using each point's tangent handles.
    CubicBezier,
}

/// Densifies `path` by sampling `subdivisions` points per source segment.
///
/// Sample colors and sizes are interpolated linearly between the segment's
/// endpoints. Paths with two or fewer points, `Linear` curves and zero
/// subdivisions return the input unchanged. Open paths end on their final
/// control point.
pub fn evaluate(path: &Path, curve: CurveType, subdivisions: usize) -> Path {
    if path.len() <= 2 || subdivisions == 0 {
        return path.clone();
    }

    let points = &path.points;
    let n = points.len();
    let segments = path.segment_count();
    let steps = subdivisions as f32;

    let spline = match curve {
        CurveType::Linear => return path.clone(),
        CurveType::CatmullRom => Some(CatmullRom3::new(path.positions(), path.closed)),
        CurveType::CubicBezier => None,
    };

    let mut out = Vec::with_capacity(segments * subdivisions + 1);
    for i in 0..segments {
        let start = &points[i];
        let end = &points[(i + 1) % n];
        let bezier = CubicBezier3::from_handles(
            start.position,
            start.out_tangent,
            end.in_tangent,
            end.position,
        );

        for j in 0..subdivisions {
            let t = j as f32 / steps;
            let position = match &spline {
                Some(spline) => spline.eval_segment(i, t),
                None => bezier.eval(t),
            };
            out.push(
                PathPoint::new(position)
                    .with_color(start.color.lerp(end.color, t))
                    .with_size(start.size + (end.size - start.size) * t),
            );
        }
    }

    if !path.closed {
        out.push(points[n - 1]);
    }

    Path::new(out, path.closed)
}
