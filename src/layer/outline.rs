//! The path a single layer walks, after that layer's offsets.

use super::LayerConfig;
use crate::color::Rgba;
use crate::metrics::path_length;
use crate::path::Path;
use crate::polygon::offset_path;
use crate::primitives::{Point3, Vec2};

/// Positions and per-point attributes of a path, displaced for one layer.
///
/// Segment `i` runs from point `i` to point `(i + 1) % len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Point3<f32>>,
    pub sizes: Vec<f32>,
    pub colors: Vec<Rgba>,
    pub closed: bool,
}

impl Outline {
    /// Applies the layer's directional offset, then its constant offset.
    pub fn new(path: &Path, layer: &LayerConfig) -> Self {
        let positions = offset_path(
            &path.positions(),
            layer.position.direction_offset,
            path.closed,
        );
        let shift = layer.position.offset;
        Self {
            points: positions.into_iter().map(|p| p + shift).collect(),
            sizes: path.points.iter().map(|p| p.size).collect(),
            colors: path.points.iter().map(|p| p.color).collect(),
            closed: path.closed,
        }
    }

    /// An outline with unit sizes and white points.
    pub fn from_points(points: Vec<Point3<f32>>, closed: bool) -> Self {
        let n = points.len();
        Self {
            points,
            sizes: vec![1.0; n],
            colors: vec![Rgba::WHITE; n],
            closed,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Endpoint indices of segment `i`.
    #[inline]
    pub fn segment(&self, i: usize) -> (usize, usize) {
        (i, (i + 1) % self.points.len())
    }

    /// Unit direction of segment `i`, or `None` if it has no length.
    pub fn direction(&self, i: usize) -> Option<Vec2<f32>> {
        let (a, b) = self.segment(i);
        (self.points[b] - self.points[a]).xy().normalize()
    }

    pub fn length(&self) -> f32 {
        path_length(&self.points, self.closed)
    }

    /// Distance along the outline to the start of every segment, followed by
    /// the total length.
    pub fn cumulative_lengths(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.segment_count() + 1);
        let mut total = 0.0;
        out.push(total);
        for i in 0..self.segment_count() {
            let (a, b) = self.segment(i);
            total += self.points[a].distance(self.points[b]);
            out.push(total);
        }
        out
    }

    pub fn size_at(&self, segment: usize, frac: f32) -> f32 {
        let (a, b) = self.segment(segment);
        self.sizes[a] + (self.sizes[b] - self.sizes[a]) * frac
    }

    pub fn color_at(&self, segment: usize, frac: f32) -> Rgba {
        let (a, b) = self.segment(segment);
        self.colors[a].lerp(self.colors[b], frac)
    }
}
