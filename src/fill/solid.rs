//! Triangulated interiors.

use crate::layer::{LayerConfig, Outline};
use crate::mesh::{MeshBuilder, MeshFragment, Vertex};
use crate::polygon::{triangulate_indices, Polygon};
use crate::primitives::Point2;
use crate::scatter::{element_color, ElementJitter};

/// Fills the outline's interior.
///
/// UVs map the bounding box's lower corner to `(0, 0)` and are divided by
/// the larger of its width, its height and the layer's minimum tile size, so
/// texel density does not depend on the shape's proportions. Vertex colors
/// are jittered per vertex index. Outlines with fewer than three points
/// produce nothing.
pub fn solid_fill(outline: &Outline, layer: &LayerConfig) -> MeshFragment {
    if outline.len() < 3 {
        return MeshFragment::new();
    }
    let polygon = Polygon::from_points(&outline.points);
    let Some((min, max)) = polygon.bounding_box() else {
        return MeshFragment::new();
    };
    let extent = (max.x - min.x)
        .max(max.y - min.y)
        .max(layer.scale.min_tile_size)
        .max(f32::EPSILON);

    let lengths = outline.cumulative_lengths();
    let total = lengths.last().copied().unwrap_or(0.0);

    let mut builder = MeshBuilder::new();
    let ids: Vec<u32> = outline
        .points
        .iter()
        .enumerate()
        .map(|(v, &p)| {
            let t = if total > 0.0 { lengths[v] / total } else { 0.0 };
            let jitter = ElementJitter::for_element(layer, v as u32);
            let color = element_color(layer, t, outline.colors[v], jitter.color);
            let uv = Point2::new((p.x - min.x) / extent, (p.y - min.y) / extent);
            builder.push_vertex(Vertex::new(p, uv, color))
        })
        .collect();

    for [a, b, c] in triangulate_indices(&polygon.vertices) {
        builder.push_triangle(ids[a], ids[b], ids[c]);
    }
    builder.finish()
}
