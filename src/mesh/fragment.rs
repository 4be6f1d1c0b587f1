//! Per-layer mesh output and the builder that fills it.

use crate::color::Rgba;
use crate::primitives::{Point2, Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Parallel vertex arrays plus a triangle index list.
///
/// Triangles are counter-clockwise when viewed from +z.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshFragment {
    pub positions: Vec<Point3<f32>>,
    pub uvs: Vec<Point2<f32>>,
    pub colors: Vec<Rgba>,
    pub normals: Vec<Vec3<f32>>,
    /// Tangent xyz with handedness in w.
    pub tangents: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl MeshFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// All attributes of one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub uv: Point2<f32>,
    pub color: Rgba,
    pub normal: Vec3<f32>,
    pub tangent: [f32; 4],
}

impl Vertex {
    /// A vertex facing the viewer with a +x tangent.
    pub fn new(position: Point3<f32>, uv: Point2<f32>, color: Rgba) -> Self {
        Self {
            position,
            uv,
            color,
            normal: Vec3::unit_z(),
            tangent: [1.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn with_normal(mut self, normal: Vec3<f32>) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_tangent(mut self, tangent: [f32; 4]) -> Self {
        self.tangent = tangent;
        self
    }
}

/// Appends vertices and triangles to a [`MeshFragment`].
///
/// Triangles are reoriented to counter-clockwise as they are pushed, so
/// callers can emit corners in whatever order their geometry suggests.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    fragment: MeshFragment,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, v: Vertex) -> u32 {
        let f = &mut self.fragment;
        let index = f.positions.len() as u32;
        f.positions.push(v.position);
        f.uvs.push(v.uv);
        f.colors.push(v.color);
        f.normals.push(v.normal);
        f.tangents.push(v.tangent);
        index
    }

    /// Adds a triangle, flipping it if it winds clockwise in the xy plane.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        let p = &self.fragment.positions;
        let (pa, pb, pc) = (p[a as usize], p[b as usize], p[c as usize]);
        let cross = (pb.x - pa.x) * (pc.y - pa.y) - (pb.y - pa.y) * (pc.x - pa.x);
        if cross < 0.0 {
            self.fragment.indices.extend_from_slice(&[a, c, b]);
        } else {
            self.fragment.indices.extend_from_slice(&[a, b, c]);
        }
    }

    /// Adds a quad `a b c d` (in order around its boundary) as two triangles.
    pub fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }

    pub fn vertex_count(&self) -> usize {
        self.fragment.positions.len()
    }

    pub fn finish(self) -> MeshFragment {
        self.fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vert(x: f32, y: f32) -> Vertex {
        Vertex::new(Point3::new(x, y, 0.0), Point2::new(x, y), Rgba::WHITE)
    }

    #[test]
    fn test_triangles_are_made_counter_clockwise() {
        let mut builder = MeshBuilder::new();
        let a = builder.push_vertex(vert(0.0, 0.0));
        let b = builder.push_vertex(vert(0.0, 1.0));
        let c = builder.push_vertex(vert(1.0, 0.0));
        builder.push_triangle(a, b, c);
        let mesh = builder.finish();
        assert_eq!(mesh.indices, vec![0, 2, 1]);
    }

    #[test]
    fn test_quad_produces_two_triangles() {
        let mut builder = MeshBuilder::new();
        let ids: Vec<u32> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| builder.push_vertex(vert(x, y)))
            .collect();
        builder.push_quad(ids[0], ids[1], ids[2], ids[3]);
        let mesh = builder.finish();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().next(), Some([0, 1, 2]));
        assert_eq!(mesh.normals[0], Vec3::unit_z());
    }
}
