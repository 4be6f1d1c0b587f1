//! Merging per-layer fragments into one multi-material mesh.

use super::{MaterialId, MeshFragment};
use crate::color::Rgba;
use crate::primitives::{Point2, Point3, Vec3};
use serde::{Deserialize, Serialize};

/// A run of triangles drawn with one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submesh {
    pub material: MaterialId,
    /// Indices into the parent mesh's vertex arrays.
    pub indices: Vec<u32>,
}

/// The merged output of a generation pass.
///
/// Fragments are appended in layer order. A material different from the
/// previous layer's starts a new submesh, so the same material may appear in
/// more than one submesh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<Point3<f32>>,
    pub uvs: Vec<Point2<f32>>,
    pub colors: Vec<Rgba>,
    pub normals: Vec<Vec3<f32>>,
    pub tangents: Vec<[f32; 4]>,
    pub submeshes: Vec<Submesh>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.indices.len() / 3).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Materials in submesh order.
    pub fn materials(&self) -> Vec<MaterialId> {
        self.submeshes.iter().map(|s| s.material).collect()
    }

    /// Appends a fragment drawn with `material`.
    ///
    /// The material run is tracked even for empty fragments so that submesh
    /// boundaries follow layer order, not geometry.
    pub fn push_fragment(&mut self, fragment: MeshFragment, material: MaterialId) {
        let offset = self.positions.len() as u32;

        let starts_run = self
            .submeshes
            .last()
            .map_or(true, |last| last.material != material);
        if starts_run {
            self.submeshes.push(Submesh {
                material,
                indices: Vec::new(),
            });
        }
        if let Some(run) = self.submeshes.last_mut() {
            run.indices
                .extend(fragment.indices.iter().map(|&i| i + offset));
        }

        self.positions.extend(fragment.positions);
        self.uvs.extend(fragment.uvs);
        self.colors.extend(fragment.colors);
        self.normals.extend(fragment.normals);
        self.tangents.extend(fragment.tangents);
    }
}
