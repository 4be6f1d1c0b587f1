//! The per-layer configuration record.
//!
//! # Example
//!
//! ```
//! use pathstack::layer::{JoinType, LayerConfig};
//!
//! let grass = LayerConfig::scatter_edge()
//!     .named("grass")
//!     .size(0.5)
//!     .spacing(0.8)
//!     .placement_range(0.6)
//!     .seed(7);
//!
//! let outline = LayerConfig::solid_edge().outer_join(JoinType::Miter);
//! assert!(grass.exists_in_direction(pathstack::Vec2::new(0.0, 1.0)));
//! assert!(!grass.exists_in_direction(pathstack::Vec2::new(0.0, -1.0)));
//! # let _ = outline;
//! ```

use super::params::{
    ColorParams, FillCoverage, JoinType, LayerKind, LayerMode, MeshParams, ObjectParams,
    PositionParams, RotationParams, ScaleParams,
};
use super::OffsetCurve;
use crate::color::Rgba;
use crate::error::{PolyError, Result};
use crate::mesh::{MaterialId, ObjectHandle, SpriteHandle};
use crate::primitives::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Smallest spacing a layer is allowed to use.
pub const MIN_SPACING: f32 = 0.01;

/// One entry in the layer stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub name: String,
    pub mode: LayerMode,
    pub seed: i32,
    /// Layers draw in ascending order; ties keep list order.
    pub sort_order: i32,
    pub position: PositionParams,
    pub rotation: RotationParams,
    pub scale: ScaleParams,
    pub color: ColorParams,
    pub kind: LayerKind,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            mode: LayerMode::default(),
            seed: 0,
            sort_order: 0,
            position: PositionParams::default(),
            rotation: RotationParams::default(),
            scale: ScaleParams::default(),
            color: ColorParams::default(),
            kind: LayerKind::default(),
        }
    }
}

impl LayerConfig {
    pub fn new(mode: LayerMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn scatter_edge() -> Self {
        Self::new(LayerMode::ScatterEdge)
    }

    pub fn solid_edge() -> Self {
        Self::new(LayerMode::SolidEdge)
    }

    pub fn scatter_fill() -> Self {
        Self::new(LayerMode::ScatterFill)
    }

    pub fn solid_fill() -> Self {
        Self::new(LayerMode::SolidFill)
    }

    pub fn caps() -> Self {
        Self::new(LayerMode::Cap)
    }

    /// A scatter-edge layer that places host objects instead of quads.
    pub fn object(object: ObjectHandle) -> Self {
        Self {
            kind: LayerKind::Object(ObjectParams {
                object: Some(object),
            }),
            ..Self::scatter_edge()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mode(mut self, mode: LayerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    pub fn sort_order(mut self, order: i32) -> Self {
        self.sort_order = order;
        self
    }

    pub fn offset(mut self, offset: Vec3<f32>) -> Self {
        self.position.offset = offset;
        self
    }

    pub fn direction_offset(mut self, distance: f32) -> Self {
        self.position.direction_offset = distance;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.position.spacing = spacing;
        self
    }

    pub fn position_jitter(mut self, jitter: f32) -> Self {
        self.position.jitter = jitter;
        self
    }

    pub fn frequency(mut self, frequency: f32) -> Self {
        self.position.frequency = frequency;
        self
    }

    pub fn allow_overflow(mut self, allow: bool) -> Self {
        self.position.allow_overflow = allow;
        self
    }

    pub fn fill_coverage(mut self, coverage: FillCoverage) -> Self {
        self.position.fill_coverage = coverage;
        self
    }

    pub fn follow_path(mut self, follow: bool) -> Self {
        self.rotation.follow_path = follow;
        self
    }

    pub fn alternate_angles(mut self, alternate: bool) -> Self {
        self.rotation.alternate = alternate;
        self
    }

    pub fn angle(mut self, degrees: f32) -> Self {
        self.rotation.angle = degrees;
        self
    }

    pub fn angle_offsets(mut self, curve: OffsetCurve) -> Self {
        self.rotation.angle_offsets = curve;
        self
    }

    pub fn angle_jitter(mut self, degrees: f32) -> Self {
        self.rotation.jitter = degrees;
        self
    }

    pub fn natural_angle(mut self, degrees: f32) -> Self {
        self.rotation.natural_angle = degrees;
        self
    }

    pub fn placement_range(mut self, range: f32) -> Self {
        self.rotation.placement_range = range;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.scale.size = size;
        self
    }

    pub fn size_offsets(mut self, curve: OffsetCurve) -> Self {
        self.scale.size_offsets = curve;
        self
    }

    pub fn size_jitter(mut self, jitter: f32) -> Self {
        self.scale.jitter = jitter;
        self
    }

    pub fn min_tile_size(mut self, size: f32) -> Self {
        self.scale.min_tile_size = size;
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color.color = color;
        self
    }

    /// Sets hue, saturation, value and alpha jitter ranges.
    pub fn hsva_jitter(mut self, hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        self.color.hue_jitter = hue;
        self.color.saturation_jitter = saturation;
        self.color.value_jitter = value;
        self.color.alpha_jitter = alpha;
        self
    }

    /// Sets the sprite list. Turns an object layer into a mesh layer.
    pub fn sprites(self, sprites: Vec<SpriteHandle>) -> Self {
        self.with_mesh(|m| m.sprites = sprites)
    }

    pub fn sprite_distribution(self, curve: OffsetCurve) -> Self {
        self.with_mesh(|m| m.sprite_distribution = curve)
    }

    pub fn material(self, material: MaterialId) -> Self {
        self.with_mesh(|m| m.material = material)
    }

    pub fn outer_join(self, join: JoinType) -> Self {
        self.with_mesh(|m| m.outer_join = join)
    }

    pub fn inner_join(self, join: JoinType) -> Self {
        self.with_mesh(|m| m.inner_join = join)
    }

    pub fn min_join_angle(self, degrees: f32) -> Self {
        self.with_mesh(|m| m.min_join_angle = degrees)
    }

    pub fn max_stretch(self, stretch: f32) -> Self {
        self.with_mesh(|m| m.max_stretch = stretch)
    }

    pub fn stretch_segments(self, stretch: bool) -> Self {
        self.with_mesh(|m| m.stretch_segments = stretch)
    }

    pub fn smooth_normals(self, smooth: bool) -> Self {
        self.with_mesh(|m| m.smooth_normals = smooth)
    }

    fn with_mesh(mut self, edit: impl FnOnce(&mut MeshParams)) -> Self {
        if let LayerKind::Mesh(params) = &mut self.kind {
            edit(params);
        } else {
            let mut params = MeshParams::default();
            edit(&mut params);
            self.kind = LayerKind::Mesh(params);
        }
        self
    }

    /// Mesh settings, or `None` for object layers.
    pub fn mesh_params(&self) -> Option<&MeshParams> {
        match &self.kind {
            LayerKind::Mesh(params) => Some(params),
            LayerKind::Object(_) => None,
        }
    }

    pub fn material_id(&self) -> MaterialId {
        self.mesh_params()
            .map(|params| params.material)
            .unwrap_or_default()
    }

    /// Unit vector for [`RotationParams::natural_angle`].
    pub fn natural_direction(&self) -> Vec2<f32> {
        Vec2::from_angle_degrees(self.rotation.natural_angle)
    }

    /// Whether an edge whose outward normal is `dir` is drawn by this layer.
    pub fn exists_in_direction(&self, dir: Vec2<f32>) -> bool {
        let range = self.rotation.placement_range.clamp(0.0, 1.0);
        let deviation = -dir.dot(self.natural_direction());
        deviation <= 1.0 - 2.0 * range
    }

    /// Whether fill tiles may extend past the boundary.
    pub fn overflows(&self) -> bool {
        self.position.allow_overflow || self.mode.forces_overflow()
    }

    /// Copy with every parameter clamped into its usable range.
    pub fn sanitized(&self) -> Self {
        let mut layer = self.clone();

        let position = &mut layer.position;
        position.spacing = position.spacing.max(MIN_SPACING);
        position.frequency = position.frequency.clamp(0.0, 1.0);
        position.jitter = position.jitter.max(0.0);

        let rotation = &mut layer.rotation;
        rotation.placement_range = rotation.placement_range.clamp(0.0, 1.0);
        rotation.jitter = rotation.jitter.max(0.0);

        let scale = &mut layer.scale;
        scale.jitter = scale.jitter.clamp(0.0, 1.0);
        scale.min_tile_size = scale.min_tile_size.max(0.0);

        let color = &mut layer.color;
        color.hue_jitter = color.hue_jitter.clamp(0.0, 1.0);
        color.saturation_jitter = color.saturation_jitter.clamp(0.0, 1.0);
        color.value_jitter = color.value_jitter.clamp(0.0, 1.0);
        color.alpha_jitter = color.alpha_jitter.clamp(0.0, 1.0);

        if let LayerKind::Mesh(mesh) = &mut layer.kind {
            mesh.min_join_angle = mesh.min_join_angle.clamp(0.0, 180.0);
            mesh.max_stretch = mesh.max_stretch.max(0.0);
        }
        layer
    }

    /// Rejects non-finite parameters. `index` is the layer's position in the
    /// caller's list and is reported in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason| PolyError::InvalidLayer {
            layer: index,
            reason,
        };
        let p = &self.position;
        if !(p.offset.is_finite() && p.direction_offset.is_finite()) {
            return Err(invalid("offset is not finite"));
        }
        if !(p.spacing.is_finite() && p.jitter.is_finite() && p.frequency.is_finite()) {
            return Err(invalid("position parameter is not finite"));
        }
        let r = &self.rotation;
        if !(r.angle.is_finite()
            && r.jitter.is_finite()
            && r.natural_angle.is_finite()
            && r.placement_range.is_finite())
        {
            return Err(invalid("rotation parameter is not finite"));
        }
        let s = &self.scale;
        if !(s.size.is_finite() && s.jitter.is_finite() && s.min_tile_size.is_finite()) {
            return Err(invalid("scale parameter is not finite"));
        }
        let c = &self.color;
        if !(c.color.is_finite()
            && c.hue_jitter.is_finite()
            && c.saturation_jitter.is_finite()
            && c.value_jitter.is_finite()
            && c.alpha_jitter.is_finite())
        {
            return Err(invalid("color parameter is not finite"));
        }
        if let LayerKind::Mesh(m) = &self.kind {
            if !(m.min_join_angle.is_finite() && m.max_stretch.is_finite()) {
                return Err(invalid("join parameter is not finite"));
            }
        }
        Ok(())
    }
}
