//! Parameter groups shared by every layer kind.

use super::OffsetCurve;
use crate::color::Rgba;
use crate::mesh::{MaterialId, ObjectHandle, SpriteHandle};
use crate::primitives::Vec3;
use serde::{Deserialize, Serialize};

/// What a layer draws.
///
/// `Stroke`, `Line`, `Cap`, `InnerFill` and `OuterFill` are older names kept
/// so saved documents still load; see [`LayerMode::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayerMode {
    Stroke,
    Line,
    /// One element at each end of an open path.
    Cap,
    InnerFill,
    OuterFill,
    /// Discrete elements spaced along every eligible edge.
    #[default]
    ScatterEdge,
    /// A continuous textured ribbon along every eligible edge.
    SolidEdge,
    /// Discrete elements on a grid clipped to the shape.
    ScatterFill,
    /// The shape's interior, triangulated.
    SolidFill,
}

impl LayerMode {
    /// The mode this one is drawn as.
    pub fn canonical(self) -> Self {
        match self {
            LayerMode::Stroke => LayerMode::ScatterEdge,
            LayerMode::Line => LayerMode::SolidEdge,
            LayerMode::InnerFill | LayerMode::OuterFill => LayerMode::ScatterFill,
            other => other,
        }
    }

    /// Whether fill tiles are always allowed past the boundary.
    pub fn forces_overflow(self) -> bool {
        self == LayerMode::OuterFill
    }

    /// Whether the mode produces discrete elements rather than a surface.
    pub fn is_scatter(self) -> bool {
        matches!(
            self.canonical(),
            LayerMode::ScatterEdge | LayerMode::ScatterFill | LayerMode::Cap
        )
    }
}

/// Corner treatment between two ribbon segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JoinType {
    /// Leave the corner open.
    None,
    /// Extend both edges to their intersection.
    Miter,
    /// Cut the corner flat.
    Bevel,
    /// Sweep an arc around the corner.
    #[default]
    Rounded,
}

/// Which part of a fill tile must lie inside the shape for it to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillCoverage {
    #[default]
    Center,
    AnyCorner,
    AllCorners,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionParams {
    /// Added to every point after the directional offset.
    pub offset: Vec3<f32>,
    /// Distance to push the path outward (negative pulls it inward).
    pub direction_offset: f32,
    /// Gap between elements, in multiples of element width.
    pub spacing: f32,
    /// Random displacement in units of element size.
    pub jitter: f32,
    /// Fraction of elements kept, in `[0, 1]`.
    pub frequency: f32,
    pub allow_overflow: bool,
    pub fill_coverage: FillCoverage,
}

impl Default for PositionParams {
    fn default() -> Self {
        Self {
            offset: Vec3::zero(),
            direction_offset: 0.0,
            spacing: 1.0,
            jitter: 0.0,
            frequency: 1.0,
            allow_overflow: false,
            fill_coverage: FillCoverage::Center,
        }
    }
}

/// Element orientation and the angular filter. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationParams {
    pub follow_path: bool,
    /// Flip every other element by 180 degrees.
    pub alternate: bool,
    pub angle: f32,
    pub angle_offsets: OffsetCurve,
    pub jitter: f32,
    /// Direction of the preferred outward normal. 90 points up.
    pub natural_angle: f32,
    /// How far from the natural direction an edge may face. 0 accepts every
    /// edge, 1 only edges facing exactly the natural direction.
    pub placement_range: f32,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            follow_path: true,
            alternate: false,
            angle: 0.0,
            angle_offsets: OffsetCurve::zero(),
            jitter: 0.0,
            natural_angle: 90.0,
            placement_range: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleParams {
    pub size: f32,
    pub size_offsets: OffsetCurve,
    /// Relative size variation in `[0, 1]`.
    pub jitter: f32,
    /// Smallest extent fill UVs are normalized by.
    pub min_tile_size: f32,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            size: 1.0,
            size_offsets: OffsetCurve::zero(),
            jitter: 0.0,
            min_tile_size: 1.0,
        }
    }
}

/// Base tint plus HSV variation. Hue is a fraction of the color wheel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorParams {
    pub color: Rgba,
    pub hue_offsets: OffsetCurve,
    pub saturation_offsets: OffsetCurve,
    pub value_offsets: OffsetCurve,
    pub alpha_offsets: OffsetCurve,
    pub hue_jitter: f32,
    pub saturation_jitter: f32,
    pub value_jitter: f32,
    pub alpha_jitter: f32,
}

/// Settings for layers that emit triangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParams {
    /// Candidate sprites. Empty draws untextured quads.
    pub sprites: Vec<SpriteHandle>,
    /// Maps a uniform draw to a position in `sprites`.
    pub sprite_distribution: OffsetCurve,
    pub material: MaterialId,
    pub outer_join: JoinType,
    pub inner_join: JoinType,
    /// Corners turning less than this many degrees get no join.
    pub min_join_angle: f32,
    /// Leftover ribbon length, in world units, absorbed by the last tile of a
    /// segment instead of starting a new one.
    pub max_stretch: f32,
    /// Draw each ribbon segment as a single stretched tile.
    pub stretch_segments: bool,
    pub smooth_normals: bool,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            sprites: Vec::new(),
            sprite_distribution: OffsetCurve::identity(),
            material: MaterialId::default(),
            outer_join: JoinType::Rounded,
            inner_join: JoinType::Rounded,
            min_join_angle: 0.0,
            max_stretch: 0.0,
            stretch_segments: false,
            smooth_normals: false,
        }
    }
}

impl MeshParams {
    /// Picks a sprite for a uniform draw `u` in `[0, 1)`.
    pub fn pick_sprite(&self, u: f32) -> Option<SpriteHandle> {
        let last = self.sprites.len().checked_sub(1)?;
        let mapped = self.sprite_distribution.evaluate(u).clamp(0.0, 1.0);
        let index = (mapped * last as f32).round() as usize;
        self.sprites.get(index.min(last)).copied()
    }
}

/// Settings for layers that place host objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectParams {
    pub object: Option<ObjectHandle>,
}

/// Kind-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerKind {
    Mesh(MeshParams),
    Object(ObjectParams),
}

impl Default for LayerKind {
    fn default() -> Self {
        LayerKind::Mesh(MeshParams::default())
    }
}
