//! Layer configuration: what each entry of the layer stack draws and how.

mod config;
mod curve;
mod outline;
mod params;

pub use config::{LayerConfig, MIN_SPACING};
pub use curve::{Keyframe, OffsetCurve};
pub use outline::Outline;
pub use params::{
    ColorParams, FillCoverage, JoinType, LayerKind, LayerMode, MeshParams, ObjectParams,
    PositionParams, RotationParams, ScaleParams,
};
