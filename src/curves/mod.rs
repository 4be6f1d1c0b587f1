//! Curve evaluation: turning sparse control points into dense paths.

mod bezier;
mod catmull_rom;
mod evaluate;

pub use bezier::CubicBezier3;
pub use catmull_rom::{eval_uniform, CatmullRom3};
pub use evaluate::{evaluate, CurveType};
