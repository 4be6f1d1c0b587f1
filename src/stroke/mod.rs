//! Edge layers: scattered elements along edges, end caps, and solid ribbons.

mod scatter;
mod solid;
mod uv;

pub use scatter::{scatter_caps, scatter_edge, scatter_step};
pub use solid::{solid_edge, MITER_RATIO_LIMIT, ROUND_STEP_DEGREES};
pub use uv::{UvCursor, UvPiece};
