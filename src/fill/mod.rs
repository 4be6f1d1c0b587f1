//! Area layers: triangulated interiors and grid-scattered elements.

mod scatter;
mod solid;

pub use scatter::scatter_fill;
pub use solid::solid_fill;
