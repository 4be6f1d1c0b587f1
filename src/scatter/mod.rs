//! Seeded element placement shared by edge, cap and fill layers.

mod element;
mod jitter;
mod placement;
mod quad;
mod rng;

pub use element::{
    clamp_size, element_color, element_size, place_element, Element, ElementSite,
    MAX_ELEMENTS, MIN_ELEMENT_SIZE,
};
pub use jitter::{is_kept, ElementJitter};
pub use placement::{Placement, PlacementFragment};
pub use quad::{element_quads, resolve_sprite};
pub use rng::{RngStream, ScatterRng};
