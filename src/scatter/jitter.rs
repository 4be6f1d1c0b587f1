//! Per-element random variation.

use super::{RngStream, ScatterRng};
use crate::color::HsvShift;
use crate::layer::LayerConfig;
use crate::primitives::Vec2;

/// The random part of one element, drawn in a fixed order so that turning a
/// jitter amount off does not change the other draws.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementJitter {
    /// Uniform draw used to pick a sprite.
    pub sprite: f32,
    /// Degrees added to the element angle.
    pub angle: f32,
    /// Relative size change.
    pub size: f32,
    /// Displacement along the element's right and up axes, in units of size.
    pub offset: Vec2<f32>,
    pub color: HsvShift,
}

impl ElementJitter {
    /// Draws the jitter for element `index` of `layer`.
    pub fn for_element(layer: &LayerConfig, index: u32) -> Self {
        let mut rng = ScatterRng::new(layer.seed, index, RngStream::Element);
        Self::draw(&mut rng, layer)
    }

    pub fn draw(rng: &mut ScatterRng, layer: &LayerConfig) -> Self {
        let sprite = rng.next_f32();
        let angle = rng.signed(layer.rotation.jitter);
        let size = rng.signed(layer.scale.jitter);
        let dx = rng.signed(layer.position.jitter);
        let dy = rng.signed(layer.position.jitter);
        let c = &layer.color;
        let color = HsvShift {
            hue: rng.signed(c.hue_jitter),
            saturation: rng.signed(c.saturation_jitter),
            value: rng.signed(c.value_jitter),
            alpha: rng.signed(c.alpha_jitter),
        };
        Self {
            sprite,
            angle,
            size,
            offset: Vec2::new(dx, dy),
            color,
        }
    }
}

/// Whether element `index` survives frequency culling.
pub fn is_kept(layer: &LayerConfig, index: u32) -> bool {
    let frequency = layer.position.frequency;
    if frequency >= 1.0 {
        return true;
    }
    let mut rng = ScatterRng::new(layer.seed, index, RngStream::Culling);
    rng.next_f32() < frequency
}
