//! Resolving a placement site into an oriented, sized, tinted element.

use super::jitter::{is_kept, ElementJitter};
use crate::color::{HsvShift, Rgba};
use crate::layer::LayerConfig;
use crate::mesh::SpriteHandle;
use crate::primitives::{Point3, Vec2};

/// Most elements, tiles or ribbon pieces one layer may produce. Layers that
/// would exceed it produce nothing.
pub const MAX_ELEMENTS: usize = 250_000;

/// Sizes closer to zero than this are pushed out to it, keeping their sign.
pub const MIN_ELEMENT_SIZE: f32 = 1e-4;

/// Where an element goes before any jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSite {
    pub position: Point3<f32>,
    /// Unit direction of travel at the site.
    pub direction: Vec2<f32>,
    /// Normalized distance along the path, for offset curves.
    pub t: f32,
    /// Size multiplier carried by the path.
    pub size: f32,
    /// Tint carried by the path.
    pub tint: Rgba,
}

impl ElementSite {
    pub fn new(position: Point3<f32>, direction: Vec2<f32>, t: f32) -> Self {
        Self {
            position,
            direction,
            t,
            size: 1.0,
            tint: Rgba::WHITE,
        }
    }
}

/// A placed element: a local frame scaled by `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Running index within the layer.
    pub index: u32,
    pub position: Point3<f32>,
    /// Unit axis along the element's width.
    pub right: Vec2<f32>,
    /// Unit axis along the element's height.
    pub up: Vec2<f32>,
    pub size: f32,
    pub color: Rgba,
    pub sprite: Option<SpriteHandle>,
}

/// Keeps `size` at least [`MIN_ELEMENT_SIZE`] away from zero.
pub fn clamp_size(size: f32) -> f32 {
    if size.abs() >= MIN_ELEMENT_SIZE {
        size
    } else if size < 0.0 {
        -MIN_ELEMENT_SIZE
    } else {
        MIN_ELEMENT_SIZE
    }
}

/// Layer size at `t`, scaled by the path's size and a relative jitter.
pub fn element_size(layer: &LayerConfig, t: f32, path_size: f32, jitter: f32) -> f32 {
    let base = layer.scale.size + layer.scale.size_offsets.evaluate(t);
    clamp_size(base * path_size * (1.0 + jitter))
}

/// Layer color at `t`, tinted by the path and shifted by `jitter`.
pub fn element_color(layer: &LayerConfig, t: f32, tint: Rgba, jitter: HsvShift) -> Rgba {
    let c = &layer.color;
    let shift = HsvShift {
        hue: jitter.hue + c.hue_offsets.evaluate(t),
        saturation: jitter.saturation + c.saturation_offsets.evaluate(t),
        value: jitter.value + c.value_offsets.evaluate(t),
        alpha: jitter.alpha + c.alpha_offsets.evaluate(t),
    };
    c.color.multiply(tint).shifted(shift)
}

/// Resolves element `index` at `site`, or `None` if it is culled.
pub fn place_element(layer: &LayerConfig, site: &ElementSite, index: u32) -> Option<Element> {
    if !is_kept(layer, index) {
        return None;
    }
    let jitter = ElementJitter::for_element(layer, index);
    let rotation = &layer.rotation;

    let mut base = if rotation.follow_path {
        site.direction
    } else {
        layer.natural_direction().perpendicular_cw()
    };
    if rotation.alternate && index % 2 == 1 {
        base = -base;
    }
    let angle = rotation.angle + rotation.angle_offsets.evaluate(site.t) + jitter.angle;
    let right = base.rotate_degrees(angle);
    let up = right.perpendicular();

    let size = element_size(layer, site.t, site.size, jitter.size);
    let shift = (right * jitter.offset.x + up * jitter.offset.y) * size;

    Some(Element {
        index,
        position: site.position.offset_xy(shift),
        right,
        up,
        size,
        color: element_color(layer, site.t, site.tint, jitter.color),
        sprite: layer
            .mesh_params()
            .and_then(|params| params.pick_sprite(jitter.sprite)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::OffsetCurve;
    use crate::mesh::SpriteHandle;
    use approx::assert_relative_eq;

    fn site() -> ElementSite {
        ElementSite::new(Point3::new(1.0, 2.0, 0.0), Vec2::unit_x(), 0.5)
    }

    #[test]
    fn test_plain_element_follows_path() {
        let layer = LayerConfig::scatter_edge().size(0.5);
        let e = place_element(&layer, &site(), 0).unwrap();
        assert_eq!(e.position, Point3::new(1.0, 2.0, 0.0));
        assert_relative_eq!(e.right.x, 1.0);
        assert_relative_eq!(e.up.y, 1.0);
        assert_relative_eq!(e.size, 0.5);
        assert_eq!(e.color, Rgba::WHITE);
        assert_eq!(e.sprite, None);
    }

    #[test]
    fn test_fixed_direction_uses_natural_angle() {
        // natural up gives a rightward element
        let layer = LayerConfig::scatter_edge().follow_path(false);
        let mut s = site();
        s.direction = Vec2::new(0.0, -1.0);
        let e = place_element(&layer, &s, 0).unwrap();
        assert_relative_eq!(e.right.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(e.right.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_alternate_flips_odd_indices() {
        let layer = LayerConfig::scatter_edge().alternate_angles(true);
        let even = place_element(&layer, &site(), 2).unwrap();
        let odd = place_element(&layer, &site(), 3).unwrap();
        assert_relative_eq!(even.right.x, 1.0);
        assert_relative_eq!(odd.right.x, -1.0);
    }

    #[test]
    fn test_angle_and_offsets_rotate() {
        let layer = LayerConfig::scatter_edge()
            .angle(45.0)
            .angle_offsets(OffsetCurve::constant(45.0));
        let e = place_element(&layer, &site(), 0).unwrap();
        assert_relative_eq!(e.right.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(e.right.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_size_is_clamped_with_sign() {
        assert_eq!(clamp_size(0.0), MIN_ELEMENT_SIZE);
        assert_eq!(clamp_size(-1e-9), -MIN_ELEMENT_SIZE);
        assert_eq!(clamp_size(-2.0), -2.0);
        let layer = LayerConfig::scatter_edge().size(0.0);
        assert_eq!(place_element(&layer, &site(), 0).unwrap().size, MIN_ELEMENT_SIZE);
    }

    #[test]
    fn test_path_size_and_tint_apply() {
        let layer = LayerConfig::scatter_edge().size(2.0);
        let mut s = site();
        s.size = 0.25;
        s.tint = Rgba::new(0.5, 1.0, 1.0, 1.0);
        let e = place_element(&layer, &s, 0).unwrap();
        assert_relative_eq!(e.size, 0.5);
        assert_relative_eq!(e.color.r, 0.5);
    }

    #[test]
    fn test_sprite_is_picked_from_list() {
        let layer = LayerConfig::scatter_edge().sprites(vec![SpriteHandle(5)]);
        assert_eq!(place_element(&layer, &site(), 1).unwrap().sprite, Some(SpriteHandle(5)));
    }

    #[test]
    fn test_culled_element_is_none() {
        let layer = LayerConfig::scatter_edge().frequency(0.0);
        assert!(place_element(&layer, &site(), 0).is_none());
    }
}
