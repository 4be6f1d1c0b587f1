//! Billboard quads for scattered elements.

use super::Element;
use crate::mesh::{MeshBuilder, MeshFragment, SpriteHandle, SpriteResolver, UvRect, Vertex};
use crate::primitives::{Point2, Vec2};

/// Texture rectangle and aspect ratio for an optional sprite.
///
/// No sprite, or a non-positive aspect, gives the full texture and a square.
pub fn resolve_sprite<R: SpriteResolver + ?Sized>(
    sprites: &R,
    sprite: Option<SpriteHandle>,
) -> (UvRect, f32) {
    let Some(sprite) = sprite else {
        return (UvRect::FULL, 1.0);
    };
    let rect = sprites.uv_rect(sprite).unwrap_or_default();
    let aspect = sprites
        .aspect_ratio(sprite)
        .filter(|a| a.is_finite() && *a > f32::EPSILON)
        .unwrap_or(1.0);
    (rect, aspect)
}

/// One quad per element, `2 * size` wide, with height set by the sprite's
/// aspect ratio.
pub fn element_quads<R: SpriteResolver + ?Sized>(elements: &[Element], sprites: &R) -> MeshFragment {
    let mut builder = MeshBuilder::new();
    for e in elements {
        let (rect, aspect) = resolve_sprite(sprites, e.sprite);
        let right = e.right * e.size;
        let up = e.up * (e.size / aspect);
        let tangent = [e.right.x, e.right.y, 0.0, 1.0];

        let mut corner = |offset: Vec2<f32>, u: f32, v: f32| {
            builder.push_vertex(
                Vertex::new(e.position.offset_xy(offset), Point2::new(u, v), e.color)
                    .with_tangent(tangent),
            )
        };
        let top_left = corner(up - right, rect.u0, rect.v1);
        let top_right = corner(up + right, rect.u1, rect.v1);
        let bottom_right = corner(right - up, rect.u1, rect.v0);
        let bottom_left = corner(-up - right, rect.u0, rect.v0);
        builder.push_quad(top_left, top_right, bottom_right, bottom_left);
    }
    builder.finish()
}
