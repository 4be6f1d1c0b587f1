//! Sprite lookup seam: texture rectangles and aspect ratios supplied by the host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque reference to a sprite in the host's atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Opaque reference to a host material; consecutive layers sharing one
/// material merge into the same submesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// Opaque reference to a host object template placed by object layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(pub u32);

/// A texture-space rectangle `(u0, v0)`–`(u1, v1)`, with `v1` at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    /// The whole texture, used when a layer has no sprite.
    pub const FULL: UvRect = UvRect {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };

    pub fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// Horizontal position at fraction `t` of the width.
    #[inline]
    pub fn u_at(&self, t: f32) -> f32 {
        self.u0 + (self.u1 - self.u0) * t
    }

    /// The horizontal slice between fractions `start` and `end`.
    pub fn span(&self, start: f32, end: f32) -> Self {
        Self {
            u0: self.u_at(start),
            u1: self.u_at(end),
            ..*self
        }
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Resolves sprite handles for texturing and billboard sizing.
///
/// Returning `None` means the handle is unknown. A layer that references an
/// unknown sprite contributes no geometry. A layer with no sprites at all
/// draws untextured quads over [`UvRect::FULL`] with a square aspect.
pub trait SpriteResolver {
    fn uv_rect(&self, sprite: SpriteHandle) -> Option<UvRect>;

    /// Width divided by height.
    fn aspect_ratio(&self, sprite: SpriteHandle) -> Option<f32>;
}

impl<T: SpriteResolver + ?Sized> SpriteResolver for &T {
    fn uv_rect(&self, sprite: SpriteHandle) -> Option<UvRect> {
        (**self).uv_rect(sprite)
    }

    fn aspect_ratio(&self, sprite: SpriteHandle) -> Option<f32> {
        (**self).aspect_ratio(sprite)
    }
}

/// A resolver that knows no sprites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSprites;

impl SpriteResolver for NoSprites {
    fn uv_rect(&self, _sprite: SpriteHandle) -> Option<UvRect> {
        None
    }

    fn aspect_ratio(&self, _sprite: SpriteHandle) -> Option<f32> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AtlasEntry {
    rect: UvRect,
    aspect: f32,
}

/// An in-memory atlas keyed by handle.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    entries: HashMap<SpriteHandle, AtlasEntry>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sprite by its pixel rectangle inside a texture.
    ///
    /// Returns the handle assigned to it.
    pub fn insert_pixels(
        &mut self,
        texture_size: (f32, f32),
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> SpriteHandle {
        let (tw, th) = texture_size;
        let rect = UvRect::new(x / tw, y / th, (x + width) / tw, (y + height) / th);
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        self.insert(rect, aspect)
    }

    /// Registers a sprite by its normalized rectangle and aspect ratio.
    pub fn insert(&mut self, rect: UvRect, aspect: f32) -> SpriteHandle {
        let handle = SpriteHandle(self.entries.len() as u32);
        self.entries.insert(handle, AtlasEntry { rect, aspect });
        handle
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpriteResolver for SpriteAtlas {
    fn uv_rect(&self, sprite: SpriteHandle) -> Option<UvRect> {
        self.entries.get(&sprite).map(|e| e.rect)
    }

    fn aspect_ratio(&self, sprite: SpriteHandle) -> Option<f32> {
        self.entries.get(&sprite).map(|e| e.aspect)
    }
}
