//! Mesh data produced by layers and merged by material.

mod fragment;
mod merge;
mod sprite;

pub use fragment::{MeshBuilder, MeshFragment, Vertex};
pub use merge::{Mesh, Submesh};
pub use sprite::{
    MaterialId, NoSprites, ObjectHandle, SpriteAtlas, SpriteHandle, SpriteResolver, UvRect,
};
