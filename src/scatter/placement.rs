//! Transform records for host objects.

use super::Element;
use crate::color::Rgba;
use crate::mesh::ObjectHandle;
use crate::primitives::Point3;
use serde::{Deserialize, Serialize};

/// Where the host should put one object, relative to the path's owner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point3<f32>,
    /// Radians about +z.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
    pub color: Rgba,
}

impl From<&Element> for Placement {
    fn from(element: &Element) -> Self {
        Self {
            position: element.position,
            rotation: element.right.angle(),
            scale: element.size,
            color: element.color,
        }
    }
}

/// Every placement of one layer, in element order.
///
/// The host matches placements to existing child objects by position in
/// this list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacementFragment {
    /// The object template to instantiate; `None` for mesh layers.
    pub object: Option<ObjectHandle>,
    pub placements: Vec<Placement>,
}

impl PlacementFragment {
    pub fn new(object: Option<ObjectHandle>) -> Self {
        Self {
            object,
            placements: Vec::new(),
        }
    }

    pub fn from_elements(object: Option<ObjectHandle>, elements: &[Element]) -> Self {
        Self {
            object,
            placements: elements.iter().map(Placement::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
