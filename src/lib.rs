//! pathstack - Layered meshes and placements from control-point paths
//!
//! A path is a handful of control points. A layer stack turns it into
//! something drawable: scattered sprites along its edges, continuous ribbons
//! with mitered or rounded joins, triangulated or tiled interiors, and
//! transforms for placing external objects. The same path and layers always
//! produce the same output, down to every jittered element.
//!
//! # Example
//!
//! ```
//! use pathstack::{generate_mesh, LayerConfig, Path, Rgba};
//!
//! let island = Path::from_xy(&[(0.0, 0.0), (8.0, 0.0), (8.0, 4.0), (0.0, 4.0)], true);
//! let layers = [
//!     LayerConfig::solid_fill().color(Rgba::new(0.4, 0.3, 0.2, 1.0)),
//!     LayerConfig::solid_edge().size(0.5).placement_range(0.5),
//!     LayerConfig::scatter_edge().size(0.25).seed(7).angle_jitter(15.0),
//! ];
//!
//! let mesh = generate_mesh(&island, &layers).unwrap();
//! assert!(mesh.triangle_count() > 2);
//! ```

pub mod color;
pub mod curves;
pub mod error;
pub mod fill;
pub mod generate;
pub mod layer;
pub mod mesh;
pub mod metrics;
pub mod painting;
pub mod path;
pub mod polygon;
pub mod primitives;
pub mod scatter;
pub mod stroke;

pub use color::{HsvShift, Rgba};
pub use curves::CurveType;
pub use error::{PolyError, Result};
pub use generate::{generate_mesh, generate_placements, Generator, GeneratorConfig};
pub use layer::{JoinType, LayerConfig, LayerMode};
pub use mesh::{MaterialId, Mesh, MeshFragment, ObjectHandle, SpriteHandle};
pub use path::{Path, PathPoint};
pub use primitives::{Point2, Point3, Vec2, Vec3};
pub use scatter::{Placement, PlacementFragment};
