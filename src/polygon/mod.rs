//! Planar polygon operations used by fills and layer offsets.
//!
//! - Signed area, containment and bounds
//! - Path offsetting along miter normals
//! - Ear-clipping triangulation
//!
//! # Example
//!
//! ```
//! use pathstack::polygon::{Polygon, triangulate_indices};
//! use pathstack::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert!(square.contains(Point2::new(1.0, 1.0)));
//! assert_eq!(triangulate_indices(&square.vertices).len(), 2);
//! ```

mod core;
mod offset;
mod triangulate;

pub use core::{polygon_contains, polygon_signed_area, Polygon};
pub use offset::{offset_normals, offset_path, MITER_LIMIT};
pub use triangulate::triangulate_indices;
