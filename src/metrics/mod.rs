//! Path metrics: length, winding, resampling and point reduction.

mod measure;
mod query;
mod reduce;
mod resample;

pub use measure::{center, closed_winding, path_length, turning_number, winding};
pub use query::{closest_point_index, closest_segment};
pub use reduce::{remove_colinear, remove_colinear_indices, remove_overlapping};
pub use resample::{resample, resample_by_spacing};
