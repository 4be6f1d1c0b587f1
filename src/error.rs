//! Error types for path generation.

use thiserror::Error;

/// Caller contract violations detected at the generation boundary.
///
/// Degenerate geometry (short paths, zero-length segments, tiny sizes) is not
/// an error; it resolves to empty or clamped output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolyError {
    /// A path point carries a NaN or infinite position, tangent or size.
    #[error("path point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point in the input path.
        index: usize,
    },

    /// A layer parameter is NaN or infinite.
    #[error("layer {layer} is invalid: {reason}")]
    InvalidLayer {
        /// Position of the layer in the caller's list.
        layer: usize,
        /// Which parameter failed.
        reason: &'static str,
    },
}

/// Convenience alias for generation results.
pub type Result<T> = std::result::Result<T, PolyError>;
