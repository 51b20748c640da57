//! Errors

use crate::transform::Transform;

/// Errors reported at the configuration boundary
///
/// Geometry problems are never errors; degenerate paths simply contribute
/// no coverage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Anti-alias level outside of 1, 2, 4 or 8
    #[error("unsupported anti-alias level {0}, expected 1, 2, 4 or 8")]
    InvalidAntialias(u32),

    /// Transform with a NaN or infinite component
    #[error("transform has a non-finite component: {0:?}")]
    NonFiniteTransform(Transform),

    /// Reading or writing a mask image failed
    #[error("mask image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result with an [Error](enum.Error.html)
pub type Result<T> = std::result::Result<T, Error>;
