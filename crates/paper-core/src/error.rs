// File: crates/paper-core/src/error.rs
// Summary: Error taxonomy for sheet construction, curve evaluation and export.

use std::path::PathBuf;

use crate::axis::AxisKind;

/// Boxed error returned by user-supplied curve functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Rejected configuration. Raised before any drawing happens.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {what}: {value} (must be {expected})")]
    InvalidDimension {
        what: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("scale factor for the {axis} axis must be > 0, got {value}")]
    InvalidScale { axis: AxisKind, value: f64 },

    #[error("graduation spacing must be a positive number of millimetres, got {value}")]
    InvalidGraduation { value: f64 },

    #[error("function curves need at least 2 samples, got {value}")]
    InvalidSampleCount { value: usize },

    #[error("resolution must be a positive DPI, got {value}")]
    InvalidResolution { value: f32 },

    #[error("unknown value {value:?} for {option} (expected one of: {expected})")]
    UnknownOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot infer an image format from {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("points and function curves need axes to be placed on")]
    OverlayWithoutAxes,

    #[error("{what} spacing of {spacing_mm} mm puts {count} lines across {span_mm} mm, limit is {limit}")]
    TooDense {
        what: &'static str,
        spacing_mm: f64,
        span_mm: f64,
        count: f64,
        limit: u32,
    },

    #[error("raster would be {width}x{height} px, limit is {limit} px per side")]
    CanvasTooLarge { width: u32, height: u32, limit: u32 },
}

/// Everything a render call can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("function {name:?} failed at x = {x}")]
    Evaluation {
        name: String,
        x: f64,
        #[source]
        source: BoxError,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {target}")]
    Encode {
        target: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {target} as PNG")]
    Png {
        target: String,
        #[source]
        source: png::EncodingError,
    },

    #[error("raster surface: {0}")]
    Surface(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
