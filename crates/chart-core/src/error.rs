// File: crates/chart-core/src/error.rs
// Summary: Error type for engine construction, export, and history parsing.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Rendering itself never fails; these cover binding a surface and moving
/// data in or out of the engine.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid drawing surface: width={width}, height={height}")]
    InvalidSurface { width: i32, height: i32 },

    #[error("failed to allocate a {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },

    #[error("failed to read pixels back from the surface")]
    PixelReadback,

    #[error("png encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed rating history: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rating API error: {0}")]
    Api(String),
}
