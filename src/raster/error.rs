//! Raster construction errors

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("Raster of {width}x{height} does not match a buffer of {actual} pixels")]
    SizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("Raster dimensions {width}x{height} overflow")]
    TooLarge { width: usize, height: usize },
}
