//! Frame conversion for a monochrome panel.
//!
//! Converting a host frame happens in two stages:
//!
//! 1. **Rasterizing** - packed RGB to inverted BT.601 luminance, centered on
//!    the panel canvas and clipped to its bounds
//! 2. **Dithering** - Floyd–Steinberg error diffusion to pure black/white,
//!    only in [`DisplayMode::Dithered`]

mod canvas;
mod dither;
mod error;
mod luminance;
mod mode;
mod rasterize;

pub use canvas::{Canvas, SourceFrame};
pub use dither::{dither, quantize, QUANTIZE_THRESHOLD};
pub use error::RasterError;
pub use luminance::{black_white, channels, luminance, pack_rgb, BLACK_WHITE_THRESHOLD};
pub use mode::DisplayMode;
pub use rasterize::{centered_offset, rasterize, Placement};
