//! Centered placement of the source raster onto the panel canvas.

use super::canvas::{Canvas, SourceFrame};
use super::luminance::{black_white, luminance};
use super::mode::DisplayMode;

/// Region of the canvas covered by the source after centering and clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub offset_x: usize,
    pub offset_y: usize,
    pub width: usize,
    pub height: usize,
}

impl Placement {
    /// Center `source` inside `output` along both axes.
    ///
    /// A source larger than the output is anchored at 0 and clipped on the
    /// far edge.
    pub fn centered(source_width: usize, source_height: usize, output_width: usize, output_height: usize) -> Self {
        let offset_x = centered_offset(output_width, source_width);
        let offset_y = centered_offset(output_height, source_height);
        Self {
            offset_x,
            offset_y,
            width: source_width.min(output_width - offset_x),
            height: source_height.min(output_height - offset_y),
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.offset_x..self.offset_x + self.width).contains(&x)
            && (self.offset_y..self.offset_y + self.height).contains(&y)
    }
}

/// `(output - source) / 2`, clamped to 0 when the source is larger.
pub fn centered_offset(output: usize, source: usize) -> usize {
    output.saturating_sub(source) / 2
}

/// Convert the source to inverted luminance and place it centered on the canvas.
///
/// The canvas is cleared first, so everything outside the placement stays 0.
/// In [`DisplayMode::BlackWhite`] luminance is hard-thresholded before
/// inversion; other modes keep the full 8-bit value. No dithering happens here.
pub fn rasterize(source: &SourceFrame<'_>, canvas: &mut Canvas, mode: DisplayMode) -> Placement {
    canvas.clear();

    let placement = Placement::centered(source.width(), source.height(), canvas.width(), canvas.height());
    let threshold = mode == DisplayMode::BlackWhite;

    for y in 0..placement.height {
        let row = &source.row(y)[..placement.width];
        for (x, &pixel) in row.iter().enumerate() {
            let mut intensity = luminance(pixel);
            if threshold {
                intensity = black_white(intensity);
            }
            canvas.set(x + placement.offset_x, y + placement.offset_y, 255 - intensity);
        }
    }

    placement
}
