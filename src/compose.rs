//! Per-frame conversion from host raster to panel bytes.

use crate::raster::{dither, rasterize, Canvas, DisplayMode, Placement, RasterError, SourceFrame};

/// Native resolution of the portrait e-ink panel.
pub const PANEL_WIDTH: usize = 600;
pub const PANEL_HEIGHT: usize = 800;

/// Owns the panel canvas and reuses it for every frame.
#[derive(Debug)]
pub struct FrameComposer {
    canvas: Canvas,
    mode: DisplayMode,
    last_placement: Option<Placement>,
}

impl FrameComposer {
    pub fn new(width: usize, height: usize, mode: DisplayMode) -> Result<Self, RasterError> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            mode,
            last_placement: None,
        })
    }

    /// A composer for the native panel.
    pub fn panel(mode: DisplayMode) -> Result<Self, RasterError> {
        Self::new(PANEL_WIDTH, PANEL_HEIGHT, mode)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }

    /// Bytes in every composed frame.
    pub fn frame_len(&self) -> usize {
        self.canvas.as_bytes().len()
    }

    /// Rasterize `source` and dither it when the mode asks for it.
    ///
    /// Returns the finished frame, always `width * height` bytes.
    pub fn compose(&mut self, source: &SourceFrame<'_>) -> &[u8] {
        let placement = rasterize(source, &mut self.canvas, self.mode);
        if self.mode == DisplayMode::Dithered {
            dither(&mut self.canvas);
        }

        if self.last_placement != Some(placement) {
            log::debug!(
                "Source {}x{} placed at ({}, {}), visible {}x{}",
                source.width(),
                source.height(),
                placement.offset_x,
                placement.offset_y,
                placement.width,
                placement.height
            );
            self.last_placement = Some(placement);
        }

        self.canvas.as_bytes()
    }

    /// The canvas as left by the last [`FrameComposer::compose`].
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}
