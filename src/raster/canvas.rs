//! Source raster view and the single-byte output canvas.

use super::error::RasterError;

fn area(width: usize, height: usize) -> Result<usize, RasterError> {
    width
        .checked_mul(height)
        .ok_or(RasterError::TooLarge { width, height })
}

/// Borrowed view of the host's packed RGB raster for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SourceFrame<'a> {
    pixels: &'a [u32],
    width: usize,
    height: usize,
}

impl<'a> SourceFrame<'a> {
    /// Wrap a row-major pixel slice. The slice must hold exactly `width * height` pixels.
    pub fn new(pixels: &'a [u32], width: usize, height: usize) -> Result<Self, RasterError> {
        if pixels.len() != area(width, height)? {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// One source row.
    pub fn row(&self, y: usize) -> &'a [u32] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}

/// Row-major intensity buffer sized to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a black canvas.
    pub fn new(width: usize, height: usize) -> Result<Self, RasterError> {
        let len = area(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Build a canvas from existing bytes.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        if data.len() != area(width, height)? {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every pixel to 0 without reallocating.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_frame_size_check() {
        let pixels = vec![0u32; 6];
        assert!(SourceFrame::new(&pixels, 3, 2).is_ok());
        assert!(matches!(
            SourceFrame::new(&pixels, 4, 2),
            Err(RasterError::SizeMismatch { actual: 6, .. })
        ));
    }

    #[test]
    fn test_source_frame_rows() {
        let pixels: Vec<u32> = (0..6).collect();
        let frame = SourceFrame::new(&pixels, 3, 2).unwrap();
        assert_eq!(frame.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_canvas_clear_keeps_size() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.set(3, 2, 200);
        assert_eq!(canvas.get(3, 2), 200);
        canvas.clear();
        assert_eq!(canvas.as_bytes().len(), 12);
        assert!(canvas.as_bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_canvas_size_overflow() {
        assert_eq!(
            Canvas::new(usize::MAX, 2),
            Err(RasterError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(matches!(
            Canvas::from_vec(usize::MAX, 3, Vec::new()),
            Err(RasterError::TooLarge { .. })
        ));
    }
}
