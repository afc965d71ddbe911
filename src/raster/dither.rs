//! Floyd–Steinberg error diffusion to a two-level canvas.

use super::canvas::Canvas;

/// Values at or above this quantize to white.
pub const QUANTIZE_THRESHOLD: u8 = 128;

/// Quantize one intensity to 0 or 255.
#[inline]
pub fn quantize(value: u8) -> u8 {
    if value >= QUANTIZE_THRESHOLD {
        255
    } else {
        0
    }
}

/// Dither the canvas in place, row-major from the top-left corner.
///
/// Each pixel's quantization error is spread to its unvisited neighbours
/// with the 7/16, 3/16, 5/16, 1/16 kernel. Shares are computed with
/// truncating integer division, so a little error is lost per pixel.
/// Neighbours outside the canvas are skipped and accumulated values are
/// clamped to 0..=255.
pub fn dither(canvas: &mut Canvas) {
    let width = canvas.width();
    let height = canvas.height();

    for y in 0..height {
        for x in 0..width {
            let old = canvas.get(x, y);
            let new = quantize(old);
            canvas.set(x, y, new);
            let error = old as i32 - new as i32;
            if error == 0 {
                continue;
            }

            let has_east = x + 1 < width;
            let has_south = y + 1 < height;

            if has_east {
                spread(canvas, x + 1, y, error * 7 / 16);
            }
            if has_south {
                if x > 0 {
                    spread(canvas, x - 1, y + 1, error * 3 / 16);
                }
                spread(canvas, x, y + 1, error * 5 / 16);
                if has_east {
                    spread(canvas, x + 1, y + 1, error / 16);
                }
            }
        }
    }
}

#[inline]
fn spread(canvas: &mut Canvas, x: usize, y: usize, share: i32) {
    let value = canvas.get(x, y) as i32 + share;
    canvas.set(x, y, value.clamp(0, 255) as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_filled(width: usize, height: usize, value: u8) -> Canvas {
        Canvas::from_vec(width, height, vec![value; width * height]).unwrap()
    }

    #[test]
    fn test_quantize_boundary() {
        assert_eq!(quantize(127), 0);
        assert_eq!(quantize(128), 255);
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(255), 255);
    }

    #[test]
    fn test_single_mid_pixel_goes_white() {
        let mut canvas = canvas_filled(1, 1, 128);
        dither(&mut canvas);
        assert_eq!(canvas.as_bytes(), &[255]);
    }

    #[test]
    fn test_error_spread_to_neighbours() {
        // Only the first pixel carries error: 100 -> 0, error 100.
        let mut canvas = Canvas::from_vec(2, 2, vec![100, 0, 0, 0]).unwrap();
        dither(&mut canvas);
        // east gets 43 (700/16), south 31 (500/16), southeast 6 (100/16); all < 128
        assert_eq!(canvas.as_bytes(), &[0, 0, 0, 0]);

        let mut canvas = Canvas::from_vec(2, 2, vec![100, 90, 0, 0]).unwrap();
        dither(&mut canvas);
        // east: 90 + 43 = 133 -> white
        assert_eq!(canvas.get(1, 0), 255);
    }

    #[test]
    fn test_negative_error_darkens_neighbours() {
        // 200 -> 255, error -55; east share -24 (truncated toward zero)
        let mut canvas = Canvas::from_vec(2, 1, vec![200, 150]).unwrap();
        dither(&mut canvas);
        // 150 - 24 = 126 -> black
        assert_eq!(canvas.as_bytes(), &[255, 0]);
    }

    #[test]
    fn test_output_is_two_level() {
        let data: Vec<u8> = (0..64 * 48).map(|i| (i * 7 % 256) as u8).collect();
        let mut canvas = Canvas::from_vec(64, 48, data).unwrap();
        dither(&mut canvas);
        assert!(canvas.as_bytes().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_uniform_extremes_unchanged() {
        let mut black = canvas_filled(8, 8, 0);
        dither(&mut black);
        assert!(black.as_bytes().iter().all(|&v| v == 0));

        let mut white = canvas_filled(8, 8, 255);
        dither(&mut white);
        assert!(white.as_bytes().iter().all(|&v| v == 255));
    }
}
