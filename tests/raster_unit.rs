//! Unit tests for frame conversion (rasterizing, thresholding, dithering).

use ink_frame::compose::FrameComposer;
use ink_frame::raster::*;

fn uniform_source(width: usize, height: usize, level: u8) -> Vec<u32> {
    vec![pack_rgb(level, level, level); width * height]
}

fn canvas_filled(width: usize, height: usize, value: u8) -> Canvas {
    Canvas::from_vec(width, height, vec![value; width * height]).unwrap()
}

// ==================== Rasterizing Tests ====================

#[test]
fn test_white_source_inverts_to_zero() {
    let pixels = uniform_source(10, 6, 255);
    let source = SourceFrame::new(&pixels, 10, 6).unwrap();
    let mut canvas = canvas_filled(20, 20, 77);

    let placement = rasterize(&source, &mut canvas, DisplayMode::Greyscale);
    assert_eq!(
        placement,
        Placement {
            offset_x: 5,
            offset_y: 7,
            width: 10,
            height: 6
        }
    );
    assert!(canvas.as_bytes().iter().all(|&v| v == 0));
}

#[test]
fn test_black_source_fills_exactly_the_placement() {
    let pixels = uniform_source(10, 6, 0);
    let source = SourceFrame::new(&pixels, 10, 6).unwrap();
    let mut canvas = Canvas::new(21, 20).unwrap();

    let placement = rasterize(&source, &mut canvas, DisplayMode::Greyscale);
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let expected = if placement.contains(x, y) { 255 } else { 0 };
            assert_eq!(canvas.get(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_oversized_source_is_clipped_not_cropped_from_origin() {
    // Source wider and taller than the canvas: column/row 0 must land at 0.
    let width = 8;
    let height = 6;
    let mut pixels = uniform_source(width, height, 255);
    pixels[0] = pack_rgb(0, 0, 0);
    let source = SourceFrame::new(&pixels, width, height).unwrap();
    let mut canvas = Canvas::new(4, 3).unwrap();

    let placement = rasterize(&source, &mut canvas, DisplayMode::Greyscale);
    assert_eq!((placement.offset_x, placement.offset_y), (0, 0));
    assert_eq!((placement.width, placement.height), (4, 3));
    assert_eq!(canvas.get(0, 0), 255);
    assert_eq!(canvas.get(1, 0), 0);
}

#[test]
fn test_mixed_axes_clip_and_center() {
    // Wider than the canvas but shorter: x anchored, y centered.
    let pixels = uniform_source(640, 400, 0);
    let source = SourceFrame::new(&pixels, 640, 400).unwrap();
    let mut canvas = Canvas::new(600, 800).unwrap();

    let placement = rasterize(&source, &mut canvas, DisplayMode::Greyscale);
    assert_eq!(placement.offset_x, 0);
    assert_eq!(placement.offset_y, 200);
    assert_eq!(canvas.get(599, 200), 255);
    assert_eq!(canvas.get(599, 599), 255);
    assert_eq!(canvas.get(0, 199), 0);
    assert_eq!(canvas.get(0, 600), 0);
}

#[test]
fn test_luminance_weights() {
    // 0.299*100 + 0.587*150 + 0.114*200 = 29.9 + 88.05 + 22.8 = 140.75
    assert_eq!(luminance(pack_rgb(100, 150, 200)), 140);
}

#[test]
fn test_black_white_mode_two_levels() {
    let pixels: Vec<u32> = (0..=255u8).map(|v| pack_rgb(v, v, v)).collect();
    let source = SourceFrame::new(&pixels, 256, 1).unwrap();
    let mut canvas = Canvas::new(256, 1).unwrap();

    rasterize(&source, &mut canvas, DisplayMode::BlackWhite);
    for (level, &value) in canvas.as_bytes().iter().enumerate() {
        let expected = if level > 60 { 0 } else { 255 };
        assert_eq!(value, expected, "level {}", level);
    }
}

#[test]
fn test_black_white_threshold_idempotent() {
    let data: Vec<u8> = (0..64).map(|i| if i % 3 == 0 { 255 } else { 0 }).collect();
    let canvas = Canvas::from_vec(8, 8, data.clone()).unwrap();

    let once: Vec<u8> = canvas.as_bytes().iter().map(|&v| black_white(v)).collect();
    let twice: Vec<u8> = once.iter().map(|&v| black_white(v)).collect();
    assert_eq!(once, data);
    assert_eq!(twice, once);
}

// ==================== Dithering Tests ====================

#[test]
fn test_dither_threshold_inclusive() {
    let mut canvas = canvas_filled(1, 1, 128);
    dither(&mut canvas);
    assert_eq!(canvas.get(0, 0), 255);

    let mut canvas = canvas_filled(1, 1, 127);
    dither(&mut canvas);
    assert_eq!(canvas.get(0, 0), 0);
}

#[test]
fn test_dither_near_midpoint_preserves_tone() {
    let mut canvas = canvas_filled(64, 64, 127);
    dither(&mut canvas);

    let bytes = canvas.as_bytes();
    assert!(bytes.iter().all(|&v| v == 0 || v == 255));
    let white = bytes.iter().filter(|&&v| v == 255).count() as f32 / bytes.len() as f32;
    assert!(
        (0.35..0.65).contains(&white),
        "white fraction {} should be close to one half",
        white
    );
}

#[test]
fn test_dither_row_major_dependency() {
    // First pixel rounds up to white and pushes the second below threshold.
    let mut canvas = Canvas::from_vec(2, 1, vec![128, 128]).unwrap();
    dither(&mut canvas);
    // error -127, east share -55: 128 - 55 = 73 -> black
    assert_eq!(canvas.as_bytes(), &[255, 0]);
}

// ==================== Composer Tests ====================

#[test]
fn test_mid_grey_dithered_end_to_end() {
    let pixels = uniform_source(640, 400, 128);
    let source = SourceFrame::new(&pixels, 640, 400).unwrap();
    let mut composer = FrameComposer::panel(DisplayMode::default()).unwrap();

    let frame = composer.compose(&source);
    assert_eq!(frame.len(), 600 * 800);
    assert!(frame.iter().all(|&v| v == 0 || v == 255));
}

#[test]
fn test_composer_reuses_canvas_between_frames() {
    let mut composer = FrameComposer::new(6, 6, DisplayMode::Greyscale).unwrap();

    let black = uniform_source(6, 6, 0);
    let frame = composer.compose(&SourceFrame::new(&black, 6, 6).unwrap()).to_vec();
    assert!(frame.iter().all(|&v| v == 255));

    // A smaller frame must not leave the previous one behind.
    let small = uniform_source(2, 2, 0);
    let frame = composer.compose(&SourceFrame::new(&small, 2, 2).unwrap()).to_vec();
    assert_eq!(frame.iter().filter(|&&v| v == 255).count(), 4);

    let canvas = composer.canvas();
    assert_eq!((canvas.width(), canvas.height()), (6, 6));
    assert_eq!(canvas.as_bytes(), frame.as_slice());
    assert_eq!(canvas.get(2, 2), 255);
    assert_eq!(canvas.get(1, 1), 0);
}

#[test]
fn test_black_white_composer_skips_dithering() {
    let pixels = uniform_source(4, 4, 128);
    let source = SourceFrame::new(&pixels, 4, 4).unwrap();
    let mut composer = FrameComposer::new(4, 4, DisplayMode::BlackWhite).unwrap();

    // luminance 128 > 60 -> 255, inverted -> 0 everywhere, no diffusion pattern
    assert!(composer.compose(&source).iter().all(|&v| v == 0));
}
