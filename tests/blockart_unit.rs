//! Unit tests for the block-art core.
//!
//! These tests verify grid recovery on synthetic and generated rasters:
//! - Calibration across quiet-zone widths and module sizes
//! - Downsampling dimensions
//! - Polarity and threshold behaviour of the renderer

use qrcode::{Color, EcLevel};
use qrtext::blockart::*;
use qrtext::source::{code_to_grid, encode};

/// Synthetic finder corner: a 7-module finder ring inside a `quiet`-module
/// quiet zone, every module `scale` pixels wide.
fn finder_corner(quiet: u32, scale: u32) -> PixelGrid {
    let modules = quiet + 7 + 2;
    PixelGrid::from_fn(modules, modules, |x, y| {
        let (mx, my) = (x as i64 - quiet as i64, y as i64 - quiet as i64);
        let in_finder = (0..7).contains(&mx) && (0..7).contains(&my);
        let ring = mx == 0 || my == 0 || mx == 6 || my == 6;
        let core = (2..5).contains(&mx) && (2..5).contains(&my);
        if in_finder && (ring || core) {
            0
        } else {
            255
        }
    })
    .upscale(scale)
    .unwrap()
}

// ==================== Calibration Tests ====================

#[test]
fn test_calibrate_offset_and_scale_grid() {
    for quiet in 0..=4 {
        for scale in 1..=6 {
            let grid = finder_corner(quiet, scale);
            let cal = calibrate(&grid).unwrap();
            assert_eq!(cal.offset, quiet * scale, "quiet={} scale={}", quiet, scale);
            assert_eq!(cal.scale, scale, "quiet={} scale={}", quiet, scale);
            assert!(cal.is_aligned());
        }
    }
}

#[test]
fn test_calibrate_generated_codes() {
    let code = encode("HELLO", 1, EcLevel::M).unwrap();
    for border in [0, 1, 4] {
        for scale in [1, 3, 10] {
            let grid = code_to_grid(&code, border)
                .unwrap()
                .upscale(scale)
                .unwrap();
            let cal = calibrate(&grid).unwrap();
            assert_eq!(
                cal,
                Calibration {
                    offset: border * scale,
                    scale
                }
            );
        }
    }
}

#[test]
fn test_calibrate_blank_image_fails() {
    let grid = PixelGrid::from_fn(100, 100, |_, _| 255);
    assert!(matches!(
        calibrate(&grid),
        Err(CalibrationError::NoDarkPixel { .. })
    ));
}

#[test]
fn test_calibrate_near_white_is_light() {
    // Anti-aliasing grey above the threshold still counts as quiet zone
    let grid = PixelGrid::from_fn(10, 10, |x, y| match (x, y) {
        (0, 0) | (1, 1) => 200,
        (2, 2) | (3, 3) => 30,
        _ => 240,
    });
    assert_eq!(calibrate(&grid), Ok(Calibration { offset: 2, scale: 2 }));
}

#[test]
fn test_calibrate_misaligned_still_succeeds() {
    // Quiet zone of 3px with 2px modules
    let grid = PixelGrid::from_fn(12, 12, |x, y| {
        if (3..5).contains(&x) && (3..5).contains(&y) {
            0
        } else {
            255
        }
    });
    let cal = calibrate(&grid).unwrap();
    assert_eq!((cal.offset, cal.scale), (3, 2));
    assert!(!cal.is_aligned());
}

// ==================== Downsampling Tests ====================

#[test]
fn test_downsample_recovers_modules() {
    let code = encode("HELLO", 1, EcLevel::M).unwrap();
    let modules = code_to_grid(&code, 2).unwrap();
    for scale in 1..=8 {
        let big = modules.upscale(scale).unwrap();
        assert_eq!(downsample(&big, scale).unwrap(), modules, "scale {}", scale);
    }
}

#[test]
fn test_downsample_dimensions() {
    let grid = PixelGrid::from_fn(101, 57, |x, y| ((x * y) % 256) as u8);
    for scale in [1, 2, 3, 10, 57, 100, 101, 200] {
        let small = downsample(&grid, scale).unwrap();
        assert_eq!(small.width(), 101 / scale);
        assert_eq!(small.height(), 57 / scale);
        assert_eq!(small.data().len(), ((101 / scale) * (57 / scale)) as usize);
    }
}

// ==================== Rendering Tests ====================

#[test]
fn test_render_matches_encoded_bitmap() {
    let code = encode("HELLO", 1, EcLevel::M).unwrap();
    let width = code.width();
    let colors = code.to_colors();
    let config = RenderConfig {
        light_glyph: ".".to_string(),
        dark_glyph: "#".to_string(),
        invert: false,
    };

    let grid = code_to_grid(&code, 0).unwrap();
    let lines: Vec<String> = render(&grid, &config).collect();
    assert_eq!(lines.len(), width);

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let expected = match colors[y * width + x] {
                Color::Dark => '#',
                Color::Light => '.',
            };
            assert_eq!(ch, expected, "module ({}, {})", x, y);
        }
    }
}

#[test]
fn test_render_invert_swaps_every_cell() {
    let code = encode("HELLO", 1, EcLevel::M).unwrap();
    let grid = code_to_grid(&code, 1).unwrap();
    let normal = RenderConfig {
        light_glyph: "L".to_string(),
        dark_glyph: "D".to_string(),
        invert: false,
    };
    let inverted = RenderConfig {
        invert: true,
        ..normal.clone()
    };

    for (a, b) in render(&grid, &normal).zip(render(&grid, &inverted)) {
        let swapped: String = a
            .chars()
            .map(|c| if c == 'L' { 'D' } else { 'L' })
            .collect();
        assert_eq!(swapped, b);
    }
}

#[test]
fn test_polarity_round_trip_all_values() {
    for v in 0..=255u8 {
        assert_eq!(apply_polarity(apply_polarity(v, true), true), v);
        assert_eq!(apply_polarity(v, false), v);
        assert_eq!(is_dark(apply_polarity(v, true)), v > 127);
    }
}

#[test]
fn test_threshold_constant() {
    assert_eq!(DARK_THRESHOLD, 128);
}
