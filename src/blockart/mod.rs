//! Block-art renderer for converting QR rasters to text.
//!
//! This module provides the complete pipeline from a decoded QR image to
//! lines of glyphs:
//!
//! 1. **Pixel grid** - First-channel intensities of the source image
//! 2. **Calibration** - Quiet-zone offset and module size from the diagonal
//! 3. **Downsampling** - Nearest-neighbour reduction to one pixel per module
//! 4. **Rendering** - Two-glyph mapping of light and dark modules
//!
//! # Thresholding
//!
//! Every stage classifies a pixel the same way: intensities below
//! [`DARK_THRESHOLD`] are dark modules, everything else is light.

mod calibrate;
mod downsample;
mod pixel_grid;
mod render;

pub use calibrate::{calibrate, Calibration, CalibrationError};
pub use downsample::downsample;
pub use pixel_grid::{is_dark, PixelGrid, Rows, DARK_THRESHOLD};
pub use render::{
    apply_polarity, render, write_lines, Lines, RenderConfig, DEFAULT_DARK_GLYPH,
    DEFAULT_LIGHT_GLYPH,
};
