//! Module grid recovery from the image diagonal.
//!
//! The top-left corner of a QR symbol is the outer ring of a finder pattern:
//! a dark square at least one module wide, preceded by the light quiet zone.
//! Walking the main diagonal therefore measures both the quiet-zone width and
//! the module size in pixels without decoding anything.

use super::pixel_grid::{is_dark, PixelGrid};

/// Where the first module starts and how many pixels wide each module is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// Diagonal index of the first dark pixel (inner edge of the quiet zone)
    pub offset: u32,
    /// Module size in pixels, always at least 1
    pub scale: u32,
}

impl Calibration {
    /// Whether the quiet zone is a whole number of modules.
    ///
    /// Downsampling samples from the image origin, so a misaligned grid
    /// lands between module corners.
    pub fn is_aligned(&self) -> bool {
        self.offset % self.scale == 0
    }
}

/// Errors that can occur while recovering the module grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalibrationError {
    #[error("No dark pixel on the diagonal of the {width}x{height} image. Is it a QR code?")]
    NoDarkPixel { width: u32, height: u32 },

    #[error(
        "Dark run starting at diagonal pixel {offset} reaches the image edge after {run} pixels"
    )]
    RunOutOfBounds {
        /// Where the dark run started
        offset: u32,
        /// Number of dark pixels seen before running off the grid
        run: u32,
    },

    #[error("Module scale must be at least 1")]
    ZeroScale,
}

/// Recover the quiet-zone offset and module scale of a QR raster.
///
/// Walks `(k, k)` until the first dark pixel to find `offset`, then counts
/// how many consecutive diagonal pixels stay dark to find `scale`. Every
/// diagonal read is bounds-checked, so a blank image or a dark run that never
/// ends is reported instead of read past.
///
/// # Example
/// ```
/// use qrtext::blockart::{calibrate, PixelGrid};
///
/// // 2px light border, then a 3px dark block, then light again
/// let grid = PixelGrid::from_fn(8, 8, |x, y| {
///     if (2..5).contains(&x) && (2..5).contains(&y) { 0 } else { 255 }
/// });
/// let cal = calibrate(&grid).unwrap();
/// assert_eq!((cal.offset, cal.scale), (2, 3));
/// ```
pub fn calibrate(grid: &PixelGrid) -> Result<Calibration, CalibrationError> {
    let mut offset = 0;
    loop {
        match grid.get(offset, offset) {
            Some(v) if is_dark(v) => break,
            Some(_) => offset += 1,
            None => {
                return Err(CalibrationError::NoDarkPixel {
                    width: grid.width(),
                    height: grid.height(),
                })
            }
        }
    }

    let mut scale = 1;
    loop {
        let k = offset + scale;
        match grid.get(k, k) {
            Some(v) if is_dark(v) => scale += 1,
            Some(_) => break,
            None => return Err(CalibrationError::RunOutOfBounds { offset, run: scale }),
        }
    }

    let calibration = Calibration { offset, scale };
    log::debug!(
        "Calibrated {}x{} grid: offset={} scale={}",
        grid.width(),
        grid.height(),
        offset,
        scale
    );
    if !calibration.is_aligned() {
        log::warn!(
            "Quiet zone of {}px is not a multiple of the {}px module size; output may be shifted",
            offset,
            scale
        );
    }

    Ok(calibration)
}
