//! Nearest-neighbour reduction to one sample per module.

use super::calibrate::CalibrationError;
use super::pixel_grid::PixelGrid;

/// Downsample a pixel grid so each cell is one QR module.
///
/// Output cell `(x, y)` takes the source pixel `(x * scale, y * scale)`, the
/// top-left corner of the module's block. Blocks are assumed uniform (no
/// anti-aliasing), so no averaging is done. Trailing pixels that do not fill
/// a whole block are dropped.
///
/// # Arguments
/// * `grid` - Full-resolution intensities
/// * `scale` - Module size in pixels, as found by [`calibrate`](super::calibrate)
///
/// # Returns
/// A grid of `floor(width / scale) x floor(height / scale)` cells, or
/// [`CalibrationError::ZeroScale`] when `scale` is 0.
pub fn downsample(grid: &PixelGrid, scale: u32) -> Result<PixelGrid, CalibrationError> {
    if scale == 0 {
        return Err(CalibrationError::ZeroScale);
    }
    if scale == 1 {
        return Ok(grid.clone());
    }

    let src_width = grid.width() as usize;
    let data = grid.data();
    let step = scale as usize;

    Ok(PixelGrid::from_fn(
        grid.width() / scale,
        grid.height() / scale,
        |x, y| data[(y as usize) * step * src_width + (x as usize) * step],
    ))
}
