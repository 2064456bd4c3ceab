//! Intensity grid shared by every stage of the block-art pipeline.

use image::DynamicImage;

/// Intensities below this value are dark modules.
///
/// Uses the 0 = black, 255 = white convention of 8-bit image channels.
pub const DARK_THRESHOLD: u8 = 128;

/// Classify a single intensity as a dark module.
#[inline]
pub fn is_dark(value: u8) -> bool {
    value < DARK_THRESHOLD
}

/// A rectangular grid of 8-bit intensities in row-major order.
///
/// Grids are never mutated once built; each pipeline stage produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// Wrap raw intensities. Returns `None` if `data` does not hold exactly
    /// `width * height` samples.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Take the first colour channel of a decoded image.
    ///
    /// QR renders are black and white, so any channel works as a lightness
    /// proxy. Grayscale and palette images are expanded to RGB first, which
    /// makes the first channel their luma.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = rgb.pixels().map(|p| p.0[0]).collect();
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw intensities, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Intensity at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get((y as usize) * (self.width as usize) + x as usize)
            .copied()
    }

    /// Intensities of row `y`, or `None` outside the grid.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = (y as usize) * width;
        self.data.get(start..start + width)
    }

    /// Iterate over rows of intensities, top to bottom.
    ///
    /// Always yields `height` rows, empty ones for a zero-width grid.
    pub fn rows(&self) -> Rows<'_> {
        Rows { grid: self, next: 0 }
    }

    /// Blow every pixel up into a `factor × factor` block.
    ///
    /// A factor of 0 or 1 returns an identical grid. Returns `None` when the
    /// scaled grid would not be addressable.
    pub fn upscale(&self, factor: u32) -> Option<Self> {
        if factor <= 1 {
            return Some(self.clone());
        }
        let width = self.width.checked_mul(factor)?;
        let height = self.height.checked_mul(factor)?;
        if (width as usize).checked_mul(height as usize)? > isize::MAX as usize {
            return None;
        }
        Some(Self::from_fn(width, height, |x, y| {
            let idx = ((y / factor) as usize) * (self.width as usize) + (x / factor) as usize;
            self.data[idx]
        }))
    }
}

/// Row iterator returned by [`PixelGrid::rows`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    grid: &'a PixelGrid,
    next: u32,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let row = self.grid.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.height.saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}
