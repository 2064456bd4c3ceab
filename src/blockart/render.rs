//! Module to glyph mapping and line output.

use std::io::{self, Write};

use super::pixel_grid::{is_dark, PixelGrid, Rows};

/// Default glyph for light modules: two full blocks, roughly square on a
/// typical terminal cell.
pub const DEFAULT_LIGHT_GLYPH: &str = "██";

/// Default glyph for dark modules: two spaces.
pub const DEFAULT_DARK_GLYPH: &str = "  ";

/// How modules are turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emitted for light (background) modules
    pub light_glyph: String,
    /// Emitted for dark modules
    pub dark_glyph: String,
    /// Invert intensities before thresholding (for light terminals)
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            light_glyph: DEFAULT_LIGHT_GLYPH.to_string(),
            dark_glyph: DEFAULT_DARK_GLYPH.to_string(),
            invert: false,
        }
    }
}

impl RenderConfig {
    /// Glyph for a single module intensity.
    pub fn glyph(&self, value: u8) -> &str {
        if is_dark(apply_polarity(value, self.invert)) {
            &self.dark_glyph
        } else {
            &self.light_glyph
        }
    }
}

/// Invert an intensity when `invert` is set.
#[inline]
pub fn apply_polarity(value: u8, invert: bool) -> u8 {
    if invert {
        255 - value
    } else {
        value
    }
}

/// Lazy iterator over rendered rows.
///
/// Each item is one module row with glyphs concatenated and no line
/// terminator. Single pass; create a new one with [`render`] to start over.
pub struct Lines<'a> {
    rows: Rows<'a>,
    config: &'a RenderConfig,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let row = self.rows.next()?;
        let glyph_len = self.config.light_glyph.len().max(self.config.dark_glyph.len());
        let mut line = String::with_capacity(row.len() * glyph_len);
        for &value in row {
            line.push_str(self.config.glyph(value));
        }
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

/// Render a module grid as lines of glyphs.
///
/// # Example
/// ```
/// use qrtext::blockart::{render, PixelGrid, RenderConfig};
///
/// let grid = PixelGrid::new(vec![0, 255, 255, 0], 2, 2).unwrap();
/// let config = RenderConfig {
///     light_glyph: "#".to_string(),
///     dark_glyph: ".".to_string(),
///     invert: false,
/// };
/// let lines: Vec<String> = render(&grid, &config).collect();
/// assert_eq!(lines, vec![".#", "#."]);
/// ```
pub fn render<'a>(grid: &'a PixelGrid, config: &'a RenderConfig) -> Lines<'a> {
    Lines {
        rows: grid.rows(),
        config,
    }
}

/// Write every line followed by `\n`, flushing once at the end.
///
/// # Returns
/// The number of lines written.
pub fn write_lines<W, I>(lines: I, out: &mut W) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = String>,
{
    let mut count = 0;
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(invert: bool) -> RenderConfig {
        RenderConfig {
            light_glyph: "L".to_string(),
            dark_glyph: "D".to_string(),
            invert,
        }
    }

    #[test]
    fn test_default_glyphs() {
        let config = RenderConfig::default();
        assert_eq!(config.glyph(255), "██");
        assert_eq!(config.glyph(0), "  ");
        assert!(!config.invert);
    }

    #[test]
    fn test_glyph_threshold() {
        let config = config(false);
        assert_eq!(config.glyph(127), "D");
        assert_eq!(config.glyph(128), "L");
    }

    #[test]
    fn test_invert_swaps_glyphs() {
        let config = config(true);
        assert_eq!(config.glyph(0), "L");
        assert_eq!(config.glyph(255), "D");
        // 255 - 128 = 127 is dark once inverted
        assert_eq!(config.glyph(128), "D");
        assert_eq!(config.glyph(127), "L");
    }

    #[test]
    fn test_double_inversion_restores_classification() {
        for v in 0..=255u8 {
            let twice = apply_polarity(apply_polarity(v, true), true);
            assert_eq!(is_dark(twice), is_dark(v), "value {}", v);
        }
    }

    #[test]
    fn test_render_rows() {
        let grid = PixelGrid::new(vec![0, 255, 0, 255, 255, 255], 3, 2).unwrap();
        let lines: Vec<String> = render(&grid, &config(false)).collect();
        assert_eq!(lines, vec!["DLD", "LLL"]);
    }

    #[test]
    fn test_render_multi_char_glyphs() {
        let grid = PixelGrid::new(vec![0, 255], 2, 1).unwrap();
        let lines: Vec<String> = render(&grid, &RenderConfig::default()).collect();
        assert_eq!(lines, vec!["  ██"]);
    }

    #[test]
    fn test_render_is_single_pass() {
        let grid = PixelGrid::new(vec![0, 255], 1, 2).unwrap();
        let config = config(false);
        let mut lines = render(&grid, &config);
        assert_eq!(lines.size_hint(), (2, Some(2)));
        assert_eq!(lines.next().as_deref(), Some("D"));
        assert_eq!(lines.next().as_deref(), Some("L"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_zero_width_grid_keeps_row_count() {
        let grid = PixelGrid::new(Vec::new(), 0, 3).unwrap();
        let config = config(false);
        let lines = render(&grid, &config);
        assert_eq!(lines.size_hint(), (3, Some(3)));

        let mut out = Vec::new();
        let count = write_lines(lines, &mut out).unwrap();
        assert_eq!(count, grid.height() as usize);
        assert_eq!(String::from_utf8(out).unwrap(), "\n\n\n");
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        let count = write_lines(vec!["ab".to_string(), "cd".to_string()], &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "ab\ncd\n");
    }
}
