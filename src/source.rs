//! Image sources: decoded files and freshly generated QR codes.
//!
//! Both paths end in a [`PixelGrid`] so the rest of the pipeline never cares
//! where the pixels came from.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::blockart::PixelGrid;
use crate::error::{Error, Result};

/// Smallest QR version.
pub const MIN_VERSION: i16 = 1;
/// Largest QR version.
pub const MAX_VERSION: i16 = 40;

/// Largest bitmap, in pixels, that text generation will allocate.
pub const MAX_GENERATED_PIXELS: u64 = 1 << 28;

/// Prompt shown when no input was given on the command line.
pub const PROMPT: &str = "Enter data to encode: ";

/// What a run converts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// An existing image file
    Image(PathBuf),
    /// Text to encode as a new QR code
    Text(String),
}

impl Input {
    /// Decide between an image path and literal text.
    ///
    /// A value naming an existing regular file is an image; any other value
    /// is text to encode. Without a value, `prompt` is asked for the text.
    pub fn resolve<F>(arg: Option<String>, prompt: F) -> Result<Self>
    where
        F: FnOnce() -> io::Result<Option<String>>,
    {
        match arg {
            Some(value) if Path::new(&value).is_file() => {
                log::debug!("Reading QR image from '{}'", value);
                Ok(Input::Image(PathBuf::from(value)))
            }
            Some(value) => {
                log::debug!("Input is not a file, encoding it as text");
                Ok(Input::Text(value))
            }
            None => match prompt()? {
                Some(text) => Ok(Input::Text(text)),
                None => Err(Error::Argument("no input text provided".to_string())),
            },
        }
    }
}

/// Ask for one line of text.
///
/// Writes [`PROMPT`] to `writer`, then reads a line from `reader` with the
/// trailing newline removed. Returns `None` at end of input.
pub fn prompt_line<R, W>(reader: &mut R, writer: &mut W) -> io::Result<Option<String>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writer.write_all(PROMPT.as_bytes())?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Parameters for generating a QR code from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Requested symbol version (1-40); larger versions are tried if the text
    /// does not fit
    pub version: i16,
    /// Quiet zone width in modules
    pub border: u32,
    /// Error correction level
    pub correction: EcLevel,
    /// Pixels per module in the generated bitmap
    pub upscale: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            version: 1,
            border: 1,
            correction: EcLevel::M,
            upscale: 1,
        }
    }
}

impl GenerateOptions {
    /// Check ranges that the command line enforces but config files do not.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_VERSION..=MAX_VERSION).contains(&self.version) {
            return Err(Error::Argument(format!(
                "QR version must be between {} and {}, got {}",
                MIN_VERSION, MAX_VERSION, self.version
            )));
        }
        if self.upscale == 0 {
            return Err(Error::Argument("upscale must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Decode an image file into a pixel grid.
pub fn load_from_file(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => Error::Read {
            path: path.to_path_buf(),
            source,
        },
        source => Error::Image {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let grid = PixelGrid::from_image(&image);
    log::info!(
        "Loaded {}x{} image from '{}'",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Encode text at the smallest version, starting from `version`, that fits.
pub fn encode(text: &str, version: i16, correction: EcLevel) -> Result<QrCode> {
    for v in version.max(MIN_VERSION)..=MAX_VERSION {
        match QrCode::with_version(text.as_bytes(), Version::Normal(v), correction) {
            Ok(code) => {
                if v != version {
                    log::info!("Text does not fit version {}, using version {}", version, v);
                }
                return Ok(code);
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(Error::Encode(e)),
        }
    }
    Err(Error::Encode(QrError::DataTooLong))
}

/// Side length in pixels of a generated bitmap, checked against
/// [`MAX_GENERATED_PIXELS`].
fn generated_side(modules: u32, border: u32, upscale: u32) -> Result<u32> {
    let side = u64::from(border)
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(u64::from(modules)))
        .and_then(|side| side.checked_mul(u64::from(upscale.max(1))));
    match side {
        Some(side) if side.checked_mul(side).is_some_and(|n| n <= MAX_GENERATED_PIXELS) => {
            u32::try_from(side).map_err(|_| too_large(modules, border, upscale))
        }
        _ => Err(too_large(modules, border, upscale)),
    }
}

fn too_large(modules: u32, border: u32, upscale: u32) -> Error {
    Error::Argument(format!(
        "generated image too large: {} modules with border {} at upscale {} exceeds {} pixels",
        modules, border, upscale, MAX_GENERATED_PIXELS
    ))
}

/// Render a QR code as black modules on a white quiet zone.
///
/// One pixel per module, `border` light modules on every side. Fails with
/// [`Error::Argument`] if the bitmap would exceed [`MAX_GENERATED_PIXELS`].
pub fn code_to_grid(code: &QrCode, border: u32) -> Result<PixelGrid> {
    let modules = code.width() as u32;
    let size = generated_side(modules, border, 1)?;
    let colors = code.to_colors();
    let inside = border..border + modules;

    Ok(PixelGrid::from_fn(size, size, |x, y| {
        if !inside.contains(&x) || !inside.contains(&y) {
            return 255;
        }
        let idx = ((y - border) as usize) * (modules as usize) + (x - border) as usize;
        match colors[idx] {
            Color::Dark => 0,
            Color::Light => 255,
        }
    }))
}

/// Generate a QR code bitmap for `text`.
pub fn generate_from_text(text: &str, options: &GenerateOptions) -> Result<PixelGrid> {
    options.validate()?;
    let code = encode(text, options.version, options.correction)?;
    let modules = code.width() as u32;
    generated_side(modules, options.border, options.upscale)?;

    let grid = code_to_grid(&code, options.border)?
        .upscale(options.upscale)
        .ok_or_else(|| too_large(modules, options.border, options.upscale))?;
    log::info!(
        "Generated {}x{} module QR code ({}x{} pixels)",
        modules,
        modules,
        grid.width(),
        grid.height()
    );
    Ok(grid)
}
