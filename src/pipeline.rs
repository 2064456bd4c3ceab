//! Single-pass conversion: source -> calibrate -> downsample -> render.
//!
//! The entry point takes the input, the options and the output sink as
//! explicit parameters, so nothing here touches process-level I/O.

use std::io::Write;

use crate::blockart::{self, Calibration, PixelGrid, RenderConfig};
use crate::error::Result;
use crate::source::{self, GenerateOptions, Input};

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Offset and module size recovered from the source image
    pub calibration: Calibration,
    /// Module grid width
    pub columns: u32,
    /// Module grid height, also the number of lines written
    pub rows: u32,
}

/// Produce the full-resolution pixel grid for an input.
pub fn load(input: &Input, options: &GenerateOptions) -> Result<PixelGrid> {
    match input {
        Input::Image(path) => source::load_from_file(path),
        Input::Text(text) => source::generate_from_text(text, options),
    }
}

/// Recover the module grid from a full-resolution raster.
pub fn to_modules(grid: &PixelGrid) -> Result<(Calibration, PixelGrid)> {
    let calibration = blockart::calibrate(grid)?;
    let modules = blockart::downsample(grid, calibration.scale)?;
    Ok((calibration, modules))
}

/// A module grid ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub calibration: Calibration,
    pub modules: PixelGrid,
}

/// Load the input and recover its module grid, without writing anything.
pub fn prepare(input: &Input, options: &GenerateOptions) -> Result<Prepared> {
    let grid = load(input, options)?;
    let (calibration, modules) = to_modules(&grid)?;
    log::info!(
        "Recovered {}x{} modules (offset {}px, {}px per module)",
        modules.width(),
        modules.height(),
        calibration.offset,
        calibration.scale
    );
    Ok(Prepared {
        calibration,
        modules,
    })
}

impl Prepared {
    /// Render the modules and write one line per row to `out`.
    pub fn write<W: Write + ?Sized>(&self, config: &RenderConfig, out: &mut W) -> Result<Outcome> {
        let rows = blockart::write_lines(blockart::render(&self.modules, config), out)?;
        log::debug!("Wrote {} lines", rows);
        Ok(Outcome {
            calibration: self.calibration,
            columns: self.modules.width(),
            rows: self.modules.height(),
        })
    }
}

/// Convert `input` to block art and write it to `out`.
///
/// Nothing is written unless calibration succeeds.
pub fn run<W: Write + ?Sized>(
    input: &Input,
    options: &GenerateOptions,
    config: &RenderConfig,
    out: &mut W,
) -> Result<Outcome> {
    prepare(input, options)?.write(config, out)
}
