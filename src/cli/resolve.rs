//! Merge command-line flags with config file values.
//!
//! Precedence is flag, then config file, then built-in default.

use super::args::Args;
use super::enums::CorrectionLevel;
use crate::blockart::{RenderConfig, DEFAULT_DARK_GLYPH, DEFAULT_LIGHT_GLYPH};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::source::GenerateOptions;

/// Build the render configuration.
pub fn render_config(args: &Args, config: &Config) -> RenderConfig {
    let section = &config.render;
    RenderConfig {
        light_glyph: args
            .white
            .clone()
            .or_else(|| section.white.clone())
            .unwrap_or_else(|| DEFAULT_LIGHT_GLYPH.to_string()),
        dark_glyph: args
            .black
            .clone()
            .or_else(|| section.black.clone())
            .unwrap_or_else(|| DEFAULT_DARK_GLYPH.to_string()),
        invert: args.invert || section.invert,
    }
}

/// Build and validate the generation options.
pub fn generate_options(args: &Args, config: &Config) -> Result<GenerateOptions> {
    let section = &config.generate;
    let defaults = GenerateOptions::default();

    let correction = match (args.correction, section.correction.as_deref()) {
        (Some(level), _) => level,
        (None, Some(name)) => CorrectionLevel::parse(name).ok_or_else(|| {
            Error::Argument(format!(
                "unknown error correction level '{}' in config (expected L, M, Q or H)",
                name
            ))
        })?,
        (None, None) => CorrectionLevel::default(),
    };

    let options = GenerateOptions {
        version: args.version.or(section.version).unwrap_or(defaults.version),
        border: args.border.or(section.border).unwrap_or(defaults.border),
        correction: correction.into(),
        upscale: args.upscale.or(section.upscale).unwrap_or(defaults.upscale),
    };
    options.validate()?;
    Ok(options)
}
