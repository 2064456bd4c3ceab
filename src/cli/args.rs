//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::CorrectionLevel;

/// Render a QR code as text block art
#[derive(Parser, Debug)]
#[command(name = "qrtext")]
#[command(about = "Convert a QR code image, or text to encode, into block art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render an existing QR image
    qrtext -i code.png

    # Encode text, light-terminal friendly
    qrtext \"https://example.com\" --invert

    # Custom glyphs into a file
    qrtext -i HELLO -w '##' -b '  ' -o hello.txt")]
pub struct Args {
    /// Text to encode (alternative to --input)
    #[arg(conflicts_with = "input")]
    pub text: Option<String>,

    /// Input image file, or text to encode if no such file exists (prompts if omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Invert colors before thresholding
    #[arg(long)]
    pub invert: bool,

    /// Characters used for light modules (default "██")
    #[arg(short, long)]
    pub white: Option<String>,

    /// Characters used for dark modules (default "  ")
    #[arg(short, long)]
    pub black: Option<String>,

    /// Generated QR code version, 1-40 (default 1)
    #[arg(short = 'v', long, value_parser = clap::value_parser!(i16).range(1..=40))]
    pub version: Option<i16>,

    /// Generated QR code border in modules (default 1)
    #[arg(long)]
    pub border: Option<u32>,

    /// Error correction level (default M)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub correction: Option<CorrectionLevel>,

    /// Pixels per module of the generated QR code (default 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub upscale: Option<u32>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The input value, from `--input` or the positional text.
    pub fn input_arg(&self) -> Option<String> {
        self.input.clone().or_else(|| self.text.clone())
    }
}
