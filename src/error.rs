//! Crate-wide error type.

use std::path::PathBuf;

use crate::blockart::CalibrationError;
use crate::config::ConfigError;

/// Errors that can end a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input the argument parser cannot catch (bad config values, no text).
    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode QR code: {0}")]
    Encode(qrcode::types::QrError),

    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
