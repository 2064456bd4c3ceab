//! qrtext library crate.
//!
//! Converts QR code rasters into text block art. The pipeline modules are
//! exposed for the binary and for integration testing.

pub mod blockart;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;

pub use error::{Error, Result};
