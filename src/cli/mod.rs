//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, and the adapter that
//! turns flags plus config file values into pipeline configuration.

mod args;
mod enums;
mod resolve;

pub use args::Args;
pub use enums::CorrectionLevel;
pub use resolve::{generate_options, render_config};
