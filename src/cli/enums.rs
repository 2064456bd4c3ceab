//! CLI enum types.

use clap::ValueEnum;
use qrcode::EcLevel;

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CorrectionLevel {
    /// ~7% of codewords can be restored
    #[value(name = "L")]
    Low,
    /// ~15% of codewords can be restored
    #[default]
    #[value(name = "M")]
    Medium,
    /// ~25% of codewords can be restored
    #[value(name = "Q")]
    Quartile,
    /// ~30% of codewords can be restored
    #[value(name = "H")]
    High,
}

impl CorrectionLevel {
    /// Parse a level name as written in a config file (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}

impl From<CorrectionLevel> for EcLevel {
    fn from(c: CorrectionLevel) -> Self {
        match c {
            CorrectionLevel::Low => EcLevel::L,
            CorrectionLevel::Medium => EcLevel::M,
            CorrectionLevel::Quartile => EcLevel::Q,
            CorrectionLevel::High => EcLevel::H,
        }
    }
}
