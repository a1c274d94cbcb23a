//! Error types for color parsing and palette analysis.

use thiserror::Error;

/// Errors raised by the color parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not a `#RGB` or `#RRGGBB` hex string.
    #[error("invalid color format: {input:?} (expected #RGB or #RRGGBB)")]
    InvalidColorFormat { input: String },
}

impl ColorError {
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }
}

/// Unknown WCAG conformance level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown WCAG level: {name:?} (expected aa_normal, aa_large, aaa_normal, aaa_large or ui_graphic)"
)]
pub struct ParseLevelError {
    pub name: String,
}

/// Errors raised by the palette analysis layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Palettes must hold at least two colors to form a pair.
    #[error("palette must contain at least 2 colors, got {count}")]
    TooFewColors { count: usize },

    #[error(transparent)]
    Color(#[from] ColorError),
}
