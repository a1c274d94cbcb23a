//! WCAG conformance levels and accessible pair selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::debug;

use crate::color::parse_palette;
use crate::contrast::contrast_ratio;
use crate::error::{ColorError, ParseLevelError};

/// A WCAG 2.x contrast conformance level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// AA, normal text (4.5:1)
    #[default]
    AaNormal,
    /// AA, large text (3:1)
    AaLarge,
    /// AAA, normal text (7:1)
    AaaNormal,
    /// AAA, large text (4.5:1)
    AaaLarge,
    /// Non-text UI components and graphics (3:1)
    UiGraphic,
}

/// Minimum contrast ratio required by a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub level: Level,
    pub min_ratio: f64,
}

/// The WCAG threshold table, in canonical order.
pub const THRESHOLDS: [Threshold; 5] = [
    Threshold {
        level: Level::AaNormal,
        min_ratio: 4.5,
    },
    Threshold {
        level: Level::AaLarge,
        min_ratio: 3.0,
    },
    Threshold {
        level: Level::AaaNormal,
        min_ratio: 7.0,
    },
    Threshold {
        level: Level::AaaLarge,
        min_ratio: 4.5,
    },
    Threshold {
        level: Level::UiGraphic,
        min_ratio: 3.0,
    },
];

impl Level {
    /// All levels in table order.
    pub const ALL: [Level; 5] = [
        Level::AaNormal,
        Level::AaLarge,
        Level::AaaNormal,
        Level::AaaLarge,
        Level::UiGraphic,
    ];

    /// Minimum ratio this level requires.
    pub fn min_ratio(self) -> f64 {
        THRESHOLDS
            .iter()
            .find(|t| t.level == self)
            .map(|t| t.min_ratio)
            .unwrap_or(f64::INFINITY)
    }

    /// The snake_case name used on the wire and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::AaNormal => "aa_normal",
            Level::AaLarge => "aa_large",
            Level::AaaNormal => "aaa_normal",
            Level::AaaLarge => "aaa_large",
            Level::UiGraphic => "ui_graphic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Level::AaNormal => "AA normal text",
            Level::AaLarge => "AA large text",
            Level::AaaNormal => "AAA normal text",
            Level::AaaLarge => "AAA large text",
            Level::UiGraphic => "UI components and graphics",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError {
                name: s.to_string(),
            })
    }
}

/// Every level whose minimum is met by `ratio`, in table order.
///
/// # Example
///
/// ```
/// use contrastly::wcag::{Level, passes};
///
/// assert_eq!(passes(7.2).len(), 5);
/// assert_eq!(passes(3.5), vec![Level::AaLarge, Level::UiGraphic]);
/// assert!(passes(2.9).is_empty());
/// ```
pub fn passes(ratio: f64) -> Vec<Level> {
    THRESHOLDS
        .iter()
        .filter(|t| ratio >= t.min_ratio)
        .map(|t| t.level)
        .collect()
}

/// An ordered foreground/background pair and its contrast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastPair {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub passes_levels: Vec<Level>,
}

impl ContrastPair {
    pub fn passes(&self, level: Level) -> bool {
        self.passes_levels.contains(&level)
    }
}

/// Find every ordered pair in `palette` that meets `target`.
///
/// Both `(a, b)` and `(b, a)` are reported since foreground and background
/// are not interchangeable for the caller. Results are sorted by ratio,
/// highest first; equal ratios keep enumeration order. Any invalid color
/// fails the whole call.
#[cfg_attr(debug_assertions, instrument(skip(palette), fields(n = palette.len())))]
pub fn accessible_pairs<S: AsRef<str>>(
    palette: &[S],
    target: Level,
) -> Result<Vec<ContrastPair>, ColorError> {
    let colors = parse_palette(palette)?;

    let mut pairs = Vec::new();
    for (i, fg) in colors.iter().enumerate() {
        for (j, bg) in colors.iter().enumerate() {
            if i == j {
                continue;
            }
            let ratio = contrast_ratio(fg, bg);
            let passes_levels = passes(ratio);
            if passes_levels.contains(&target) {
                pairs.push(ContrastPair {
                    foreground: fg.hex().to_string(),
                    background: bg.hex().to_string(),
                    ratio,
                    passes_levels,
                });
            }
        }
    }

    // sort_by is stable
    pairs.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    debug!(matched = pairs.len(), "accessible pairs");
    Ok(pairs)
}
