//! Palette-level reports built on the core color, contrast and WCAG modules.
//!
//! These are the request/response shapes a presentation layer serializes:
//! a full analysis (colors, matrix and criteria) and a capped list of
//! accessible pairs.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::info;

use crate::color::{Color, parse_palette};
use crate::contrast::build_contrast_matrix;
use crate::error::AnalysisError;
use crate::wcag::{ContrastPair, Level, THRESHOLDS, accessible_pairs};

/// Smallest palette that forms a pair.
pub const MIN_PALETTE_SIZE: usize = 2;

/// Default number of pairs returned when the caller gives no limit.
pub const DEFAULT_PAIRS_LIMIT: usize = 50;

/// Hard ceiling on returned pairs regardless of the requested limit.
pub const MAX_PAIRS_LIMIT: usize = 200;

/// Options for [`analyze_palette`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Compute the matrix diagonal instead of fixing it at 1.
    pub include_self_pairs: bool,
}

/// The WCAG threshold table, serialized as a `level -> minimum` map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Criteria;

impl Serialize for Criteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(THRESHOLDS.len()))?;
        for threshold in &THRESHOLDS {
            map.serialize_entry(threshold.level.as_str(), &threshold.min_ratio)?;
        }
        map.end()
    }
}

/// Result of [`analyze_palette`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteAnalysis {
    pub colors: Vec<Color>,
    pub matrix: Vec<Vec<f64>>,
    pub criteria: Criteria,
}

/// Input to [`pairs_report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairsRequest {
    pub palette: Vec<String>,
    pub threshold: Level,
    pub limit: usize,
}

impl Default for PairsRequest {
    fn default() -> Self {
        Self {
            palette: Vec::new(),
            threshold: Level::default(),
            limit: DEFAULT_PAIRS_LIMIT,
        }
    }
}

impl PairsRequest {
    pub fn new(palette: Vec<String>, threshold: Level) -> Self {
        Self {
            palette,
            threshold,
            ..Default::default()
        }
    }

    /// Number of pairs that will actually be returned at most.
    pub fn effective_limit(&self) -> usize {
        self.limit.min(MAX_PAIRS_LIMIT)
    }
}

/// Result of [`pairs_report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairsReport {
    pub threshold: Level,
    /// Matching pairs before the limit was applied.
    pub total: usize,
    pub pairs: Vec<ContrastPair>,
}

fn check_palette_size(len: usize) -> Result<(), AnalysisError> {
    if len < MIN_PALETTE_SIZE {
        return Err(AnalysisError::TooFewColors { count: len });
    }
    Ok(())
}

/// Parse a palette and compute its contrast matrix and criteria.
pub fn analyze_palette<S: AsRef<str>>(
    palette: &[S],
    options: AnalyzeOptions,
) -> Result<PaletteAnalysis, AnalysisError> {
    check_palette_size(palette.len())?;

    let colors = parse_palette(palette)?;
    let matrix = build_contrast_matrix(&colors, options.include_self_pairs);
    info!(colors = colors.len(), "analyzed palette");

    Ok(PaletteAnalysis {
        colors,
        matrix,
        criteria: Criteria,
    })
}

/// Accessible pairs for a palette, truncated to the effective limit.
///
/// The list is sorted highest contrast first before truncation, so a small
/// limit keeps the strongest pairs.
///
/// # Example
///
/// ```
/// use contrastly::analysis::{PairsRequest, pairs_report};
/// use contrastly::wcag::Level;
///
/// let request = PairsRequest {
///     limit: 1,
///     ..PairsRequest::new(vec!["#000".into(), "#fff".into(), "#777".into()], Level::AaNormal)
/// };
/// let report = pairs_report(&request).unwrap();
///
/// assert_eq!(report.pairs.len(), 1);
/// assert_eq!(report.pairs[0].ratio, 21.0);
/// assert!(report.total > 1);
/// ```
pub fn pairs_report(request: &PairsRequest) -> Result<PairsReport, AnalysisError> {
    check_palette_size(request.palette.len())?;

    let mut pairs = accessible_pairs(&request.palette, request.threshold)?;
    let total = pairs.len();
    pairs.truncate(request.effective_limit());
    info!(
        threshold = %request.threshold,
        total,
        returned = pairs.len(),
        "accessible pairs report"
    );

    Ok(PairsReport {
        threshold: request.threshold,
        total,
        pairs,
    })
}
