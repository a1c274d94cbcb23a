//! WCAG 2.x contrast ratios.

use rayon::prelude::*;

#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::debug;

use crate::color::{Color, round_to};

/// Offset added to both luminances so that black does not divide by zero.
const FLARE: f64 = 0.05;

/// Decimal places kept for contrast ratios.
pub const RATIO_DECIMALS: usize = 2;

/// Lowest possible ratio (identical luminance).
pub const MIN_RATIO: f64 = 1.0;

/// Highest possible ratio (black against white).
pub const MAX_RATIO: f64 = 21.0;

/// Contrast ratio between two luminances, rounded to two decimals.
///
/// Order does not matter: the lighter value is always the numerator.
pub fn contrast_from_luminances(a: f64, b: f64) -> f64 {
    let lighter = a.max(b);
    let darker = a.min(b);
    round_to((lighter + FLARE) / (darker + FLARE), RATIO_DECIMALS)
}

/// Calculate the WCAG contrast ratio between two colors.
///
/// Returns a value in `1.0..=21.0`, rounded to two decimals.
///
/// # Example
///
/// ```
/// use contrastly::color::parse_color;
/// use contrastly::contrast::contrast_ratio;
///
/// let black = parse_color("#000").unwrap();
/// let white = parse_color("#FFFFFF").unwrap();
///
/// assert_eq!(contrast_ratio(&black, &white), 21.0);
/// assert_eq!(contrast_ratio(&white, &black), 21.0);
/// ```
pub fn contrast_ratio(fg: &Color, bg: &Color) -> f64 {
    contrast_from_luminances(fg.luminance(), bg.luminance())
}

/// Build the N×N contrast matrix for a palette.
///
/// Entry `[i][j]` is `contrast_ratio(colors[i], colors[j])`. Unless
/// `include_self` is set, the diagonal is fixed at `1.0` instead of being
/// computed. Rows are computed in parallel; their order matches `colors`.
#[cfg_attr(debug_assertions, instrument(skip(colors), fields(n = colors.len())))]
pub fn build_contrast_matrix(colors: &[Color], include_self: bool) -> Vec<Vec<f64>> {
    let matrix: Vec<Vec<f64>> = colors
        .par_iter()
        .enumerate()
        .map(|(i, c1)| {
            colors
                .iter()
                .enumerate()
                .map(|(j, c2)| {
                    if i == j && !include_self {
                        MIN_RATIO
                    } else {
                        contrast_ratio(c1, c2)
                    }
                })
                .collect()
        })
        .collect();

    debug!(size = matrix.len(), include_self, "built contrast matrix");
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flare_offset_bounds_ratio() {
        assert_eq!(contrast_from_luminances(0.0, 1.0), MAX_RATIO);
        assert_eq!(contrast_from_luminances(0.5, 0.5), MIN_RATIO);
    }

    #[test]
    fn empty_palette_yields_empty_matrix() {
        assert!(build_contrast_matrix(&[], false).is_empty());
    }
}
