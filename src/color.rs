//! Hex color parsing and WCAG relative luminance.
//!
//! Colors are accepted as `#RGB` or `#RRGGBB` (case-insensitive, `#` required)
//! and normalized to uppercase `#RRGGBB`. Luminance follows the WCAG 2.x
//! definition: sRGB channels are linearized and weighted with the BT.709 luma
//! coefficients.

use palette::Srgb;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::trace;

use crate::error::ColorError;

/// BT.709 luma coefficients used by WCAG relative luminance.
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// sRGB transfer function breakpoint (encoded value).
const LINEAR_THRESHOLD: f64 = 0.04045;
const LINEAR_SLOPE: f64 = 12.92;
const GAMMA_OFFSET: f64 = 0.055;
const GAMMA_SCALE: f64 = 1.055;
const GAMMA_EXPONENT: f64 = 2.4;

/// Decimal places kept for stored luminance.
pub const LUMINANCE_DECIMALS: usize = 6;

/// A parsed, validated color.
///
/// `hex` is always 7 characters (`#RRGGBB`, uppercase) and `luminance` is
/// derived from `rgb` at parse time. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    input: String,
    hex: String,
    #[serde(serialize_with = "serialize_rgb")]
    rgb: Srgb<u8>,
    luminance: f64,
}

impl Color {
    /// The string exactly as the caller supplied it.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Normalized `#RRGGBB` form.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    /// Relative luminance rounded to six decimals.
    pub fn luminance(&self) -> f64 {
        self.luminance
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

fn serialize_rgb<S: Serializer>(rgb: &Srgb<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut tuple = serializer.serialize_tuple(3)?;
    tuple.serialize_element(&rgb.red)?;
    tuple.serialize_element(&rgb.green)?;
    tuple.serialize_element(&rgb.blue)?;
    tuple.end()
}

/// Round `value` to `decimals` places from its exact binary value.
///
/// Scaling by a power of ten first can push a value sitting just below a
/// half step onto it, so the digits come from the formatter instead. Exact
/// halves round away from zero.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    // An exact half step is a multiple of 2^-(decimals + 1), and then its
    // `decimals + 1` digit expansion is exact.
    let scaled = value.abs() * 2f64.powi(decimals as i32 + 1);
    let wide = format!("{:.prec$}", value.abs(), prec = decimals + 1);
    let is_half = scaled.fract() == 0.0 && wide.ends_with('5');

    let magnitude = if is_half {
        value.abs() + 0.5 / 10f64.powi(decimals as i32)
    } else {
        value.abs()
    };

    format!("{magnitude:.decimals$}")
        .parse::<f64>()
        .map_or(value, |rounded| rounded.copysign(value))
}

/// Normalize a hex color to uppercase `#RRGGBB`.
///
/// Shorthand `#RGB` is expanded by doubling each digit.
///
/// # Example
///
/// ```
/// use contrastly::color::normalize_hex;
///
/// assert_eq!(normalize_hex("#abc").unwrap(), "#AABBCC");
/// assert_eq!(normalize_hex("#0ea5e9").unwrap(), "#0EA5E9");
/// assert!(normalize_hex("0ea5e9").is_err());
/// ```
pub fn normalize_hex(input: &str) -> Result<String, ColorError> {
    let digits = input
        .strip_prefix('#')
        .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| ColorError::invalid_format(input))?;

    match digits.len() {
        3 => {
            let expanded: String = digits
                .chars()
                .flat_map(|c| [c, c])
                .map(|c| c.to_ascii_uppercase())
                .collect();
            Ok(format!("#{expanded}"))
        }
        6 => Ok(format!("#{}", digits.to_ascii_uppercase())),
        _ => Err(ColorError::invalid_format(input)),
    }
}

/// Split a hex color into its 8-bit channels.
///
/// The input is normalized first, so shorthand and lowercase forms are
/// accepted; anything `normalize_hex` rejects is rejected here too.
pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>, ColorError> {
    let normalized = normalize_hex(hex)?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&normalized[range], 16).map_err(|_| ColorError::invalid_format(hex))
    };
    Ok(Srgb::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Decode an 8-bit sRGB channel to linear light (0.0-1.0).
pub fn srgb_to_linear(channel: u8) -> f64 {
    let cs = f64::from(channel) / 255.0;
    if cs <= LINEAR_THRESHOLD {
        cs / LINEAR_SLOPE
    } else {
        ((cs + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA_EXPONENT)
    }
}

/// WCAG relative luminance of an sRGB color, unrounded.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use contrastly::color::relative_luminance;
///
/// assert_eq!(relative_luminance(Srgb::new(0u8, 0, 0)), 0.0);
/// assert!((relative_luminance(Srgb::new(255u8, 255, 255)) - 1.0).abs() < 1e-12);
/// ```
pub fn relative_luminance(rgb: Srgb<u8>) -> f64 {
    COEF_R * srgb_to_linear(rgb.red)
        + COEF_G * srgb_to_linear(rgb.green)
        + COEF_B * srgb_to_linear(rgb.blue)
}

/// Parse a color string into a [`Color`].
///
/// This is the entry point callers should use. The stored luminance is
/// rounded to six decimals and every contrast computation reads that value.
#[cfg_attr(debug_assertions, instrument(level = "trace"))]
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let hex = normalize_hex(input)?;
    let rgb = hex_to_rgb(&hex)?;
    let luminance = round_to(relative_luminance(rgb), LUMINANCE_DECIMALS);
    trace!(input, %hex, luminance, "parsed color");

    Ok(Color {
        input: input.to_string(),
        hex,
        rgb,
        luminance,
    })
}

/// Parse every entry of a palette.
///
/// Fails on the first invalid entry; there is no partial result.
pub fn parse_palette<S: AsRef<str>>(palette: &[S]) -> Result<Vec<Color>, ColorError> {
    palette.iter().map(|c| parse_color(c.as_ref())).collect()
}
