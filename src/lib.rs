//! WCAG contrast analysis for hex color palettes.
//!
//! The core is three pure layers: [`color`] parses `#RGB`/`#RRGGBB` strings
//! and computes relative luminance, [`contrast`] turns luminances into WCAG
//! contrast ratios and matrices, and [`wcag`] classifies ratios against the
//! conformance levels and ranks accessible pairs. [`analysis`] packages those
//! into palette reports for a presentation layer such as the CLI.
//!
//! ```
//! use contrastly::wcag::{Level, accessible_pairs};
//!
//! let pairs = accessible_pairs(&["#111827", "#F9FAFB", "#F97316"], Level::AaNormal).unwrap();
//! assert_eq!(pairs[0].ratio, 16.98);
//! assert!(pairs.iter().all(|p| p.passes(Level::AaNormal)));
//! ```

pub mod analysis;
pub mod cli;
pub mod cli_args;
pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod logging;
pub mod wcag;

pub use color::{Color, parse_color};
pub use error::{AnalysisError, ColorError, ParseLevelError};
pub use wcag::{ContrastPair, Level};
