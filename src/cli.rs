//! CLI argument handling and output rendering.

use std::io::Read;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub use crate::cli_args::{Cli, FormatArg, LevelArg, ModeArg};

use crate::analysis::{PairsReport, PaletteAnalysis};
use crate::config::{AnalysisOverrides, ConfigOverrides, Mode, OutputFormat, OutputOverrides};
use crate::wcag::Level;

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::AaNormal => Level::AaNormal,
            LevelArg::AaLarge => Level::AaLarge,
            LevelArg::AaaNormal => Level::AaaNormal,
            LevelArg::AaaLarge => Level::AaaLarge,
            LevelArg::UiGraphic => Level::UiGraphic,
        }
    }
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pairs => Mode::Pairs,
            ModeArg::Matrix => Mode::Matrix,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Table => OutputFormat::Table,
        }
    }
}

impl Cli {
    /// Convert CLI flags to sparse overrides for figment merging.
    ///
    /// Only flags that were given end up in the overrides, so a TOML file
    /// value survives unless the user explicitly replaces it.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            analysis: AnalysisOverrides {
                mode: self.mode.map(Into::into),
                level: self.level.map(Into::into),
                limit: self.limit,
                include_self: match (self.include_self, self.no_include_self) {
                    (true, _) => Some(true),
                    (false, true) => Some(false),
                    (false, false) => None,
                },
            },
            output: OutputOverrides {
                format: self.format.map(Into::into),
            },
        }
    }

    /// Collect palette entries from positional arguments and `--file`.
    ///
    /// Positional colors come first, followed by file entries in file order.
    pub fn palette(&self) -> Result<Vec<String>> {
        let mut palette = self.colors.clone();
        if let Some(ref path) = self.file {
            let content = read_source(path)?;
            palette.extend(split_palette(&content));
        }
        Ok(palette)
    }
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .wrap_err("Failed to read palette from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read palette from {}", path.display()))
}

/// Split palette text on whitespace and commas.
pub fn split_palette(content: &str) -> Vec<String> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render accessible pairs as a plain-text table.
pub fn pairs_table(report: &PairsReport) -> String {
    let mut out = format!(
        "{} of {} pairs meet {} ({}, >= {:.1}:1)\n",
        report.pairs.len(),
        report.total,
        report.threshold,
        report.threshold.description(),
        report.threshold.min_ratio()
    );
    for pair in &report.pairs {
        let levels: Vec<&str> = pair.passes_levels.iter().map(|l| l.as_str()).collect();
        out.push_str(&format!(
            "{} on {}  {:>5.2}:1  {}\n",
            pair.foreground,
            pair.background,
            pair.ratio,
            levels.join(" ")
        ));
    }
    out
}

/// Render an analysis as a plain-text contrast matrix.
pub fn matrix_table(analysis: &PaletteAnalysis) -> String {
    let mut out = format!("{:<7}", "ratio");
    for color in &analysis.colors {
        out.push_str(&format!("  {:>7}", color.hex()));
    }
    out.push('\n');
    for (color, row) in analysis.colors.iter().zip(&analysis.matrix) {
        out.push_str(&format!("{:>7}", color.hex()));
        for ratio in row {
            out.push_str(&format!("  {ratio:>7.2}"));
        }
        out.push('\n');
    }
    out
}
