//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// CLI-compatible WCAG level enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum LevelArg {
    /// AA normal text, 4.5:1
    #[default]
    AaNormal,
    /// AA large text, 3:1
    AaLarge,
    /// AAA normal text, 7:1
    AaaNormal,
    /// AAA large text, 4.5:1
    AaaLarge,
    /// UI components and graphics, 3:1
    UiGraphic,
}

/// What to compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Ordered color pairs that meet the target level, highest contrast first
    #[default]
    Pairs,
    /// Parsed colors, full contrast matrix and the WCAG criteria
    Matrix,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
    /// Plain-text table
    Table,
}

/// WCAG contrast matrix and accessible color pair finder.
#[derive(Parser, Debug)]
#[command(name = "contrastly")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Palette colors as #RGB or #RRGGBB (quote them: '#0EA5E9')
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Read palette colors from a file, separated by whitespace or commas ('-' for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// What to compute: accessible pairs or the full contrast matrix
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Target WCAG level for pair filtering
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    /// Maximum number of pairs to print (capped at 200, default 50)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Compute the matrix diagonal instead of fixing it at 1
    #[arg(long, overrides_with = "no_include_self")]
    pub include_self: bool,

    /// Fix the matrix diagonal at 1, even when the config file enables include_self
    #[arg(long, overrides_with = "include_self")]
    pub no_include_self: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: contrastly.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
