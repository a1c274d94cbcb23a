//! CLI entry point for contrastly.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::info;

use contrastly::analysis::{AnalyzeOptions, PairsRequest, analyze_palette, pairs_report};
use contrastly::cli::{Cli, matrix_table, pairs_table};
use contrastly::config::{ContrastConfig, Mode, OutputFormat};
use contrastly::logging::init_logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "contrastly",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level))
        .wrap_err("Failed to initialize logging")?;

    let config = ContrastConfig::layered(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to save configuration to {}", path.display()))?;
        eprintln!("Saved configuration to {}", path.display());
        if cli.colors.is_empty() && cli.file.is_none() {
            return Ok(());
        }
    }

    let palette = cli.palette()?;
    info!(colors = palette.len(), mode = ?config.analysis.mode, "starting analysis");

    let format = config.output.format;
    let output = match config.analysis.mode {
        Mode::Pairs => {
            let request = PairsRequest {
                palette,
                threshold: config.analysis.level,
                limit: config.analysis.limit,
            };
            let report = pairs_report(&request).wrap_err("Failed to find accessible pairs")?;
            match format {
                OutputFormat::Table => pairs_table(&report),
                _ => serialize(&report, format)?,
            }
        }
        Mode::Matrix => {
            let options = AnalyzeOptions {
                include_self_pairs: config.analysis.include_self,
            };
            let analysis =
                analyze_palette(&palette, options).wrap_err("Failed to analyze palette")?;
            match format {
                OutputFormat::Table => matrix_table(&analysis),
                _ => serialize(&analysis, format)?,
            }
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).wrap_err("Failed to serialize YAML"),
        _ => serde_json::to_string_pretty(value).wrap_err("Failed to serialize JSON"),
    }
}
