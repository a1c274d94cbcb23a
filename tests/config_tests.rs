use contrastly::Level;
use contrastly::config::{
    AnalysisOverrides, ConfigOverrides, ContrastConfig, Mode, OutputFormat, OutputOverrides,
};

#[test]
fn test_default_config() {
    let config = ContrastConfig::default();
    assert_eq!(config.analysis.mode, Mode::Pairs);
    assert_eq!(config.analysis.level, Level::AaNormal);
    assert_eq!(config.analysis.limit, 50);
    assert!(!config.analysis.include_self);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_parse_toml() {
    let toml_str = r#"
[analysis]
mode = "matrix"
level = "aaa_normal"
limit = 10

[output]
format = "table"
"#;

    let config: ContrastConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.analysis.mode, Mode::Matrix);
    assert_eq!(config.analysis.level, Level::AaaNormal);
    assert_eq!(config.analysis.limit, 10);
    assert!(!config.analysis.include_self);
    assert_eq!(config.output.format, OutputFormat::Table);
}

#[test]
fn test_unknown_level_rejected() {
    let result: Result<ContrastConfig, _> = toml::from_str("[analysis]\nlevel = \"aaaa\"\n");
    assert!(result.is_err());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contrastly.toml");

    let mut config = ContrastConfig::default();
    config.analysis.level = Level::UiGraphic;
    config.analysis.include_self = true;
    config.output.format = OutputFormat::Yaml;
    config.save(&path).unwrap();

    assert_eq!(ContrastConfig::load(&path).unwrap(), config);
}

#[test]
fn test_layering_file_then_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contrastly.toml");
    std::fs::write(
        &path,
        "[analysis]\nlevel = \"aa_large\"\nlimit = 5\n\n[output]\nformat = \"yaml\"\n",
    )
    .unwrap();

    let overrides = ConfigOverrides {
        analysis: AnalysisOverrides {
            limit: Some(7),
            ..Default::default()
        },
        output: OutputOverrides::default(),
    };
    let config = ContrastConfig::layered(Some(&path), &overrides).unwrap();

    // File value survives when not overridden
    assert_eq!(config.analysis.level, Level::AaLarge);
    assert_eq!(config.output.format, OutputFormat::Yaml);
    // Override wins over file
    assert_eq!(config.analysis.limit, 7);
    // Default fills the gaps
    assert_eq!(config.analysis.mode, Mode::Pairs);
}

#[test]
fn test_layering_without_file() {
    let config = ContrastConfig::layered(None, &ConfigOverrides::default()).unwrap();
    assert_eq!(config, ContrastConfig::default());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(ContrastConfig::layered(Some(&path), &ConfigOverrides::default()).is_err());
}

#[test]
fn test_no_include_self_overrides_file() {
    use clap::Parser;
    use contrastly::cli::Cli;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contrastly.toml");
    std::fs::write(&path, "[analysis]\ninclude_self = true\n").unwrap();

    let cli = Cli::try_parse_from(["contrastly", "--no-include-self"]).unwrap();
    let config = ContrastConfig::layered(Some(&path), &cli.to_config_overrides()).unwrap();
    assert!(!config.analysis.include_self);

    let cli = Cli::try_parse_from(["contrastly"]).unwrap();
    let config = ContrastConfig::layered(Some(&path), &cli.to_config_overrides()).unwrap();
    assert!(config.analysis.include_self);
}
