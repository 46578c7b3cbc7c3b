//! App configuration.
//!
//! Stored as YAML. Default location: `<config dir>/hitgrid/config.yaml`.
//! A missing or broken file never stops the app: we log and fall back to defaults.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::grid::GridMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dataset JSON document (`{songs, taxonomy, genres}`).
    pub dataset_path: PathBuf,
    /// Grid layout on startup.
    pub grid_mode: GridMode,
    /// Taxonomy priority for taxonomy mode, top to bottom. Unlisted taxonomies go last.
    pub taxonomy_order: Vec<String>,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("songs.json"),
            grid_mode: GridMode::Chart,
            taxonomy_order: ["pop", "rock", "rnb", "hiphop", "country", "electronic"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            display: DisplayConfig::default(),
        }
    }
}

/// Grid + panel sizing (pixels).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub panel_width: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 24.0,
            cell_height: 48.0,
            panel_width: 340.0,
        }
    }
}

impl DisplayConfig {
    /// Clamp sizes to something that still renders.
    pub fn validate(&mut self) {
        self.cell_width = self.cell_width.clamp(4.0, 96.0);
        self.cell_height = self.cell_height.clamp(4.0, 96.0);
        self.panel_width = self.panel_width.clamp(220.0, 800.0);
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hitgrid")
        .join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> Config {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn parse_config(contents: &str) -> Config {
    match serde_yaml::from_str::<Config>(contents) {
        Ok(mut config) => {
            config.display.validate();
            log::info!(
                "load_config: dataset={:?} mode={:?}",
                config.dataset_path,
                config.grid_mode
            );
            config
        }
        Err(e) => {
            log::warn!("load_config: Failed to parse config: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Command-line overrides: `hitgrid [--config <PATH>] [DATASET]`.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "hitgrid")]
#[command(version, about = "Browse yearly top-10 chart songs as a genre-colored grid")]
pub struct CliArgs {
    /// Config file (default: <config dir>/hitgrid/config.yaml)
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Dataset JSON, overrides `dataset_path` from the config
    #[arg(value_name = "DATASET")]
    pub dataset_path: Option<PathBuf>,
}

/// Resolve the final config: file (or defaults) plus command-line overrides.
pub fn resolve(cli: &CliArgs) -> Config {
    let path = cli.config_path.clone().unwrap_or_else(default_config_path);
    let mut config = load_config(&path);

    if let Some(dataset) = &cli.dataset_path {
        config.dataset_path = dataset.clone();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(list: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("hitgrid").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset_path, PathBuf::from("songs.json"));
        assert_eq!(config.grid_mode, GridMode::Chart);
        assert_eq!(config.taxonomy_order.first().map(String::as_str), Some("pop"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse_config("grid_mode: taxonomy\ndisplay:\n  cell_width: 30\n");
        assert_eq!(config.grid_mode, GridMode::Taxonomy);
        assert_eq!(config.display.cell_width, 30.0);
        assert_eq!(config.display.cell_height, 48.0);
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let config = parse_config("grid_mode: [not, a, mode]");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_display_validation_clamps() {
        let mut display = DisplayConfig {
            cell_width: 0.0,
            cell_height: 500.0,
            panel_width: 10.0,
        };
        display.validate();
        assert_eq!(display.cell_width, 4.0);
        assert_eq!(display.cell_height, 96.0);
        assert_eq!(display.panel_width, 220.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/definitely/not/here.yaml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_overrides_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"dataset_path: from_config.json\n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = cli(&["--config", &path]);
        assert_eq!(resolve(&args).dataset_path, PathBuf::from("from_config.json"));

        let args = cli(&["--config", &path, "charts.json"]);
        assert_eq!(args.dataset_path, Some(PathBuf::from("charts.json")));
        assert_eq!(resolve(&args).dataset_path, PathBuf::from("charts.json"));
    }

    #[test]
    fn test_cli_equals_form_and_no_args() {
        let args = cli(&["--config=my.yaml"]);
        assert_eq!(args.config_path, Some(PathBuf::from("my.yaml")));
        assert_eq!(args.dataset_path, None);

        assert_eq!(cli(&[]), CliArgs::default());
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        use clap::error::ErrorKind;

        let help = CliArgs::try_parse_from(["hitgrid", "-h"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        assert!(CliArgs::try_parse_from(["hitgrid", "--config"]).is_err());
        assert!(CliArgs::try_parse_from(["hitgrid", "--bogus"]).is_err());
        assert!(CliArgs::try_parse_from(["hitgrid", "a.json", "b.json"]).is_err());
    }
}
