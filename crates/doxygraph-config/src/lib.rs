//! Configuration management for doxygraph.
//!
//! Parses `doxygraph.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override maximum node count per diagram.
    pub max_nodes: Option<usize>,
    /// Show full paths in include graphs instead of file names.
    pub full_include_labels: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doxygraph.toml";

/// Default node limit per diagram, Doxygen's `DOT_GRAPH_MAX_NODES` default.
pub const DEFAULT_MAX_NODES: usize = 50;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Diagram generation settings.
    pub graphs: GraphsConfig,
    /// Candidate file selection.
    pub files: FilesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// How include graph labels are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludeLabels {
    /// File name only.
    #[default]
    Basename,
    /// Path as reported by Doxygen.
    Full,
}

/// Diagram generation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Graphs with more nodes are skipped (Doxygen's `DOT_GRAPH_MAX_NODES`).
    pub max_nodes: usize,
    /// Label style for include dependency graphs.
    pub include_labels: IncludeLabels,
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            include_labels: IncludeLabels::default(),
        }
    }
}

/// Candidate file configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Extension of files to process, without the dot.
    pub extension: String,
    /// File name prefixes to skip.
    pub skip_prefixes: Vec<String>,
    /// Exact file names to skip.
    pub skip_names: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extension: "xml".to_owned(),
            skip_prefixes: vec!["index".to_owned()],
            skip_names: vec!["combine.xslt".to_owned()],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `doxygraph.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        // CLI overrides can invalidate a good file
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(max_nodes) = settings.max_nodes {
            self.graphs.max_nodes = max_nodes;
        }
        if let Some(full) = settings.full_include_labels {
            self.graphs.include_labels = if full {
                IncludeLabels::Full
            } else {
                IncludeLabels::Basename
            };
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.graphs.max_nodes == 0 {
            return Err(ConfigError::Validation(
                "graphs.max_nodes must be greater than 0".to_owned(),
            ));
        }
        if self.files.extension.is_empty() {
            return Err(ConfigError::Validation(
                "files.extension cannot be empty".to_owned(),
            ));
        }
        if self.files.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "files.extension must not start with a dot".to_owned(),
            ));
        }
        Ok(())
    }
}
