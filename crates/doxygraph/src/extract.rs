//! Graph extraction over a Doxygen XML directory.

use std::path::PathBuf;

use clap::Args;
use doxygraph_config::{CliSettings, Config, IncludeLabels};
use doxygraph_core::{BatchOptions, BatchSummary, LabelMode, TransformOptions, process_directory};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for graph extraction.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    /// Directory containing Doxygen XML output.
    xml_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover doxygraph.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum nodes per diagram (overrides config).
    #[arg(long, env = "DOXYGRAPH_MAX_NODES")]
    max_nodes: Option<usize>,

    /// Show full paths in include graphs instead of file names.
    #[arg(long)]
    full_include_labels: bool,

    /// Enable verbose output (per-run summary and file warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExtractArgs {
    /// Run extraction and print the `modified/total` summary line.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing argument, invalid configuration, or a
    /// target path that is not a directory.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let xml_dir = self.xml_dir.ok_or_else(|| {
            CliError::Validation("Usage: doxygraph <XML_DIR>".to_owned())
        })?;

        let cli_settings = CliSettings {
            max_nodes: self.max_nodes,
            full_include_labels: self.full_include_labels.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let options = batch_options(&config);
        let summary = process_directory(&xml_dir, &options)?;

        if summary.total == 0 {
            output.warning(&format!(
                "Warning: no .{} files found in {}",
                options.extension,
                xml_dir.display()
            ));
        }
        if summary.failed > 0 {
            output.warning(&format!("Warning: {} file(s) could not be processed", summary.failed));
        }

        output.result(&summary_line(&summary));
        Ok(())
    }
}

/// Map loaded configuration onto batch settings.
fn batch_options(config: &Config) -> BatchOptions {
    BatchOptions {
        extension: config.files.extension.clone(),
        skip_prefixes: config.files.skip_prefixes.clone(),
        skip_names: config.files.skip_names.clone(),
        transform: TransformOptions {
            max_nodes: config.graphs.max_nodes,
            include_labels: match config.graphs.include_labels {
                IncludeLabels::Basename => LabelMode::Basename,
                IncludeLabels::Full => LabelMode::Full,
            },
        },
    }
}

fn summary_line(summary: &BatchSummary) -> String {
    format!("{}/{} files updated", summary.modified, summary.total)
}
