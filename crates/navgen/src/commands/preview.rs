//! `navgen preview` command implementation.

use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config};
use navgen_nav::NavGenerator;

use super::generator_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the preview command.
#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// Markdown source file (overrides config).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Page URL that anchors are appended to (overrides config).
    #[arg(long, env = "NAVGEN_PERMALINK")]
    permalink: Option<String>,

    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PreviewArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source: self.source,
            permalink: self.permalink,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let nav = NavGenerator::new(generator_config(&config)).preview()?;
        Output::new().document(&nav);
        Ok(())
    }
}
