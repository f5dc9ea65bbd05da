//! `navgen generate` command implementation.

use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config};
use navgen_nav::NavGenerator;

use super::generator_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Markdown source file (overrides config).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Template copied to the start of the output (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Navigation file to write (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page URL that anchors are appended to (overrides config).
    #[arg(long, env = "NAVGEN_PERMALINK")]
    permalink: Option<String>,

    /// Write to the preview file and skip the backup.
    #[arg(long)]
    test_run: bool,

    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl GenerateArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            source: self.source.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
            permalink: self.permalink.clone(),
            test_run: self.test_run.then_some(true),
        }
    }

    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        let generator = NavGenerator::new(generator_config(&config));

        let inputs = generator.config();
        output.info(&format!("Source: {}", inputs.source.display()));
        output.info(&format!("Template: {}", inputs.template.display()));

        let report = generator.generate()?;

        if let Some(backup) = &report.backup {
            output.info(&format!("Backup: {}", backup.display()));
        }
        if config.test_run {
            output.warning(&format!(
                "Test run: copy {} to {} manually",
                report.output.display(),
                config.paths_resolved.output.display()
            ));
        }
        output.success(&format!(
            "Navigation written to {} ({} sections, {} sub-sections)",
            report.output.display(),
            report.counts.sections,
            report.counts.subsections
        ));
        Ok(())
    }
}
