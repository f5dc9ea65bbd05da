//! File-based navigation generation.
//!
//! A run performs three steps in order:
//!
//! 1. Back up the current output file (skipped in test runs)
//! 2. Overwrite the output file with the template
//! 3. Scan the source and append one entry per heading
//!
//! There is no transaction around the scan: if reading the source fails
//! half-way, the output keeps the template plus the entries written so far.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::NavError;
use crate::heading::Markers;
use crate::navigation::{EntryCounts, NavBuilder, render_navigation};
use crate::writer::NavWriter;

/// Inputs for a generate run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Markdown document to scan.
    pub source: PathBuf,
    /// File copied verbatim to the start of the output.
    pub template: PathBuf,
    /// Navigation file to produce.
    pub output: PathBuf,
    /// Where the previous output is saved before being overwritten.
    pub backup: PathBuf,
    /// Base URL for sub-section anchors.
    pub permalink: String,
    /// Section and sub-section markers.
    pub markers: Markers,
    /// Skip the backup step.
    pub test_run: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// File that was written.
    pub output: PathBuf,
    /// Backup file, if one was written.
    pub backup: Option<PathBuf>,
    /// Entries appended after the template.
    pub counts: EntryCounts,
}

/// Regenerates a navigation file from markdown headings.
pub struct NavGenerator {
    config: GeneratorConfig,
}

impl NavGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the backup, template copy and scan.
    ///
    /// Fails before touching any file if the template, source or backup is
    /// the output file itself.
    pub fn generate(&self) -> Result<GenerateReport, NavError> {
        self.check_distinct_paths()?;

        let backup = if self.config.test_run {
            tracing::debug!("Test run, skipping backup");
            None
        } else {
            self.backup()?
        };

        self.seed_from_template()?;
        let counts = self.append_entries()?;

        tracing::info!(
            output = %self.config.output.display(),
            sections = counts.sections,
            subsections = counts.subsections,
            "Navigation generated"
        );

        Ok(GenerateReport {
            output: self.config.output.clone(),
            backup,
            counts,
        })
    }

    /// Render the entries for the source without touching any other file.
    pub fn preview(&self) -> Result<String, NavError> {
        let source = fs::read_to_string(&self.config.source).map_err(|source| {
            NavError::ReadSource {
                path: self.config.source.clone(),
                source,
            }
        })?;
        Ok(render_navigation(
            &source,
            &self.config.markers,
            &self.config.permalink,
        ))
    }

    fn check_distinct_paths(&self) -> Result<(), NavError> {
        let GeneratorConfig {
            source,
            template,
            output,
            backup,
            test_run,
            ..
        } = &self.config;

        let mut pairs = vec![("template", template), ("source", source)];
        if !test_run {
            pairs.push(("backup", backup));
        }
        for (role, path) in pairs {
            if same_file(path, output) {
                return Err(NavError::SameFile {
                    first: role,
                    second: "output",
                    path: output.clone(),
                });
            }
        }
        Ok(())
    }

    /// Copy the current output to the backup path.
    ///
    /// A missing output file means there is nothing to preserve.
    fn backup(&self) -> Result<Option<PathBuf>, NavError> {
        let GeneratorConfig { output, backup, .. } = &self.config;
        if !output.exists() {
            tracing::debug!(output = %output.display(), "No existing output, skipping backup");
            return Ok(None);
        }

        fs::copy(output, backup).map_err(|source| NavError::Backup {
            output: output.clone(),
            backup: backup.clone(),
            source,
        })?;
        tracing::debug!(backup = %backup.display(), "Backed up previous output");
        Ok(Some(backup.clone()))
    }

    fn seed_from_template(&self) -> Result<(), NavError> {
        let GeneratorConfig {
            template, output, ..
        } = &self.config;
        fs::copy(template, output).map_err(|source| NavError::Template {
            template: template.clone(),
            output: output.clone(),
            source,
        })?;
        Ok(())
    }

    fn append_entries(&self) -> Result<EntryCounts, NavError> {
        let read_err = |source: io::Error| NavError::ReadSource {
            path: self.config.source.clone(),
            source,
        };
        let write_err = |source: io::Error| NavError::WriteOutput {
            path: self.config.output.clone(),
            source,
        };

        let source = File::open(&self.config.source).map_err(read_err)?;
        let output = OpenOptions::new()
            .append(true)
            .open(&self.config.output)
            .map_err(write_err)?;

        let builder = NavBuilder::new(self.config.markers.clone(), self.config.permalink.as_str());
        let mut writer = NavWriter::new(BufWriter::new(output), builder);
        for line in BufReader::new(source).lines() {
            let line = line.map_err(read_err)?;
            writer.push_line(&line).map_err(write_err)?;
        }
        writer.finish().map_err(write_err)
    }
}

/// Whether two paths name the same file, either literally or after
/// resolving links and relative components.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
