//! Navigation generation errors.

use std::io;
use std::path::PathBuf;

/// Error raised by a generate run. Every variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Copying the previous output to the backup path failed.
    #[error("Failed to back up {} to {}: {source}", .output.display(), .backup.display())]
    Backup {
        output: PathBuf,
        backup: PathBuf,
        source: io::Error,
    },

    /// Seeding the output from the template failed.
    #[error("Failed to copy template {} to {}: {source}", .template.display(), .output.display())]
    Template {
        template: PathBuf,
        output: PathBuf,
        source: io::Error,
    },

    /// The markdown source could not be opened or read.
    #[error("Failed to read source {}: {source}", .path.display())]
    ReadSource { path: PathBuf, source: io::Error },

    /// Two file roles resolve to the same file, so copying one over the
    /// other would destroy it.
    #[error("{first} and {second} are the same file: {}", .path.display())]
    SameFile {
        first: &'static str,
        second: &'static str,
        path: PathBuf,
    },

    /// Appending entries to the output failed.
    #[error("Failed to write output {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

impl NavError {
    /// The underlying I/O error kind.
    ///
    /// `SameFile` is reported as `InvalidInput`.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Backup { source, .. }
            | Self::Template { source, .. }
            | Self::ReadSource { source, .. }
            | Self::WriteOutput { source, .. } => source.kind(),
            Self::SameFile { .. } => io::ErrorKind::InvalidInput,
        }
    }
}
