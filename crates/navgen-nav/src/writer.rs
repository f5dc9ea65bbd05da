//! Streaming navigation writer.

use std::io::{self, Write};

use crate::navigation::{EntryCounts, NavBuilder};

/// Writes navigation text to a sink as each line is processed.
///
/// Nothing is buffered beyond what the sink itself buffers, so a failure
/// mid-scan leaves everything up to the failing line in place.
pub struct NavWriter<W: Write> {
    out: W,
    builder: NavBuilder,
}

impl<W: Write> NavWriter<W> {
    /// Wrap a sink.
    pub fn new(out: W, builder: NavBuilder) -> Self {
        Self { out, builder }
    }

    /// Process one source line, writing any resulting entry.
    pub fn push_line(&mut self, line: &str) -> io::Result<()> {
        if let Some(text) = self.builder.push_line(line) {
            self.out.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    /// Flush the sink and return the entry counts.
    pub fn finish(mut self) -> io::Result<EntryCounts> {
        self.out.flush()?;
        Ok(self.builder.counts())
    }
}
