//! Navigation entries and their text rendering.

use std::fmt::Write;

use crate::heading::HeadingLine;
use crate::slug::slugify;

/// Line that opens a nested list under the preceding section.
pub(crate) const CHILDREN_MARKER: &str = "      children:\n";

/// A single navigation list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Displayed title.
    pub title: String,
    /// Anchor link, only set for sub-section entries.
    pub url: Option<String>,
    /// Nesting level: 0 for sections, 1 for sub-sections.
    pub level: u8,
}

impl NavEntry {
    /// Create a top-level entry without a link.
    pub fn section(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            level: 0,
        }
    }

    /// Create a nested entry linking to `{permalink}#{slug}`.
    pub fn subsection(heading: &HeadingLine<'_>, permalink: &str) -> Self {
        let slug = slugify(heading.words());
        Self {
            title: heading.title(),
            url: Some(format!("{permalink}#{slug}")),
            level: 1,
        }
    }

    /// Render the entry as indented YAML-like lines.
    ///
    /// Titles are written inside double quotes verbatim, without escaping.
    pub fn render(&self) -> String {
        let prefix = "  ".repeat(usize::from(self.level));
        let mut out = String::new();
        let _ = writeln!(out, "{prefix}    - title: \"{}\"", self.title);
        if let Some(url) = &self.url {
            let _ = writeln!(out, "{prefix}      url: {url}");
        }
        out
    }
}
