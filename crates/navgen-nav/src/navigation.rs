//! Line-by-line navigation building.

use crate::entry::{CHILDREN_MARKER, NavEntry};
use crate::heading::{HeadingKind, HeadingLine, Markers};

/// Number of entries and `children:` blocks produced by a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryCounts {
    /// Section entries.
    pub sections: usize,
    /// Sub-section entries.
    pub subsections: usize,
    /// `children:` markers.
    pub children_blocks: usize,
}

/// Streaming state machine that turns source lines into navigation text.
///
/// Each call to [`push_line`](Self::push_line) returns the text to append
/// for that line, so callers can write it out immediately. A `children:`
/// marker precedes the first sub-section of every run; a section line starts
/// a new run.
#[derive(Debug)]
pub struct NavBuilder {
    markers: Markers,
    permalink: String,
    new_section: bool,
    counts: EntryCounts,
}

impl NavBuilder {
    /// Create a builder for the given markers and permalink.
    pub fn new(markers: Markers, permalink: impl Into<String>) -> Self {
        Self {
            markers,
            permalink: permalink.into(),
            new_section: true,
            counts: EntryCounts::default(),
        }
    }

    /// Process one source line.
    ///
    /// Returns `None` for content lines.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let heading = HeadingLine::classify(line, &self.markers);
        match heading.kind {
            HeadingKind::SubSection => {
                let mut out = String::new();
                if self.new_section {
                    out.push_str(CHILDREN_MARKER);
                    self.new_section = false;
                    self.counts.children_blocks += 1;
                }
                out.push_str(&NavEntry::subsection(&heading, &self.permalink).render());
                self.counts.subsections += 1;
                Some(out)
            }
            HeadingKind::Section => {
                self.new_section = true;
                self.counts.sections += 1;
                Some(NavEntry::section(heading.title()).render())
            }
            HeadingKind::Content => None,
        }
    }

    /// Counts accumulated so far.
    pub fn counts(&self) -> EntryCounts {
        self.counts
    }
}

/// Render the navigation entries for a whole source document.
///
/// Produces exactly the text that [`NavGenerator`](crate::NavGenerator)
/// appends after the template.
pub fn render_navigation(source: &str, markers: &Markers, permalink: &str) -> String {
    let mut builder = NavBuilder::new(markers.clone(), permalink);
    source
        .lines()
        .filter_map(|line| builder.push_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(source: &str) -> String {
        render_navigation(source, &Markers::default(), "/docs/")
    }

    #[test]
    fn test_render_two_sections() {
        let source = "## Intro\n### Getting Started\n### Install\n## Advanced\n### Deep Dive";
        let expected = "    - title: \"Intro\"
      children:
      - title: \"Getting Started\"
        url: /docs/#getting-started
      - title: \"Install\"
        url: /docs/#install
    - title: \"Advanced\"
      children:
      - title: \"Deep Dive\"
        url: /docs/#deep-dive
";
        assert_eq!(render(source), expected);
    }

    #[test]
    fn test_children_once_per_run() {
        let source = "## A\n### a1\ntext\n### a2\n\n### a3\n## B\n## C\n### c1\n";
        let nav = render(source);
        assert_eq!(nav.matches("children:").count(), 2);
    }

    #[test]
    fn test_subsection_before_any_section() {
        let nav = render("### Orphan\n## Later\n");
        assert_eq!(
            nav,
            "      children:\n      - title: \"Orphan\"\n        url: /docs/#orphan\n    - title: \"Later\"\n"
        );
    }

    #[test]
    fn test_section_without_children() {
        assert_eq!(render("## Only\nbody\n"), "    - title: \"Only\"\n");
    }

    #[test]
    fn test_content_is_ignored() {
        assert_eq!(render("# Title\nparagraph\n- list item\n"), "");
    }

    #[test]
    fn test_counts() {
        let mut builder = NavBuilder::new(Markers::default(), "/p/");
        for line in ["## A", "### a1", "### a2", "## B", "### b1", "text"] {
            builder.push_line(line);
        }
        assert_eq!(
            builder.counts(),
            EntryCounts {
                sections: 2,
                subsections: 3,
                children_blocks: 2,
            }
        );
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            render("## Intro\r\n### Install\r\n"),
            render("## Intro\n### Install\n")
        );
    }
}
