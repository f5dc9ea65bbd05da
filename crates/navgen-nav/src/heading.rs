//! Heading line classification.

/// Marker prefixes that identify structural lines in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Prefix of top-level section lines (e.g. `##`).
    pub section: String,
    /// Prefix of linkable sub-section lines (e.g. `###`).
    pub subsection: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            section: "##".to_owned(),
            subsection: "###".to_owned(),
        }
    }
}

/// Kind of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    /// Top-level heading, emitted as an entry without a link.
    Section,
    /// Second-level heading, emitted as a linked child entry.
    SubSection,
    /// Ordinary content, ignored.
    Content,
}

/// A source line split into its marker and title words.
#[derive(Debug, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Line classification.
    pub kind: HeadingKind,
    /// First whitespace-separated token of the line (empty for content).
    pub marker: &'a str,
    words: Vec<&'a str>,
}

impl<'a> HeadingLine<'a> {
    /// Classify a line by its leading marker.
    ///
    /// The sub-section marker is checked first, so with the default markers a
    /// `###` line is never mistaken for a `##` section. Anything after the
    /// first whitespace-separated token is the title.
    pub fn classify(line: &'a str, markers: &Markers) -> Self {
        let kind = if line.starts_with(markers.subsection.as_str()) {
            HeadingKind::SubSection
        } else if line.starts_with(markers.section.as_str()) {
            HeadingKind::Section
        } else {
            HeadingKind::Content
        };

        if kind == HeadingKind::Content {
            return Self {
                kind,
                marker: "",
                words: Vec::new(),
            };
        }

        let mut tokens = line.split_whitespace();
        let marker = tokens.next().unwrap_or_default();
        Self {
            kind,
            marker,
            words: tokens.collect(),
        }
    }

    /// Title words, in order.
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Title text: the words joined by single spaces.
    pub fn title(&self) -> String {
        self.words.join(" ")
    }
}
