//! Navigation sidebar generation from markdown headings.
//!
//! Scans a markdown document line by line and turns its headings into a
//! YAML-like navigation list:
//!
//! - Section lines (`##` by default) become bare entries with a title
//! - Sub-section lines (`###` by default) become linked entries nested under
//!   a `children:` key, with an anchor derived from the heading title
//! - Everything else is ignored
//!
//! The [`NavGenerator`] seeds the output file from a template and appends
//! entries as they are found. [`render_navigation`] produces the same entries
//! in memory without touching the filesystem.
//!
//! # Example
//!
//! ```
//! use navgen_nav::{Markers, render_navigation};
//!
//! let nav = render_navigation("## Intro\n### Install\n", &Markers::default(), "/docs/");
//! assert_eq!(
//!     nav,
//!     "    - title: \"Intro\"\n      children:\n      - title: \"Install\"\n        url: /docs/#install\n"
//! );
//! ```

mod entry;
mod error;
mod generator;
mod heading;
mod navigation;
mod slug;
mod writer;

pub use entry::NavEntry;
pub use error::NavError;
pub use generator::{GenerateReport, GeneratorConfig, NavGenerator};
pub use heading::{HeadingKind, HeadingLine, Markers};
pub use navigation::{EntryCounts, NavBuilder, render_navigation};
pub use slug::slugify;
pub use writer::NavWriter;
