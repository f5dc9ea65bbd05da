use std::fs;
use std::path::Path;

use navgen_nav::{EntryCounts, GeneratorConfig, Markers, NavError, NavGenerator};
use pretty_assertions::assert_eq;

const TEMPLATE: &str = "main:\n  - title: \"Home\"\n    url: /\n\ndocs:\n  - title: \"Contents\"\n";

const CONTENT: &str = "\
# Python for HPC

Intro paragraph.

## Intro
### Getting Started
Some text.
### Install

## Advanced
### Deep Dive
";

fn setup(dir: &Path) -> GeneratorConfig {
    fs::write(dir.join("content.md"), CONTENT).unwrap();
    fs::write(dir.join("navigation.tmpl"), TEMPLATE).unwrap();
    GeneratorConfig {
        source: dir.join("content.md"),
        template: dir.join("navigation.tmpl"),
        output: dir.join("navigation.yml"),
        backup: dir.join("nav.tmp"),
        permalink: "/docs/".to_owned(),
        markers: Markers::default(),
        test_run: false,
    }
}

#[test]
fn test_generate_end_to_end() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = setup(temp_dir.path());

    let report = NavGenerator::new(config.clone()).generate().unwrap();

    let expected = format!(
        "{TEMPLATE}    - title: \"Intro\"
      children:
      - title: \"Getting Started\"
        url: /docs/#getting-started
      - title: \"Install\"
        url: /docs/#install
    - title: \"Advanced\"
      children:
      - title: \"Deep Dive\"
        url: /docs/#deep-dive
"
    );
    assert_eq!(fs::read_to_string(&config.output).unwrap(), expected);
    assert_eq!(
        report.counts,
        EntryCounts {
            sections: 2,
            subsections: 3,
            children_blocks: 2,
        }
    );
    assert_eq!(report.output, config.output);
    assert_eq!(report.backup, None);
}

#[test]
fn test_generate_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = setup(temp_dir.path());
    let generator = NavGenerator::new(config.clone());

    generator.generate().unwrap();
    let first = fs::read_to_string(&config.output).unwrap();
    generator.generate().unwrap();
    let second = fs::read_to_string(&config.output).unwrap();

    assert_eq!(first, second);
    // The second run backed up the first run's output.
    assert_eq!(fs::read_to_string(&config.backup).unwrap(), first);
}

#[test]
fn test_generate_backs_up_previous_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = setup(temp_dir.path());
    fs::write(&config.output, "previous\n").unwrap();

    let report = NavGenerator::new(config.clone()).generate().unwrap();

    assert_eq!(report.backup.as_deref(), Some(config.backup.as_path()));
    assert_eq!(fs::read_to_string(&config.backup).unwrap(), "previous\n");
}

#[test]
fn test_test_run_skips_backup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        test_run: true,
        ..setup(temp_dir.path())
    };
    fs::write(&config.output, "previous\n").unwrap();

    let report = NavGenerator::new(config.clone()).generate().unwrap();

    assert_eq!(report.backup, None);
    assert!(!config.backup.exists());
    assert!(
        fs::read_to_string(&config.output)
            .unwrap()
            .starts_with(TEMPLATE)
    );
}

#[test]
fn test_missing_source_leaves_template_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        source: temp_dir.path().join("missing.md"),
        ..setup(temp_dir.path())
    };

    let err = NavGenerator::new(config.clone()).generate().unwrap_err();

    assert!(matches!(err, NavError::ReadSource { .. }));
    assert!(err.to_string().contains("missing.md"));
    assert_eq!(fs::read_to_string(&config.output).unwrap(), TEMPLATE);
}

#[test]
fn test_missing_template_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        template: temp_dir.path().join("missing.tmpl"),
        ..setup(temp_dir.path())
    };

    let err = NavGenerator::new(config).generate().unwrap_err();

    assert!(matches!(err, NavError::Template { .. }));
    assert!(err.to_string().contains("missing.tmpl"));
}

#[test]
fn test_custom_markers_and_permalink() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        permalink: "/python-for-hpc/".to_owned(),
        markers: Markers {
            section: "#".to_owned(),
            subsection: "##".to_owned(),
        },
        ..setup(temp_dir.path())
    };

    let report = NavGenerator::new(config.clone()).generate().unwrap();
    let output = fs::read_to_string(&config.output).unwrap();

    // `##` and `###` lines are both sub-sections under the single `#` title.
    assert_eq!(report.counts.sections, 1);
    assert_eq!(report.counts.subsections, 5);
    assert_eq!(report.counts.children_blocks, 1);
    assert!(output.contains("    - title: \"Python for HPC\"\n"));
    assert!(output.contains("        url: /python-for-hpc/#getting-started\n"));
}
