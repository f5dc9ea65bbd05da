//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod preview;

pub(crate) use generate::GenerateArgs;
pub(crate) use preview::PreviewArgs;

use navgen_config::Config;
use navgen_nav::{GeneratorConfig, Markers};

/// Build generator inputs from the loaded configuration.
fn generator_config(config: &Config) -> GeneratorConfig {
    let paths = &config.paths_resolved;
    GeneratorConfig {
        source: paths.source.clone(),
        template: paths.template.clone(),
        output: config.output_path().to_path_buf(),
        backup: paths.backup.clone(),
        permalink: config.navigation.permalink.clone(),
        markers: Markers {
            section: config.navigation.section_marker.clone(),
            subsection: config.navigation.subsection_marker.clone(),
        },
        test_run: config.test_run,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use navgen_config::CliSettings;
    use pretty_assertions::assert_eq;

    use super::*;

    fn load(dir: &Path, toml: &str, cli_settings: Option<&CliSettings>) -> Config {
        let path = dir.join("navgen.toml");
        fs::write(&path, toml).unwrap();
        Config::load(Some(&path), cli_settings).unwrap()
    }

    #[test]
    fn test_generator_config_normal_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = load(
            temp_dir.path(),
            "[navigation]\npermalink = \"/docs/\"\nsection_marker = \"#\"\nsubsection_marker = \"##\"\n",
            None,
        );

        let inputs = generator_config(&config);

        assert_eq!(inputs.source, temp_dir.path().join("_pages/content.md"));
        assert_eq!(inputs.template, temp_dir.path().join("_data/navigation.tmpl"));
        assert_eq!(inputs.output, temp_dir.path().join("_data/navigation.yml"));
        assert_eq!(inputs.backup, temp_dir.path().join("nav.tmp"));
        assert_eq!(inputs.permalink, "/docs/");
        assert_eq!(
            inputs.markers,
            Markers {
                section: "#".to_owned(),
                subsection: "##".to_owned(),
            }
        );
        assert!(!inputs.test_run);
    }

    #[test]
    fn test_generator_config_test_run_targets_preview() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = load(temp_dir.path(), "test_run = true\n", None);

        let inputs = generator_config(&config);

        assert!(inputs.test_run);
        assert_eq!(inputs.output, temp_dir.path().join("out_tmp.md"));
        assert_eq!(inputs.backup, temp_dir.path().join("nav.tmp"));
        assert_eq!(
            config.paths_resolved.output,
            temp_dir.path().join("_data/navigation.yml")
        );
    }

    #[test]
    fn test_generator_config_test_run_from_cli() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = CliSettings {
            test_run: Some(true),
            ..CliSettings::default()
        };
        let config = load(temp_dir.path(), "", Some(&settings));

        let inputs = generator_config(&config);

        assert!(inputs.test_run);
        assert_eq!(inputs.output, temp_dir.path().join("out_tmp.md"));
    }
}
