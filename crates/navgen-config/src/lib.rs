//! Configuration management for navgen.
//!
//! Parses `navgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! test_run = false
//!
//! [paths]
//! source = "_pages/content.md"
//! template = "_data/navigation.tmpl"
//! output = "_data/navigation.yml"
//! backup = "nav.tmp"
//! preview = "out_tmp.md"
//!
//! [navigation]
//! permalink = "/python-for-hpc/"
//! section_marker = "##"
//! subsection_marker = "###"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.
//!
//! ## Environment Variable Expansion
//!
//! `navigation.permalink` and every `paths.*` value support `${VAR}` and
//! `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source path.
    pub source: Option<PathBuf>,
    /// Override template path.
    pub template: Option<PathBuf>,
    /// Override the effective output path (preview path in test runs).
    pub output: Option<PathBuf>,
    /// Override permalink.
    pub permalink: Option<String>,
    /// Override test run flag.
    pub test_run: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navgen.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Write to the preview file and skip the backup.
    pub test_run: bool,
    /// File paths (relative strings from TOML).
    paths: PathsConfigRaw,
    /// Heading markers and link prefix.
    pub navigation: NavigationConfig,

    /// Resolved file paths (set after loading).
    #[serde(skip)]
    pub paths_resolved: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw paths configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PathsConfigRaw {
    source: Option<String>,
    template: Option<String>,
    output: Option<String>,
    backup: Option<String>,
    preview: Option<String>,
}

/// Resolved file paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Markdown document scanned for headings.
    pub source: PathBuf,
    /// Template copied to the start of the output.
    pub template: PathBuf,
    /// Navigation file written by a normal run.
    pub output: PathBuf,
    /// Copy of the previous output.
    pub backup: PathBuf,
    /// Navigation file written by a test run.
    pub preview: PathBuf,
}

/// Navigation configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Page URL that sub-section anchors are appended to.
    pub permalink: String,
    /// Prefix of section lines.
    pub section_marker: String,
    /// Prefix of sub-section lines.
    pub subsection_marker: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            permalink: "/python-for-hpc/".to_owned(),
            section_marker: "##".to_owned(),
            subsection_marker: "###".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navigation.permalink`").
        field: String,
        /// Error message (e.g., "${`SITE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navgen.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, then the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Path the generator writes to: the preview file in test runs.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        if self.test_run {
            &self.paths_resolved.preview
        } else {
            &self.paths_resolved.output
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(test_run) = settings.test_run {
            self.test_run = test_run;
        }
        if let Some(source) = &settings.source {
            self.paths_resolved.source.clone_from(source);
        }
        if let Some(template) = &settings.template {
            self.paths_resolved.template.clone_from(template);
        }
        if let Some(output) = &settings.output {
            if self.test_run {
                self.paths_resolved.preview.clone_from(output);
            } else {
                self.paths_resolved.output.clone_from(output);
            }
        }
        if let Some(permalink) = &settings.permalink {
            self.navigation.permalink.clone_from(permalink);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            test_run: false,
            paths: PathsConfigRaw::default(),
            navigation: NavigationConfig::default(),
            paths_resolved: PathsConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nav = &self.navigation;
        require_non_empty(&nav.permalink, "navigation.permalink")?;
        require_non_empty(&nav.section_marker, "navigation.section_marker")?;
        require_non_empty(&nav.subsection_marker, "navigation.subsection_marker")?;

        // Sub-section lines are matched first, so a sub-section marker that
        // prefixes the section marker would swallow every section line.
        if nav.section_marker.starts_with(&nav.subsection_marker) {
            return Err(ConfigError::Validation(
                "navigation.subsection_marker must not be a prefix of navigation.section_marker"
                    .to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.navigation.permalink =
            expand::expand_env(&self.navigation.permalink, "navigation.permalink")?;

        let paths = &mut self.paths;
        for (value, field) in [
            (&mut paths.source, "paths.source"),
            (&mut paths.template, "paths.template"),
            (&mut paths.output, "paths.output"),
            (&mut paths.backup, "paths.backup"),
            (&mut paths.preview, "paths.preview"),
        ] {
            if let Some(raw) = value {
                *raw = expand::expand_env(raw.as_str(), field)?;
            }
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths_resolved = PathsConfig {
            source: resolve(self.paths.source.as_deref(), "_pages/content.md"),
            template: resolve(self.paths.template.as_deref(), "_data/navigation.tmpl"),
            output: resolve(self.paths.output.as_deref(), "_data/navigation.yml"),
            backup: resolve(self.paths.backup.as_deref(), "nav.tmp"),
            preview: resolve(self.paths.preview.as_deref(), "out_tmp.md"),
        };
    }
}
