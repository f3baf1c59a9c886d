//! Configuration loading for the bibleutils tool
//!
//! `defaults/bibleutils.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. User files and command line settings are layered on
//! top of those defaults via [`Loader`] before deserializing into [`BibleutilsConfig`].
//!
//! The catalogs themselves are compiled in and are not configurable.

use crate::bibleutils::forms::ReferenceForm;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/bibleutils.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct BibleutilsConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
}

/// What happens to references after parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub target_form: ReferenceForm,
    pub expand: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Builds a [BibleutilsConfig] from the embedded defaults, at most one user file and
/// the command line settings, applied in that order.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn with_defaults() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a user TOML file over the defaults. The file must exist.
    pub fn user_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        self
    }

    /// Form the parsed references are converted to, by symbol ("ETCBCH").
    pub fn target_form(self, form: &str) -> Result<Self, ConfigError> {
        self.set("parse.target_form", form)
    }

    pub fn expand(self, expand: bool) -> Result<Self, ConfigError> {
        self.set("parse.expand", expand)
    }

    /// Output format by name, `text` or `json`.
    pub fn output_format(self, format: &str) -> Result<Self, ConfigError> {
        self.set("output.format", format)
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<BibleutilsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::with_defaults()
            .build()
            .expect("defaults to deserialize");
        assert_eq!(config.parse.target_form, ReferenceForm::Bibleutils);
        assert!(!config.parse.expand);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::with_defaults()
            .target_form("ETCBCH")
            .expect("override to apply")
            .output_format("json")
            .expect("override to apply")
            .expand(true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parse.target_form, ReferenceForm::Etcbch);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.parse.expand);
    }

    #[test]
    fn rejects_unknown_form() {
        let result = Loader::with_defaults()
            .target_form("Vulgate")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parse]\nexpand = true").expect("write config");

        let config = Loader::with_defaults()
            .user_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.parse.expand);
        assert_eq!(config.parse.target_form, ReferenceForm::Bibleutils);
    }

    #[test]
    fn missing_user_file_is_an_error() {
        let result = Loader::with_defaults()
            .user_file("/nonexistent/bibleutils.toml")
            .build();
        assert!(result.is_err());
    }
}
