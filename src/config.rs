//! Configuration management for mods-display
//!
//! Every field type has its own [`FieldConfig`]. Settings are layered from
//! `config/default`, `config/{RUN_MODE}` and `MODS_DISPLAY__*` environment
//! variables; anything left unset falls back to the built-in defaults.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;

use crate::error::DisplayResult;
use crate::fields::FieldKind;

/// Default separator placed between the values of one field
pub const DEFAULT_DELIMITER: &str = "<br/>";

/// Rendering settings for one field type
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FieldConfig {
    /// Skip this field type entirely when rendering HTML
    pub ignore: bool,
    /// Replaces every label this field type produces
    pub label: Option<String>,
    /// CSS class for the `<dt>` element
    pub label_class: String,
    /// CSS class for the `<dd>` element
    pub value_class: String,
    /// Separator between values of one field
    pub delimiter: String,
    /// URL template; `%value%` is replaced by the percent-encoded value
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: FieldConfig,
    pub related_item: FieldConfig,
    pub access_condition: FieldConfig,
    pub language: FieldConfig,
    pub description: FieldConfig,
    pub cartographics: FieldConfig,
    pub logging: LoggingConfig,
}

impl DisplayConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> DisplayResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. MODS_DISPLAY__ACCESS_CONDITION__IGNORE=false
            .add_source(
                Environment::with_prefix("MODS_DISPLAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!("Loaded display configuration (run mode: {})", run_mode);
        Ok(loaded)
    }

    /// Build configuration from an inline TOML document
    pub fn from_toml(source: &str) -> DisplayResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Settings for one field type
    pub fn field(&self, kind: FieldKind) -> &FieldConfig {
        match kind {
            FieldKind::Title => &self.title,
            FieldKind::RelatedItem => &self.related_item,
            FieldKind::AccessCondition => &self.access_condition,
            FieldKind::Language => &self.language,
            FieldKind::Description => &self.description,
            FieldKind::Cartographics => &self.cartographics,
        }
    }
}

impl FieldConfig {
    /// Settings for a field type that is hidden unless explicitly displayed
    pub fn ignored() -> Self {
        Self {
            ignore: true,
            ..Self::default()
        }
    }

    /// Builder-style switch to render this field type
    pub fn display(mut self) -> Self {
        self.ignore = false;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            ignore: false,
            label: None,
            label_class: String::new(),
            value_class: String::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            link: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: FieldConfig::default(),
            related_item: FieldConfig::default(),
            // Access conditions are usually rendered separately by the host page
            access_condition: FieldConfig::ignored(),
            language: FieldConfig::default(),
            description: FieldConfig::default(),
            cartographics: FieldConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert!(config.access_condition.ignore);
        assert!(!config.title.ignore);
        assert_eq!(config.language.delimiter, "<br/>");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_toml_overrides_only_given_keys() {
        let config = DisplayConfig::from_toml(
            r#"
            [access_condition]
            ignore = false

            [title]
            label_class = "title-label"
            delimiter = " | "
            "#,
        )
        .unwrap();

        assert!(!config.access_condition.ignore);
        assert_eq!(config.title.label_class, "title-label");
        assert_eq!(config.title.delimiter, " | ");
        assert_eq!(config.language, FieldConfig::default());
    }

    #[test]
    fn test_field_lookup() {
        let mut config = DisplayConfig::default();
        config.language.label = Some("Languages:".to_string());
        assert_eq!(
            config.field(FieldKind::Language).label.as_deref(),
            Some("Languages:")
        );
    }
}
