//! Theme configuration file handling
//!
//! ```toml
//! [binder]
//! reapply = "clear-then-set"
//!
//! [variants.Default]
//! Accent = "#0078D4"
//! CornerRadius = 4.0
//! FontFamily = "Segoe UI Variable"
//!
//! [variants.HighContrast]
//! Accent = "#FFFF00"
//! ```

use crate::error::{Result, ThemeError};
use crate::resources::{ResourceDictionary, ResourceTable};
use crate::variant::ThemeVariant;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tint_core::{Color, ResourceValue};

/// Top-level theme configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub binder: BinderConfig,
    /// Variant key -> resource key -> raw value
    #[serde(default)]
    pub variants: BTreeMap<String, IndexMap<String, toml::Value>>,
}

/// How a resolved value is written to its attribute slot
///
/// Neither mode compares against the previous value: every resolution writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReapplyMode {
    /// Clear the slot, then set it
    #[default]
    ClearThenSet,
    /// Set the slot directly
    Overwrite,
}

/// Binder behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BinderConfig {
    #[serde(default)]
    pub reapply: ReapplyMode,
}

impl ThemeConfig {
    /// Load a theme configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a resource dictionary from the `[variants.*]` tables
    pub fn to_dictionary(&self) -> Result<ResourceDictionary> {
        let dictionary = ResourceDictionary::new();
        for (name, entries) in &self.variants {
            let variant: ThemeVariant = name.parse()?;
            let table = entries
                .iter()
                .map(|(key, raw)| Ok((key.clone(), convert_value(name, key, raw)?)))
                .collect::<Result<ResourceTable>>()?;
            dictionary.set_table(variant, table);
        }
        Ok(dictionary)
    }
}

/// `#...` strings are colors, numbers are numbers, other strings are text
fn convert_value(variant: &str, key: &str, raw: &toml::Value) -> Result<ResourceValue> {
    match raw {
        toml::Value::String(text) if text.starts_with('#') => Color::parse_hex(text)
            .map(ResourceValue::Color)
            .map_err(|source| ThemeError::InvalidColor {
                variant: variant.to_string(),
                key: key.to_string(),
                source,
            }),
        toml::Value::String(text) => Ok(ResourceValue::from(text.as_str())),
        toml::Value::Integer(value) => Ok(ResourceValue::Number(*value as f32)),
        toml::Value::Float(value) => Ok(ResourceValue::Number(*value as f32)),
        other => Err(ThemeError::UnsupportedValue {
            variant: variant.to_string(),
            key: key.to_string(),
            kind: other.type_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceStore;

    const SAMPLE: &str = r##"
[binder]
reapply = "overwrite"

[variants.Default]
Accent = "#FF0000"
CornerRadius = 4
FontFamily = "Inter"

[variants.HighContrast]
Accent = "#FFFF00"
"##;

    #[test]
    fn parses_binder_and_variants() {
        let config = ThemeConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.binder.reapply, ReapplyMode::Overwrite);

        let dictionary = config.to_dictionary().unwrap();
        let default = dictionary.table(ThemeVariant::Default).unwrap();
        assert_eq!(default.get("Accent"), Some(&ResourceValue::Color(Color::RED)));
        assert_eq!(default.get("CornerRadius"), Some(&ResourceValue::Number(4.0)));
        assert_eq!(
            default.get("FontFamily").and_then(|v| v.as_text()),
            Some("Inter")
        );
        assert!(dictionary.table(ThemeVariant::Light).is_none());
    }

    #[test]
    fn binder_section_is_optional() {
        let config = ThemeConfig::from_toml_str("[variants.Light]\nAccent = \"#000000\"\n").unwrap();
        assert_eq!(config.binder.reapply, ReapplyMode::ClearThenSet);
    }

    #[test]
    fn rejects_unknown_variant() {
        let config = ThemeConfig::from_toml_str("[variants.Dark]\nAccent = \"#000000\"\n").unwrap();
        assert!(matches!(
            config.to_dictionary(),
            Err(ThemeError::UnknownVariant(name)) if name == "Dark"
        ));
    }

    #[test]
    fn rejects_bad_colors_and_unsupported_values() {
        let bad_color =
            ThemeConfig::from_toml_str("[variants.Default]\nAccent = \"#XYZ\"\n").unwrap();
        assert!(matches!(
            bad_color.to_dictionary(),
            Err(ThemeError::InvalidColor { key, .. }) if key == "Accent"
        ));

        let boolean = ThemeConfig::from_toml_str("[variants.Default]\nBold = true\n").unwrap();
        assert!(matches!(
            boolean.to_dictionary(),
            Err(ThemeError::UnsupportedValue { kind: "boolean", .. })
        ));
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = ThemeConfig::from_toml_str(SAMPLE).unwrap();
        let text = config.to_toml().unwrap();
        let reparsed = ThemeConfig::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.binder, config.binder);
        assert_eq!(reparsed.variants.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ThemeConfig::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
