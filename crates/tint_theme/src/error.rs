//! Theme error types

use std::path::PathBuf;
use thiserror::Error;
use tint_core::ColorParseError;

/// Errors raised while loading or building theme resources
///
/// Resolution itself never fails: missing variant tables and missing keys are
/// skipped, not reported.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file could not be read
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid TOML for [`crate::ThemeConfig`]
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized back to TOML
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Variant name is not one of `Light`, `Default`, `HighContrast`
    #[error("unknown theme variant `{0}`")]
    UnknownVariant(String),

    /// A `#...` string value is not a valid color
    #[error("invalid color for `{key}` in variant {variant}: {source}")]
    InvalidColor {
        variant: String,
        key: String,
        #[source]
        source: ColorParseError,
    },

    /// A value is neither a string nor a number
    #[error("unsupported {kind} value for `{key}` in variant {variant}")]
    UnsupportedValue {
        variant: String,
        key: String,
        kind: &'static str,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
