//! Theme variants and the variant resolution rule

use crate::error::ThemeError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tint_core::Appearance;

/// Named theme bucket selecting which resource table applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeVariant {
    /// Light appearance
    Light,
    /// Dark or unspecified appearance
    Default,
    /// System high-contrast mode, overrides light/dark
    HighContrast,
}

impl ThemeVariant {
    /// Stable key used by resource stores and config files
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Default => "Default",
            Self::HighContrast => "HighContrast",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 3] = [
            ThemeVariant::Light,
            ThemeVariant::Default,
            ThemeVariant::HighContrast,
        ];
        &VARIANTS
    }

    /// See [`resolve_variant`]
    pub fn resolve(is_high_contrast: bool, requested: Appearance) -> Self {
        resolve_variant(is_high_contrast, requested)
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|variant| variant.key() == s)
            .ok_or_else(|| ThemeError::UnknownVariant(s.to_string()))
    }
}

/// Map the high-contrast flag and a requested appearance to a variant
///
/// High contrast always wins. Otherwise a `Light` request selects the light
/// table and everything else falls back to `Default`.
pub fn resolve_variant(is_high_contrast: bool, requested: Appearance) -> ThemeVariant {
    if is_high_contrast {
        return ThemeVariant::HighContrast;
    }
    match requested {
        Appearance::Light => ThemeVariant::Light,
        Appearance::Dark | Appearance::Default => ThemeVariant::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPEARANCES: [Appearance; 3] = [Appearance::Default, Appearance::Light, Appearance::Dark];

    #[test]
    fn high_contrast_overrides_every_appearance() {
        for appearance in APPEARANCES {
            assert_eq!(
                resolve_variant(true, appearance),
                ThemeVariant::HighContrast,
                "appearance={appearance:?}"
            );
        }
    }

    #[test]
    fn light_and_dark_without_high_contrast() {
        assert_eq!(resolve_variant(false, Appearance::Light), ThemeVariant::Light);
        assert_eq!(resolve_variant(false, Appearance::Dark), ThemeVariant::Default);
        assert_eq!(resolve_variant(false, Appearance::Default), ThemeVariant::Default);
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for variant in ThemeVariant::all() {
            assert_eq!(variant.key().parse::<ThemeVariant>().unwrap(), *variant);
        }
        assert!(matches!(
            "Dark".parse::<ThemeVariant>(),
            Err(ThemeError::UnknownVariant(name)) if name == "Dark"
        ));
    }
}
