//! Theme tokens and their TOML configuration.
//!
//! A theme is a flat set of named color tokens. Widgets only read tokens; a
//! theme never knows which widget consumes which token.

use crate::color::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Built-in palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

/// Named color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    /// Secondary accent for content drawn on top of accents
    pub content_accent_secondary: Color,
    /// Primary button background
    pub button_primary_bg: Color,
    /// Secondary surface background
    pub background_secondary: Color,
    /// Quaternary (faintest) content color
    pub content_quaternary: Color,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeTokens {
    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            content_accent_secondary: Color::WHITE,
            button_primary_bg: Color::rgb8(0x34, 0x78, 0xf6),
            background_secondary: Color::rgb8(0xe9, 0xe9, 0xeb),
            content_quaternary: Color::rgb8(0xc7, 0xc7, 0xcc),
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            content_accent_secondary: Color::rgb8(0xf2, 0xf2, 0xf7),
            button_primary_bg: Color::rgb8(0x0a, 0x84, 0xff),
            background_secondary: Color::rgb8(0x2c, 0x2c, 0x2e),
            content_quaternary: Color::rgb8(0x48, 0x48, 0x4a),
        }
    }

    /// Built-in palette for a variant.
    #[must_use]
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
        }
    }

    /// Parse tokens from TOML.
    ///
    /// Every token is an optional hex string; missing tokens come from the
    /// `base` palette (light unless stated).
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(source)?;
        let mut tokens = Self::for_variant(file.base.unwrap_or_default());

        override_token(
            &mut tokens.content_accent_secondary,
            "content_accent_secondary",
            file.content_accent_secondary.as_deref(),
        )?;
        override_token(
            &mut tokens.button_primary_bg,
            "button_primary_bg",
            file.button_primary_bg.as_deref(),
        )?;
        override_token(
            &mut tokens.background_secondary,
            "background_secondary",
            file.background_secondary.as_deref(),
        )?;
        override_token(
            &mut tokens.content_quaternary,
            "content_quaternary",
            file.content_quaternary.as_deref(),
        )?;

        Ok(tokens)
    }

    /// Load tokens from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// On-disk shape of a theme file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    base: Option<ThemeVariant>,
    content_accent_secondary: Option<String>,
    button_primary_bg: Option<String>,
    background_secondary: Option<String>,
    content_quaternary: Option<String>,
}

fn override_token(
    slot: &mut Color,
    token: &'static str,
    value: Option<&str>,
) -> Result<(), ThemeError> {
    if let Some(hex) = value {
        *slot = Color::from_hex(hex).map_err(|source| ThemeError::InvalidColor { token, source })?;
    }
    Ok(())
}

/// Error loading a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read
    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The theme file is not valid TOML or has unknown keys
    #[error("invalid theme file: {0}")]
    Toml(#[from] toml::de::Error),
    /// A token holds a malformed color
    #[error("invalid color for token `{token}`: {source}")]
    InvalidColor {
        /// Token name
        token: &'static str,
        /// Parse failure
        source: ColorParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeTokens::default(), ThemeTokens::light());
        assert_eq!(ThemeVariant::default(), ThemeVariant::Light);
    }

    #[test]
    fn test_light_and_dark_differ() {
        assert_ne!(ThemeTokens::light(), ThemeTokens::dark());
        assert_eq!(
            ThemeTokens::for_variant(ThemeVariant::Dark),
            ThemeTokens::dark()
        );
    }

    #[test]
    fn test_empty_toml_is_light() {
        let tokens = ThemeTokens::from_toml_str("").unwrap();
        assert_eq!(tokens, ThemeTokens::light());
    }

    #[test]
    fn test_toml_overrides_tokens() {
        let tokens = ThemeTokens::from_toml_str(
            r##"
            base = "dark"
            button_primary_bg = "#00ff00"
            "##,
        )
        .unwrap();
        assert_eq!(tokens.button_primary_bg, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(
            tokens.background_secondary,
            ThemeTokens::dark().background_secondary
        );
    }

    #[test]
    fn test_toml_bad_color_names_token() {
        let err = ThemeTokens::from_toml_str(r##"content_quaternary = "#zz""##).unwrap_err();
        match err {
            ThemeError::InvalidColor { token, source } => {
                assert_eq!(token, "content_quaternary");
                assert_eq!(source, ColorParseError::InvalidLength);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_toml_unknown_key_rejected() {
        let err = ThemeTokens::from_toml_str(r##"thumb = "#ffffff""##).unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    fn test_toml_unknown_base_rejected() {
        let err = ThemeTokens::from_toml_str(r#"base = "sepia""#).unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeTokens::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
        assert!(err.to_string().contains("theme.toml"));
    }
}
