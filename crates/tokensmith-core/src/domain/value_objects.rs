//! Domain value objects: TokenType, LetterCase, ShadowVariant, ArtifactFormat.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TokenType ────────────────────────────────────────────────────────────────

/// The declared type of a design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Color,
    Spacing,
    BorderRadius,
    FontSize,
    FontWeight,
    LetterSpacing,
    LineHeight,
    FontFamily,
    BoxShadow,
    Composite,
}

impl TokenType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::BorderRadius => "borderRadius",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::LetterSpacing => "letterSpacing",
            Self::LineHeight => "lineHeight",
            Self::FontFamily => "fontFamily",
            Self::BoxShadow => "boxShadow",
            Self::Composite => "composite",
        }
    }

    /// Minimum legible value enforced after generation, if the type has one.
    pub const fn legibility_floor(&self) -> Option<f64> {
        match self {
            Self::FontSize => Some(12.0),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "color" => Ok(Self::Color),
            "spacing" => Ok(Self::Spacing),
            "borderradius" | "radius" => Ok(Self::BorderRadius),
            "fontsize" => Ok(Self::FontSize),
            "fontweight" => Ok(Self::FontWeight),
            "letterspacing" => Ok(Self::LetterSpacing),
            "lineheight" => Ok(Self::LineHeight),
            "fontfamily" => Ok(Self::FontFamily),
            "boxshadow" | "shadow" => Ok(Self::BoxShadow),
            "composite" => Ok(Self::Composite),
            _ => Err(DomainError::Unrecognized {
                what: "token type",
                value: s.to_string(),
            }),
        }
    }
}

// ── LetterCase ───────────────────────────────────────────────────────────────

/// Case used by alphabetical naming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    pub const fn first(&self) -> u8 {
        match self {
            Self::Upper => b'A',
            Self::Lower => b'a',
        }
    }
}

// ── ShadowVariant ────────────────────────────────────────────────────────────

/// Whether a shadow is cast outside the box or inset into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowVariant {
    #[default]
    Outer,
    Inner,
}

impl ShadowVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outer => "outer",
            Self::Inner => "inner",
        }
    }
}

impl fmt::Display for ShadowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactFormat ───────────────────────────────────────────────────────────

/// One of the three serialized artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Json,
    Css,
    Scss,
}

impl ArtifactFormat {
    pub const ALL: [ArtifactFormat; 3] = [Self::Json, Self::Css, Self::Scss];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            "scss" | "sass" => Ok(Self::Scss),
            _ => Err(DomainError::Unrecognized {
                what: "artifact format",
                value: s.to_string(),
            }),
        }
    }
}
