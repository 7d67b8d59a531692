//! Recipes: a named list of generation steps.
//!
//! A recipe is what a host hands to a [`TokenSession`](super::TokenSession).
//! The model is plain serde so any adapter can produce it; the TOML shape is
//!
//! ```toml
//! name = "starter"
//!
//! [[steps]]
//! kind = "color_ramp"
//! path = ["primitives", "color"]
//! name = "blue"
//! base = "#3B82F6"
//! count = 9
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{
    Algorithm, DomainResult, DomainValidator, MidpointChoice, Naming, NamingConvention, ScaleSpec,
    ShadowVariant, TokenType,
};

pub const DEFAULT_FAMILY: &str = "tokens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Loaders fall back to the file stem when this is empty.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Artifact family written on export, e.g. `tokens` → `tokens.css`.
    #[serde(default = "default_family")]
    pub family: String,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            family: default_family(),
            steps: Vec::new(),
        }
    }

    pub fn with_step(mut self, step: impl Into<RecipeStep>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Structural checks that do not need a session.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let invalid = |reason: String| ApplicationError::RecipeInvalid {
            recipe: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("the recipe has no name".into()));
        }
        if self.family.trim().is_empty() || self.family.contains(['/', '\\']) {
            return Err(invalid(format!("'{}' is not a usable family name", self.family)));
        }
        if self.steps.is_empty() {
            return Err(invalid("the recipe has no steps".into()));
        }

        for (i, step) in self.steps.iter().enumerate() {
            let (path, name) = step.target();
            DomainValidator::validate_path(path, name)
                .map_err(|e| invalid(format!("step {} ({}): {}", i + 1, step.kind(), e)))?;
            if step.is_empty() {
                return Err(invalid(format!(
                    "step {} ({}) produces no tokens",
                    i + 1,
                    step.kind()
                )));
            }
        }
        Ok(())
    }
}

fn default_family() -> String {
    DEFAULT_FAMILY.to_string()
}

// ── Steps ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecipeStep {
    ColorRamp(ColorRampStep),
    ColorStops(ColorStopsStep),
    Scale(ScaleStep),
    FontWeights(PresetStep),
    LineHeights(PresetStep),
    LetterSpacings(PresetStep),
    FontFamilies(FontFamiliesStep),
    Shadow(ShadowStep),
    TextStyles(TextStylesStep),
}

impl RecipeStep {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ColorRamp(_) => "color_ramp",
            Self::ColorStops(_) => "color_stops",
            Self::Scale(_) => "scale",
            Self::FontWeights(_) => "font_weights",
            Self::LineHeights(_) => "line_heights",
            Self::LetterSpacings(_) => "letter_spacings",
            Self::FontFamilies(_) => "font_families",
            Self::Shadow(_) => "shadow",
            Self::TextStyles(_) => "text_styles",
        }
    }

    /// The namespace path and leaf name the step writes to.
    pub fn target(&self) -> (&[String], &str) {
        match self {
            Self::ColorRamp(s) => (&s.path, &s.name),
            Self::ColorStops(s) => (&s.path, &s.name),
            Self::Scale(s) => (&s.path, &s.name),
            Self::FontWeights(s) | Self::LineHeights(s) | Self::LetterSpacings(s) => {
                (&s.path, &s.name)
            }
            Self::FontFamilies(s) => (&s.path, &s.name),
            Self::Shadow(s) => (&s.path, &s.name),
            Self::TextStyles(s) => (&s.path, &s.name),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::FontFamilies(s) => s.families.is_empty(),
            Self::TextStyles(s) => s.styles.is_empty(),
            Self::FontWeights(s) | Self::LineHeights(s) | Self::LetterSpacings(s) => {
                s.names.as_ref().is_some_and(Vec::is_empty)
            }
            _ => false,
        }
    }
}

/// A continuous light-to-dark ramp around a base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRampStep {
    pub path: Vec<String>,
    pub name: String,
    pub base: String,
    pub count: usize,
    pub min_mix: Option<f64>,
    pub max_mix: Option<f64>,
    #[serde(default = "ramp_naming")]
    pub naming: Naming,
    pub description: Option<String>,
}

fn ramp_naming() -> Naming {
    Naming::new(NamingConvention::Incremental)
}

/// Semantic shades and tints (`dark`, `base`, `light`, ...) of a base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStopsStep {
    pub path: Vec<String>,
    pub name: String,
    pub base: String,
    pub variations: usize,
    pub min_mix: Option<f64>,
    pub max_mix: Option<f64>,
    pub description: Option<String>,
}

/// Where the anchor of a scale ends up after midpoint elision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidpointStep {
    #[serde(default = "default_anchor")]
    pub anchor: String,
    pub choice: Option<MidpointChoice>,
}

fn default_anchor() -> String {
    "base".to_string()
}

/// A numeric scale: spacing, radii, font sizes, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleStep {
    pub path: Vec<String>,
    pub name: String,
    pub token_type: TokenType,
    pub algorithm: Algorithm,
    pub count: usize,
    pub base: Option<f64>,
    pub step: Option<f64>,
    pub ratio: Option<f64>,
    pub start_value: Option<f64>,
    pub unit: Option<String>,
    #[serde(default)]
    pub symmetric: bool,
    /// Defaults to the token type's legibility floor.
    pub floor: Option<f64>,
    #[serde(default)]
    pub naming: Naming,
    pub variant: Option<String>,
    pub midpoint: Option<MidpointStep>,
    pub description: Option<String>,
}

impl ScaleStep {
    pub fn spec(&self) -> DomainResult<ScaleSpec> {
        let mut builder = ScaleSpec::builder(self.algorithm, self.count)
            .symmetric(self.symmetric)
            .floor(self.floor.or(self.token_type.legibility_floor()));
        if let Some(base) = self.base {
            builder = builder.base(base);
        }
        if let Some(step) = self.step {
            builder = builder.step(step);
        }
        if let Some(ratio) = self.ratio {
            builder = builder.ratio(ratio);
        }
        if let Some(start) = self.start_value {
            builder = builder.start_value(start);
        }
        if let Some(unit) = &self.unit {
            builder = builder.unit(unit.clone());
        }
        builder.build()
    }
}

/// Entries of a fixed table (font weights, line heights, letter spacings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetStep {
    pub path: Vec<String>,
    pub name: String,
    /// Names to keep; the whole table when absent.
    #[serde(alias = "weights")]
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamiliesStep {
    pub path: Vec<String>,
    pub name: String,
    pub families: BTreeMap<String, String>,
}

/// Box-shadow elevations on a geometric scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowStep {
    pub path: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub variant: ShadowVariant,
    #[serde(default = "default_shadow_color")]
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    pub count: usize,
    #[serde(default = "default_shadow_base")]
    pub base: f64,
    #[serde(default = "default_shadow_ratio")]
    pub ratio: f64,
    #[serde(default = "shadow_naming")]
    pub naming: Naming,
    pub description: Option<String>,
}

fn default_shadow_color() -> String {
    "#000000".to_string()
}

fn default_opacity() -> f64 {
    0.1
}

fn default_shadow_base() -> f64 {
    1.0
}

fn default_shadow_ratio() -> f64 {
    2.0
}

fn shadow_naming() -> Naming {
    Naming::new(NamingConvention::Tshirt)
}

/// Composite text styles built from references to earlier tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStylesStep {
    pub path: Vec<String>,
    pub name: String,
    pub styles: BTreeMap<String, TextStyle>,
    /// Fail on references that do not resolve instead of leaving them unset.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
}

impl TextStyle {
    /// Sub-properties in declaration order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("fontFamily", self.font_family.as_deref()),
            ("fontSize", self.font_size.as_deref()),
            ("fontWeight", self.font_weight.as_deref()),
            ("lineHeight", self.line_height.as_deref()),
            ("letterSpacing", self.letter_spacing.as_deref()),
        ]
    }
}

macro_rules! step_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for RecipeStep {
            fn from(step: $ty) -> Self {
                Self::$variant(step)
            }
        })*
    };
}

step_from! {
    ColorRampStep => ColorRamp,
    ColorStopsStep => ColorStops,
    ScaleStep => Scale,
    FontFamiliesStep => FontFamilies,
    ShadowStep => Shadow,
    TextStylesStep => TextStyles,
}
