//! Stops before and after naming.

use std::fmt;

use crate::domain::color::HexColor;
use crate::domain::scale::format_number;

/// The raw value of one stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Number(f64),
    Color(HexColor),
}

impl RawValue {
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Color(_) => None,
        }
    }

    pub const fn as_color(&self) -> Option<HexColor> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Number(_) => None,
        }
    }

    /// Render the value with an optional unit suffix (ignored for colors).
    pub fn render(&self, unit: Option<&str>) -> String {
        match self {
            Self::Number(n) => format!("{}{}", format_number(*n), unit.unwrap_or_default()),
            Self::Color(c) => c.to_string(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// One generated stop. `index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePoint {
    pub index: usize,
    pub raw: RawValue,
}

impl ScalePoint {
    pub const fn new(index: usize, raw: RawValue) -> Self {
        Self { index, raw }
    }

    /// Wrap a sequence of numbers as 1-based points.
    pub fn numbers(values: impl IntoIterator<Item = f64>) -> Vec<Self> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Self::new(i + 1, RawValue::Number(v)))
            .collect()
    }

    /// Wrap a sequence of colors as 1-based points.
    pub fn colors(values: impl IntoIterator<Item = HexColor>) -> Vec<Self> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, c)| Self::new(i + 1, RawValue::Color(c)))
            .collect()
    }
}

/// A stop with its assigned name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPoint {
    pub name: String,
    pub point: ScalePoint,
}

impl NamedPoint {
    pub fn new(name: impl Into<String>, point: ScalePoint) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}
