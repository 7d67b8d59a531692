//! The `ScaleSpec` value and its builder.
//!
//! A `ScaleSpec` is the fully-resolved parameter set for one generation
//! round. Once a `ScaleSpec` exists it has passed [`ScaleSpec::validate`];
//! the generator still re-checks and fails fast on anything it cannot honour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Inclusive bounds on the number of stops in any scale.
pub const MIN_STOPS: usize = 1;
pub const MAX_STOPS: usize = 20;

/// Default ratio of the `fibonacci` algorithm.
pub const GOLDEN_RATIO: f64 = 1.618;

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// How numeric stops are derived from the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// `step * i`, or `base ± k * step` when symmetric.
    LinearGrid,
    /// `base * ratio^(i-1)`, or `base * ratio^(±k)` when symmetric.
    Modular,
    /// Golden-ratio geometric growth from `base`.
    Fibonacci,
    /// `base + step * (i-1)`.
    CustomInterval,
    /// `start_value + step * (i-1)`.
    Incremental,
}

impl Algorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LinearGrid => "linear_grid",
            Self::Modular => "modular",
            Self::Fibonacci => "fibonacci",
            Self::CustomInterval => "custom_interval",
            Self::Incremental => "incremental",
        }
    }

    /// Whether the algorithm can be centered on a base value.
    pub const fn supports_symmetric(&self) -> bool {
        matches!(self, Self::LinearGrid | Self::Modular)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "linear_grid" | "linear" | "grid" => Ok(Self::LinearGrid),
            "modular" => Ok(Self::Modular),
            "fibonacci" | "golden" => Ok(Self::Fibonacci),
            "custom_interval" | "interval" => Ok(Self::CustomInterval),
            "incremental" => Ok(Self::Incremental),
            _ => Err(DomainError::Unrecognized {
                what: "scale algorithm",
                value: s.to_string(),
            }),
        }
    }
}

// ── ScaleSpec ─────────────────────────────────────────────────────────────────

/// Parameters of one scale.
///
/// Fields irrelevant to the chosen algorithm are ignored. `min_mix` and
/// `max_mix` are only read by the color mixer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    algorithm: Algorithm,
    count: usize,
    base: Option<f64>,
    step: Option<f64>,
    ratio: Option<f64>,
    start_value: Option<f64>,
    min_mix: Option<f64>,
    max_mix: Option<f64>,
    unit: Option<String>,
    symmetric: bool,
    floor: Option<f64>,
}

impl ScaleSpec {
    /// Start building a spec for `count` stops of `algorithm`.
    pub fn builder(algorithm: Algorithm, count: usize) -> ScaleSpecBuilder {
        ScaleSpecBuilder::new(algorithm, count)
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub const fn count(&self) -> usize {
        self.count
    }
    pub const fn base(&self) -> Option<f64> {
        self.base
    }
    pub const fn step(&self) -> Option<f64> {
        self.step
    }
    pub const fn ratio(&self) -> Option<f64> {
        self.ratio
    }
    pub const fn start_value(&self) -> Option<f64> {
        self.start_value
    }
    pub const fn min_mix(&self) -> Option<f64> {
        self.min_mix
    }
    pub const fn max_mix(&self) -> Option<f64> {
        self.max_mix
    }
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
    pub const fn is_symmetric(&self) -> bool {
        self.symmetric
    }
    pub const fn floor(&self) -> Option<f64> {
        self.floor
    }

    /// Fetch a parameter the algorithm cannot run without.
    pub(crate) fn required(&self, value: Option<f64>, name: &'static str) -> DomainResult<f64> {
        value.ok_or_else(|| {
            DomainError::scale(name, format!("required by the {} algorithm", self.algorithm))
        })
    }

    /// Check that the parameters fit the algorithm.
    ///
    /// Called automatically by the builder and again by the generator.
    pub fn validate(&self) -> DomainResult<()> {
        if !(MIN_STOPS..=MAX_STOPS).contains(&self.count) {
            return Err(DomainError::scale(
                "count",
                format!("{} is outside {MIN_STOPS}..={MAX_STOPS}", self.count),
            ));
        }

        for (name, value) in [
            ("base", self.base),
            ("step", self.step),
            ("ratio", self.ratio),
            ("floor", self.floor),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(DomainError::scale(name, format!("{v} must be greater than zero")));
                }
            }
        }

        if let Some(start) = self.start_value {
            if !start.is_finite() || start < 0.0 {
                return Err(DomainError::scale(
                    "start_value",
                    format!("{start} must not be negative"),
                ));
            }
        }

        validate_mix_bounds(self.min_mix.unwrap_or(0.0), self.max_mix.unwrap_or(100.0))?;

        match self.algorithm {
            Algorithm::LinearGrid => {
                self.required(self.step, "step")?;
                if self.symmetric {
                    self.required(self.base, "base")?;
                }
            }
            Algorithm::Modular => {
                self.required(self.base, "base")?;
                require_growth(self.required(self.ratio, "ratio")?)?;
            }
            Algorithm::Fibonacci => {
                self.required(self.base, "base")?;
                require_growth(self.ratio.unwrap_or(GOLDEN_RATIO))?;
            }
            Algorithm::CustomInterval => {
                self.required(self.base, "base")?;
                self.required(self.step, "step")?;
            }
            Algorithm::Incremental => {
                self.required(self.start_value, "start_value")?;
                self.required(self.step, "step")?;
            }
        }

        if self.symmetric && !self.algorithm.supports_symmetric() {
            return Err(DomainError::scale(
                "symmetric",
                format!("the {} algorithm cannot be centered on a base", self.algorithm),
            ));
        }

        Ok(())
    }
}

fn require_growth(ratio: f64) -> DomainResult<()> {
    if ratio <= 1.0 {
        return Err(DomainError::scale(
            "ratio",
            format!("{ratio} must be greater than 1 for an ascending scale"),
        ));
    }
    Ok(())
}

/// Mix percentages are bounded to `0..=100` with `min <= max`.
pub(crate) fn validate_mix_bounds(min_mix: f64, max_mix: f64) -> DomainResult<()> {
    for (name, v) in [("min_mix", min_mix), ("max_mix", max_mix)] {
        if !(0.0..=100.0).contains(&v) {
            return Err(DomainError::scale(name, format!("{v} is outside 0..=100")));
        }
    }
    if min_mix > max_mix {
        return Err(DomainError::scale(
            "min_mix",
            format!("{min_mix} is greater than max_mix {max_mix}"),
        ));
    }
    Ok(())
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ScaleSpec`]; `build()` validates.
#[derive(Debug, Clone)]
pub struct ScaleSpecBuilder {
    spec: ScaleSpec,
}

impl ScaleSpecBuilder {
    pub fn new(algorithm: Algorithm, count: usize) -> Self {
        Self {
            spec: ScaleSpec {
                algorithm,
                count,
                base: None,
                step: None,
                ratio: None,
                start_value: None,
                min_mix: None,
                max_mix: None,
                unit: None,
                symmetric: false,
                floor: None,
            },
        }
    }

    pub fn base(mut self, base: f64) -> Self {
        self.spec.base = Some(base);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.spec.step = Some(step);
        self
    }

    pub fn ratio(mut self, ratio: f64) -> Self {
        self.spec.ratio = Some(ratio);
        self
    }

    pub fn start_value(mut self, start_value: f64) -> Self {
        self.spec.start_value = Some(start_value);
        self
    }

    pub fn mix_range(mut self, min_mix: f64, max_mix: f64) -> Self {
        self.spec.min_mix = Some(min_mix);
        self.spec.max_mix = Some(max_mix);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.spec.unit = Some(unit.into());
        self
    }

    /// Center the scale on `base`.
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.spec.symmetric = symmetric;
        self
    }

    pub fn floor(mut self, floor: Option<f64>) -> Self {
        self.spec.floor = floor;
        self
    }

    pub fn build(self) -> DomainResult<ScaleSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accepts_custom_interval() {
        let spec = ScaleSpec::builder(Algorithm::CustomInterval, 4)
            .base(4.0)
            .step(6.0)
            .build()
            .unwrap();
        assert_eq!(spec.count(), 4);
        assert_eq!(spec.step(), Some(6.0));
    }

    #[test]
    fn count_out_of_range_is_rejected() {
        for count in [0, 21] {
            let err = ScaleSpec::builder(Algorithm::LinearGrid, count)
                .step(4.0)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::InvalidScaleParameter { parameter: "count", .. }
            ));
        }
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        assert!(ScaleSpec::builder(Algorithm::LinearGrid, 3).step(0.0).build().is_err());
        assert!(ScaleSpec::builder(Algorithm::CustomInterval, 3)
            .base(-1.0)
            .step(2.0)
            .build()
            .is_err());
        assert!(ScaleSpec::builder(Algorithm::Modular, 3)
            .base(16.0)
            .ratio(0.8)
            .build()
            .is_err());
    }

    #[test]
    fn missing_required_parameter_is_rejected() {
        let err = ScaleSpec::builder(Algorithm::Incremental, 3)
            .step(2.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidScaleParameter { parameter: "start_value", .. }
        ));
    }

    #[test]
    fn symmetric_requires_a_centerable_algorithm() {
        assert!(ScaleSpec::builder(Algorithm::Fibonacci, 5)
            .base(8.0)
            .symmetric(true)
            .build()
            .is_err());
        assert!(ScaleSpec::builder(Algorithm::LinearGrid, 5)
            .symmetric(true)
            .step(2.0)
            .build()
            .is_err());
    }

    #[test]
    fn mix_range_is_bounded() {
        assert!(ScaleSpec::builder(Algorithm::LinearGrid, 3)
            .step(1.0)
            .mix_range(90.0, 10.0)
            .build()
            .is_err());
        assert!(ScaleSpec::builder(Algorithm::LinearGrid, 3)
            .step(1.0)
            .mix_range(0.0, 120.0)
            .build()
            .is_err());
    }

    #[test]
    fn algorithm_parses_aliases() {
        assert_eq!("linear".parse::<Algorithm>().unwrap(), Algorithm::LinearGrid);
        assert_eq!(
            "custom-interval".parse::<Algorithm>().unwrap(),
            Algorithm::CustomInterval
        );
        assert!("spiral".parse::<Algorithm>().is_err());
    }
}
