//! Numeric scale generation.
//!
//! Every algorithm is a pure function of its [`ScaleSpec`]; results are
//! rounded to two decimals and strictly ascending.

use crate::domain::entities::scale_spec::{Algorithm, GOLDEN_RATIO, ScaleSpec};
use crate::domain::entities::point::ScalePoint;
use crate::domain::error::{DomainError, DomainResult};

pub struct ScaleGenerator;

impl ScaleGenerator {
    /// Compute the `count` stops described by `spec`.
    ///
    /// # Errors
    ///
    /// `InvalidScaleParameter` when the `ScaleSpec` is inconsistent or the result
    /// would not be strictly ascending and positive.
    pub fn generate(spec: &ScaleSpec) -> DomainResult<Vec<f64>> {
        spec.validate()?;
        let n = spec.count();

        let raw: Vec<f64> = match spec.algorithm() {
            Algorithm::LinearGrid => {
                let step = spec.required(spec.step(), "step")?;
                if spec.is_symmetric() {
                    let base = spec.required(spec.base(), "base")?;
                    centered(n, |offset| base + f64::from(offset) * step)
                } else {
                    (1..=n).map(|i| step * i as f64).collect()
                }
            }
            Algorithm::Modular => {
                let base = spec.required(spec.base(), "base")?;
                let ratio = spec.required(spec.ratio(), "ratio")?;
                if spec.is_symmetric() {
                    centered(n, |offset| base * ratio.powi(offset))
                } else {
                    (0..n).map(|i| base * ratio.powi(i as i32)).collect()
                }
            }
            Algorithm::Fibonacci => {
                let base = spec.required(spec.base(), "base")?;
                let ratio = spec.ratio().unwrap_or(GOLDEN_RATIO);
                std::iter::successors(Some(base), |prev| Some(prev * ratio))
                    .take(n)
                    .collect()
            }
            Algorithm::CustomInterval => {
                let base = spec.required(spec.base(), "base")?;
                let step = spec.required(spec.step(), "step")?;
                (0..n).map(|i| base + step * i as f64).collect()
            }
            Algorithm::Incremental => {
                let start = spec.required(spec.start_value(), "start_value")?;
                let step = spec.required(spec.step(), "step")?;
                (0..n).map(|i| start + step * i as f64).collect()
            }
        };

        let mut values: Vec<f64> = raw.into_iter().map(round2).collect();
        if let Some(floor) = spec.floor() {
            clamp_to_floor(&mut values, floor)?;
        }
        if spec.is_symmetric() && values.iter().any(|v| *v <= 0.0) {
            return Err(DomainError::scale(
                "base",
                "the lower half of the scale drops to zero; raise base, lower step or set a floor",
            ));
        }
        ensure_ascending(&values)?;
        Ok(values)
    }

    /// [`generate`](Self::generate), wrapped as 1-based points.
    pub fn points(spec: &ScaleSpec) -> DomainResult<Vec<ScalePoint>> {
        Ok(ScalePoint::numbers(Self::generate(spec)?))
    }
}

/// Lay out `n` values around the middle index `n / 2`.
fn centered(n: usize, value_at: impl Fn(i32) -> f64) -> Vec<f64> {
    let middle = (n / 2) as i32;
    (0..n as i32).map(|j| value_at(j - middle)).collect()
}

#[derive(Clone, Copy, PartialEq)]
enum Stop {
    Original,
    Clamped,
    /// Not below the floor, but pushed up by a clamped predecessor.
    Bumped,
}

/// Raise values under `floor` to it, then bump each collapsed value to one
/// above its predecessor.
///
/// Only clamped values, and values landing on a clamped one, may move.
/// Anything above the floor keeps its position, so a clamped run that would
/// have to push into it fails instead.
fn clamp_to_floor(values: &mut [f64], floor: f64) -> DomainResult<()> {
    let mut stops: Vec<Stop> = values
        .iter_mut()
        .map(|v| {
            if *v < floor {
                *v = floor;
                Stop::Clamped
            } else {
                Stop::Original
            }
        })
        .collect();

    for i in 1..values.len() {
        if values[i] > values[i - 1] {
            continue;
        }
        match (stops[i - 1], stops[i]) {
            (_, Stop::Clamped) => values[i] = round2(values[i - 1] + 1.0),
            (Stop::Clamped, _) => {
                values[i] = round2(values[i - 1] + 1.0);
                stops[i] = Stop::Bumped;
            }
            (Stop::Bumped, _) => {
                return Err(DomainError::scale(
                    "floor",
                    format!(
                        "floor {} leaves no room below {}; raise base or lower the floor",
                        format_number(floor),
                        format_number(values[i])
                    ),
                ));
            }
            // Not caused by the floor; reported by `ensure_ascending`.
            (Stop::Original, _) => {}
        }
    }
    Ok(())
}

fn ensure_ascending(values: &[f64]) -> DomainResult<()> {
    if let Some(v) = values.iter().find(|v| !v.is_finite()) {
        return Err(DomainError::scale("count", format!("produced non-finite value {v}")));
    }
    if let Some(pair) = values.windows(2).find(|w| w[1] <= w[0]) {
        return Err(DomainError::scale(
            "step",
            format!(
                "{} follows {}; the scale is not strictly ascending",
                format_number(pair[1]),
                format_number(pair[0])
            ),
        ));
    }
    Ok(())
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Shortest decimal rendering of a 2-decimal value: `16`, `1.5`, `0.25`.
pub fn format_number(v: f64) -> String {
    let rounded = round2(v);
    if rounded == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
