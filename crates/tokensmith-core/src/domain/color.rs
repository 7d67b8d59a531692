//! Hex colors and mixing toward white or black.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::scale_spec::{MAX_STOPS, MIN_STOPS, validate_mix_bounds};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::naming::semantic_labels_for_variations;
use crate::domain::scale::round2;

// ── HexColor ──────────────────────────────────────────────────────────────────

/// An opaque RGB color. Displays as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse `#RGB` or `#RRGGBB`, with or without `#`, in any case.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidColor {
            value: input.to_string(),
        };
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let mut expanded = [0u8; 3];
                for (slot, c) in expanded.iter_mut().zip(digits.chars()) {
                    *slot = channel(&format!("{c}{c}"))?;
                }
                Ok(Self::rgb(expanded[0], expanded[1], expanded[2]))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Linear per-channel interpolation toward `target` by `percentage` (0-100).
    pub fn mix(self, target: Self, percentage: f64) -> Self {
        let p = percentage.clamp(0.0, 100.0) / 100.0;
        let channel = |c: u8, t: u8| {
            let c = f64::from(c);
            (c + (f64::from(t) - c) * p).round().clamp(0.0, 255.0) as u8
        };
        Self::rgb(
            channel(self.r, target.r),
            channel(self.g, target.g),
            channel(self.b, target.b),
        )
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}

// ── ColorCache ────────────────────────────────────────────────────────────────

/// Memoized mixes and hex parses.
///
/// Keys include the base color, so entries never go stale across bases.
/// Owned by a session and emptied with [`clear`](Self::clear).
#[derive(Debug, Default, Clone)]
pub struct ColorCache {
    mixes: HashMap<(HexColor, HexColor, u64), HexColor>,
    parsed: HashMap<String, HexColor>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse through the cache. Failures are not cached.
    pub fn parse(&mut self, input: &str) -> DomainResult<HexColor> {
        if let Some(color) = self.parsed.get(input) {
            return Ok(*color);
        }
        let color = HexColor::parse(input)?;
        self.parsed.insert(input.to_string(), color);
        Ok(color)
    }

    pub fn mix(&mut self, base: HexColor, target: HexColor, percentage: f64) -> HexColor {
        *self
            .mixes
            .entry((base, target, percentage.to_bits()))
            .or_insert_with(|| base.mix(target, percentage))
    }

    /// Number of memoized entries of both kinds.
    pub fn len(&self) -> usize {
        self.mixes.len() + self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.mixes.clear();
        self.parsed.clear();
    }
}

// ── ColorMixer ────────────────────────────────────────────────────────────────

/// Produces tints and shades of a base color.
#[derive(Debug, Default, Clone)]
pub struct ColorMixer {
    cache: ColorCache,
}

impl ColorMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &ColorCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn parse(&mut self, input: &str) -> DomainResult<HexColor> {
        self.cache.parse(input)
    }

    /// Mix `base` for a position `ratio` along a light-to-dark ramp.
    ///
    /// `0.5` returns `base`; lower ratios tint toward white, higher ones
    /// shade toward black, reaching `max_mix` percent at either end.
    pub fn mix(
        &mut self,
        base: HexColor,
        ratio: f64,
        min_mix: f64,
        max_mix: f64,
    ) -> DomainResult<HexColor> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(DomainError::scale("ratio", format!("{ratio} is outside 0..=1")));
        }
        validate_mix_bounds(min_mix, max_mix)?;

        if ratio == 0.5 {
            return Ok(base);
        }
        let (target, distance) = if ratio < 0.5 {
            (HexColor::WHITE, 1.0 - 2.0 * ratio)
        } else {
            (HexColor::BLACK, 2.0 * ratio - 1.0)
        };
        let percentage = round2(min_mix + distance * (max_mix - min_mix));
        Ok(self.cache.mix(base, target, percentage))
    }

    /// `count` colors from lightest to darkest, evenly spaced in ratio.
    pub fn ramp(
        &mut self,
        base: HexColor,
        count: usize,
        min_mix: f64,
        max_mix: f64,
    ) -> DomainResult<Vec<HexColor>> {
        if !(MIN_STOPS..=MAX_STOPS).contains(&count) {
            return Err(DomainError::scale(
                "count",
                format!("{count} is outside {MIN_STOPS}..={MAX_STOPS}"),
            ));
        }
        if count == 1 {
            return Ok(vec![self.mix(base, 0.5, min_mix, max_mix)?]);
        }
        let last = (count - 1) as f64;
        (0..count)
            .map(|i| self.mix(base, i as f64 / last, min_mix, max_mix))
            .collect()
    }

    /// Labelled stops from darkest to lightest around `base`.
    ///
    /// A label `d` positions away from the center, out of at most `D`, mixes
    /// at `round(min + d / D * (max - min))` percent.
    pub fn semantic_stops(
        &mut self,
        base: HexColor,
        variations: usize,
        min_mix: f64,
        max_mix: f64,
    ) -> DomainResult<Vec<(String, HexColor)>> {
        validate_mix_bounds(min_mix, max_mix)?;
        let labels = semantic_labels_for_variations(variations)?;
        let center = labels.iter().position(|l| l == "base").unwrap_or(0);
        let reach = center.max(labels.len() - 1 - center).max(1) as f64;

        Ok(labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let color = if i == center {
                    base
                } else {
                    let distance = i.abs_diff(center) as f64;
                    let percentage = (min_mix + distance / reach * (max_mix - min_mix)).round();
                    let target = if i < center {
                        HexColor::BLACK
                    } else {
                        HexColor::WHITE
                    };
                    self.cache.mix(base, target, percentage)
                };
                (label, color)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> HexColor {
        HexColor::parse("#3B82F6").unwrap()
    }

    // ── Parsing ─────────────────────────────────────────────────────────────

    #[test]
    fn parses_short_long_and_bare_forms() {
        assert_eq!(HexColor::parse("#3b82f6").unwrap(), blue());
        assert_eq!(HexColor::parse("3B82F6").unwrap(), blue());
        assert_eq!(HexColor::parse("#39f").unwrap(), HexColor::rgb(0x33, 0x99, 0xFF));
        assert_eq!(blue().to_string(), "#3B82F6");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12", "#12345", "#GGGGGG", "blue", "#3B82F6FF", "#+1+2+3"] {
            assert!(
                matches!(HexColor::parse(bad), Err(DomainError::InvalidColor { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn serde_round_trips_through_the_hex_string() {
        let json = serde_json::to_string(&blue()).unwrap();
        assert_eq!(json, "\"#3B82F6\"");
        let back: HexColor = serde_json::from_str("\"#3b82f6\"").unwrap();
        assert_eq!(back, blue());
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }

    // ── Mixing ──────────────────────────────────────────────────────────────

    #[test]
    fn center_returns_base_unchanged() {
        let mut mixer = ColorMixer::new();
        assert_eq!(mixer.mix(blue(), 0.5, 10.0, 90.0).unwrap(), blue());
    }

    #[test]
    fn extremes_reach_white_and_black() {
        let mut mixer = ColorMixer::new();
        assert_eq!(mixer.mix(blue(), 0.0, 10.0, 100.0).unwrap(), HexColor::WHITE);
        assert_eq!(mixer.mix(blue(), 1.0, 10.0, 100.0).unwrap(), HexColor::BLACK);
    }

    #[test]
    fn channel_interpolation_rounds() {
        // 50% toward white from 0x3B (59): 59 + 196 * 0.5 = 157.
        let tint = blue().mix(HexColor::WHITE, 50.0);
        assert_eq!(tint.channels().0, 157);
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        let mut mixer = ColorMixer::new();
        assert!(mixer.mix(blue(), 1.5, 10.0, 90.0).is_err());
        assert!(mixer.mix(blue(), 0.2, 90.0, 10.0).is_err());
        assert!(mixer.ramp(blue(), 0, 10.0, 90.0).is_err());
    }

    #[test]
    fn ramp_runs_light_to_dark_through_base() {
        let mut mixer = ColorMixer::new();
        let ramp = mixer.ramp(blue(), 5, 0.0, 100.0).unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp[0], HexColor::WHITE);
        assert_eq!(ramp[2], blue());
        assert_eq!(ramp[4], HexColor::BLACK);
    }

    #[test]
    fn single_stop_ramp_is_the_base() {
        let mut mixer = ColorMixer::new();
        assert_eq!(mixer.ramp(blue(), 1, 10.0, 90.0).unwrap(), vec![blue()]);
    }

    #[test]
    fn semantic_stops_darken_below_and_lighten_above_center() {
        let mut mixer = ColorMixer::new();
        let stops = mixer.semantic_stops(blue(), 4, 20.0, 60.0).unwrap();
        let labels: Vec<_> = stops.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["darker", "dark", "base", "light", "lighter"]);

        // Distance 1 of 2 lands halfway between min and max.
        assert_eq!(stops[2].1, blue());
        assert_eq!(stops[1].1, blue().mix(HexColor::BLACK, 40.0));
        assert_eq!(stops[0].1, blue().mix(HexColor::BLACK, 60.0));
        assert_eq!(stops[3].1, blue().mix(HexColor::WHITE, 40.0));
        assert_eq!(stops[4].1, blue().mix(HexColor::WHITE, 60.0));
    }

    // ── Cache ───────────────────────────────────────────────────────────────

    #[test]
    fn cache_is_invisible_and_clearable() {
        let mut mixer = ColorMixer::new();
        let first = mixer.ramp(blue(), 5, 10.0, 90.0).unwrap();
        let filled = mixer.cache().len();
        assert!(filled > 0);

        let again = mixer.ramp(blue(), 5, 10.0, 90.0).unwrap();
        assert_eq!(first, again);
        assert_eq!(mixer.cache().len(), filled);

        let red = HexColor::parse("#EF4444").unwrap();
        let reds = mixer.ramp(red, 5, 10.0, 90.0).unwrap();
        assert_ne!(reds, first);

        mixer.clear_cache();
        assert!(mixer.cache().is_empty());
        assert_eq!(mixer.ramp(blue(), 5, 10.0, 90.0).unwrap(), first);
    }

    #[test]
    fn cache_parse_does_not_store_failures() {
        let mut cache = ColorCache::new();
        assert!(cache.parse("#zzz").is_err());
        assert!(cache.is_empty());
        cache.parse("#fff").unwrap();
        assert_eq!(cache.len(), 1);
    }
}
