//! Stop naming conventions and collision handling.
//!
//! Names are produced in two steps: a convention turns a stop count into
//! base names, then each base name is resolved against a [`NameContext`]
//! holding the names already bound at the destination node.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::entities::point::{NamedPoint, ScalePoint};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::scale::format_number;
use crate::domain::value_objects::{LetterCase, TokenType};

/// Full t-shirt table, smallest first.
pub const TSHIRT_FULL: [&str; 21] = [
    "3xs", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl",
    "9xl", "10xl", "11xl", "12xl", "13xl", "14xl", "15xl",
];

/// Curated short table used by domains with few stops.
pub const TSHIRT_COMPACT: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

const TSHIRT_CENTER: usize = 4;

/// Largest semantic label set: ten shades, `base`, ten tints.
pub const MAX_SEMANTIC_LABELS: usize = 21;

pub const BASE_LABEL: &str = "base";

// ── Conventions ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TshirtTable {
    /// `3xs..15xl`, centered on `md`.
    #[default]
    Full,
    /// `xs..xl` from the start, falling back to `{prefix}{i}`.
    Compact,
}

impl TshirtTable {
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Full => &TSHIRT_FULL,
            Self::Compact => &TSHIRT_COMPACT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    Tshirt,
    #[default]
    Ordinal,
    Incremental,
    Alphabetical,
    Semantic,
    Custom(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingOptions {
    /// Zero-pad ordinal names to two digits.
    pub padded: bool,
    pub case: LetterCase,
    /// Multiplier of incremental names.
    pub increment: f64,
    /// Always qualify names as `{variant}.{token_set}.{base}`.
    pub include_type_in_name: bool,
    pub tshirt_table: TshirtTable,
    pub fallback_prefix: String,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            padded: false,
            case: LetterCase::default(),
            increment: 100.0,
            include_type_in_name: false,
            tshirt_table: TshirtTable::default(),
            fallback_prefix: "size-".to_string(),
        }
    }
}

/// A convention with its options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Naming {
    #[serde(default)]
    pub convention: NamingConvention,
    #[serde(flatten)]
    pub options: NamingOptions,
}

impl Naming {
    pub fn new(convention: NamingConvention) -> Self {
        Self {
            convention,
            options: NamingOptions::default(),
        }
    }

    pub fn with_options(mut self, options: NamingOptions) -> Self {
        self.options = options;
        self
    }
}

// ── Destination and context ───────────────────────────────────────────────────

/// Where a batch of names is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTarget {
    /// Dotted path of the namespace receiving the names.
    pub node: String,
    /// Name of the token family, e.g. `card` or `blue`.
    pub token_set: String,
    pub token_type: TokenType,
    /// Optional batch label, e.g. a shadow's `outer` or `inner`.
    pub variant: Option<String>,
}

impl NameTarget {
    pub fn new(node: impl Into<String>, token_set: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            node: node.into(),
            token_set: token_set.into(),
            token_type,
            variant: None,
        }
    }

    pub fn with_variant(mut self, variant: Option<impl Into<String>>) -> Self {
        self.variant = variant.map(Into::into);
        self
    }

    /// The variant, or the token type when the batch has none.
    pub fn qualifier(&self) -> &str {
        self.variant.as_deref().unwrap_or(self.token_type.as_str())
    }
}

/// Names already bound per node, with the variant each was bound under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameContext {
    nodes: HashMap<String, HashMap<String, Option<String>>>,
}

impl NameContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if `name` is free at `node`, else the variant it is bound to.
    pub fn binding(&self, node: &str, name: &str) -> Option<Option<&str>> {
        self.nodes
            .get(node)
            .and_then(|names| names.get(name))
            .map(Option::as_deref)
    }

    pub fn record(&mut self, node: &str, name: &str, variant: Option<&str>) {
        self.nodes
            .entry(node.to_string())
            .or_default()
            .insert(name.to_string(), variant.map(str::to_string));
    }

    /// Drop every binding under `node`, e.g. before it is replaced.
    pub fn forget_node(&mut self, node: &str) {
        self.nodes.remove(node);
    }

    pub fn names_at(&self, node: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .nodes
            .get(node)
            .map(|names| names.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

// ── NameAssigner ──────────────────────────────────────────────────────────────

pub struct NameAssigner;

impl NameAssigner {
    /// Base names for `count` stops, before collision handling.
    pub fn names(count: usize, naming: &Naming) -> DomainResult<Vec<String>> {
        if count == 0 {
            return Err(DomainError::InvalidNaming("there are no stops to name".into()));
        }
        let options = &naming.options;

        match &naming.convention {
            NamingConvention::Tshirt => Ok(tshirt_names(count, options)),
            NamingConvention::Ordinal => Ok((1..=count)
                .map(|i| {
                    if options.padded {
                        format!("{i:02}")
                    } else {
                        i.to_string()
                    }
                })
                .collect()),
            NamingConvention::Alphabetical => {
                if count > 26 {
                    return Err(DomainError::InvalidNaming(format!(
                        "alphabetical naming supports at most 26 stops, got {count}"
                    )));
                }
                let first = options.case.first();
                Ok((0..count as u8).map(|i| char::from(first + i).to_string()).collect())
            }
            NamingConvention::Incremental => {
                if !options.increment.is_finite() || options.increment <= 0.0 {
                    return Err(DomainError::InvalidNaming(format!(
                        "increment must be greater than zero, got {}",
                        options.increment
                    )));
                }
                Ok((1..=count)
                    .map(|i| format_number(i as f64 * options.increment))
                    .collect())
            }
            NamingConvention::Semantic => semantic_labels(count),
            NamingConvention::Custom(names) => {
                if names.len() != count {
                    return Err(DomainError::InvalidNaming(format!(
                        "{} custom names supplied for {count} stops",
                        names.len()
                    )));
                }
                if names.iter().any(|n| n.trim().is_empty()) {
                    return Err(DomainError::InvalidNaming("custom names must not be empty".into()));
                }
                Ok(names.clone())
            }
        }
    }

    /// Name `points` for `target`, resolving clashes against `context`.
    ///
    /// The context is only read; callers record the names once the batch
    /// has been stored.
    pub fn assign(
        points: &[ScalePoint],
        naming: &Naming,
        target: &NameTarget,
        context: &NameContext,
    ) -> DomainResult<Vec<NamedPoint>> {
        let bases = Self::names(points.len(), naming)?;
        let mut seen = HashSet::with_capacity(bases.len());

        points
            .iter()
            .zip(bases)
            .map(|(point, base)| {
                let name = if naming.options.include_type_in_name {
                    format!("{}.{}.{}", target.qualifier(), target.token_set, base)
                } else {
                    Self::resolve(&base, target, context)?
                };
                if !seen.insert(name.clone()) {
                    return Err(DomainError::NameCollision {
                        name,
                        node: target.node.clone(),
                    });
                }
                Ok(NamedPoint::new(name, *point))
            })
            .collect()
    }

    /// Resolve one base name at `target.node`.
    ///
    /// A name bound under the same variant is reused. A name bound under a
    /// different variant becomes `{base}-{variant}`.
    pub fn resolve(base: &str, target: &NameTarget, context: &NameContext) -> DomainResult<String> {
        let variant = target.variant.as_deref();
        match context.binding(&target.node, base) {
            None => return Ok(base.to_string()),
            Some(existing) if existing == variant => return Ok(base.to_string()),
            Some(_) => {}
        }

        let collision = |name: String| DomainError::NameCollision {
            name,
            node: target.node.clone(),
        };
        let Some(variant) = variant else {
            return Err(collision(base.to_string()));
        };
        let candidate = format!("{base}-{variant}");
        match context.binding(&target.node, &candidate) {
            None => Ok(candidate),
            Some(existing) if existing == Some(variant) => Ok(candidate),
            Some(_) => Err(collision(candidate)),
        }
    }
}

fn tshirt_names(count: usize, options: &NamingOptions) -> Vec<String> {
    let table = options.tshirt_table.labels();
    let start = match options.tshirt_table {
        TshirtTable::Full => TSHIRT_CENTER.saturating_sub((count - 1) / 2),
        TshirtTable::Compact => 0,
    };
    (0..count)
        .map(|i| match table.get(start + i) {
            Some(label) => (*label).to_string(),
            None => format!("{}{}", options.fallback_prefix, i + 1),
        })
        .collect()
}

// ── Semantic labels ───────────────────────────────────────────────────────────

/// `count` labels from darkest to lightest with `base` in the middle.
///
/// The dark side takes `count / 2` labels and the light side
/// `(count - 1) / 2`, each read nearest-first from
/// `dark, darker, darkest, x-darkest, xx-darkest, 3x-darkest, ...`.
pub fn semantic_labels(count: usize) -> DomainResult<Vec<String>> {
    if !(1..=MAX_SEMANTIC_LABELS).contains(&count) {
        return Err(DomainError::InvalidNaming(format!(
            "semantic naming supports 1 to {MAX_SEMANTIC_LABELS} stops, got {count}"
        )));
    }
    let dark = count / 2;
    let light = (count - 1) / 2;

    let mut labels: Vec<String> = (0..dark).rev().map(|k| ladder("dark", k)).collect();
    labels.push(BASE_LABEL.to_string());
    labels.extend((0..light).map(|k| ladder("light", k)));
    Ok(labels)
}

/// Labels for a requested number of variations around `base`.
///
/// One variation is `base` alone; `n > 1` variations yield `n + 1` labels.
pub fn semantic_labels_for_variations(variations: usize) -> DomainResult<Vec<String>> {
    match variations {
        0 => Err(DomainError::InvalidNaming(
            "at least one variation is required".into(),
        )),
        1 => semantic_labels(1),
        n => semantic_labels(n + 1),
    }
}

fn ladder(stem: &str, k: usize) -> String {
    match k {
        0 => stem.to_string(),
        1 => format!("{stem}er"),
        2 => format!("{stem}est"),
        3 => format!("x-{stem}est"),
        4 => format!("xx-{stem}est"),
        _ => format!("{}x-{stem}est", k - 2),
    }
}

// ── Midpoint elision ──────────────────────────────────────────────────────────

/// Which middle stop takes the anchor's name when two are equally central.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidpointChoice {
    Lower,
    Upper,
}

/// Drop the stop named `anchor` and give its name to the middle survivor.
///
/// With an even number of survivors `choice` picks the middle stop; it is
/// ignored otherwise.
pub fn elide_midpoint(
    points: Vec<NamedPoint>,
    anchor: &str,
    choice: Option<MidpointChoice>,
) -> DomainResult<Vec<NamedPoint>> {
    let position = points
        .iter()
        .position(|p| p.name == anchor)
        .ok_or_else(|| DomainError::InvalidNaming(format!("no stop is named '{anchor}'")))?;

    let mut rest = points;
    rest.remove(position);
    if rest.is_empty() {
        return Err(DomainError::InvalidNaming(format!(
            "'{anchor}' is the only stop; nothing can take its name"
        )));
    }

    let half = rest.len() / 2;
    let middle = if rest.len() % 2 == 1 {
        half
    } else {
        match choice {
            Some(MidpointChoice::Lower) => half - 1,
            Some(MidpointChoice::Upper) => half,
            None => {
                return Err(DomainError::InvalidNaming(format!(
                    "{} stops remain after removing '{anchor}'; choose the lower or upper middle stop",
                    rest.len()
                )));
            }
        }
    };
    rest[middle].name = anchor.to_string();
    Ok(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::point::RawValue;

    fn points(n: usize) -> Vec<ScalePoint> {
        ScalePoint::numbers((1..=n).map(|i| i as f64))
    }

    fn names(n: usize, convention: NamingConvention) -> Vec<String> {
        NameAssigner::names(n, &Naming::new(convention)).unwrap()
    }

    fn with(convention: NamingConvention, tweak: impl FnOnce(&mut NamingOptions)) -> Naming {
        let mut naming = Naming::new(convention);
        tweak(&mut naming.options);
        naming
    }

    // ── Conventions ─────────────────────────────────────────────────────────

    #[test]
    fn ordinal_padded() {
        let naming = with(NamingConvention::Ordinal, |o| o.padded = true);
        assert_eq!(
            NameAssigner::names(4, &naming).unwrap(),
            ["01", "02", "03", "04"]
        );
        assert_eq!(names(3, NamingConvention::Ordinal), ["1", "2", "3"]);
    }

    #[test]
    fn tshirt_full_is_centered_on_md() {
        assert_eq!(names(1, NamingConvention::Tshirt), ["md"]);
        assert_eq!(names(3, NamingConvention::Tshirt), ["sm", "md", "lg"]);
        assert_eq!(
            names(5, NamingConvention::Tshirt),
            ["xs", "sm", "md", "lg", "xl"]
        );
        let wide = names(20, NamingConvention::Tshirt);
        assert_eq!(wide.first().map(String::as_str), Some("3xs"));
        assert_eq!(wide.last().map(String::as_str), Some("14xl"));
    }

    #[test]
    fn tshirt_compact_falls_back_to_prefix() {
        let naming = with(NamingConvention::Tshirt, |o| {
            o.tshirt_table = TshirtTable::Compact;
            o.fallback_prefix = "space-".into();
        });
        assert_eq!(
            NameAssigner::names(7, &naming).unwrap(),
            ["xs", "sm", "md", "lg", "xl", "space-6", "space-7"]
        );
    }

    #[test]
    fn alphabetical_respects_case_and_limit() {
        assert_eq!(names(3, NamingConvention::Alphabetical), ["A", "B", "C"]);
        let lower = with(NamingConvention::Alphabetical, |o| o.case = LetterCase::Lower);
        assert_eq!(NameAssigner::names(2, &lower).unwrap(), ["a", "b"]);
        assert_eq!(names(26, NamingConvention::Alphabetical)[25], "Z");
        assert!(matches!(
            NameAssigner::names(27, &Naming::new(NamingConvention::Alphabetical)),
            Err(DomainError::InvalidNaming(_))
        ));
    }

    #[test]
    fn incremental_multiplies_increment() {
        assert_eq!(
            names(3, NamingConvention::Incremental),
            ["100", "200", "300"]
        );
        let halves = with(NamingConvention::Incremental, |o| o.increment = 50.0);
        assert_eq!(NameAssigner::names(2, &halves).unwrap(), ["50", "100"]);
        let zero = with(NamingConvention::Incremental, |o| o.increment = 0.0);
        assert!(NameAssigner::names(2, &zero).is_err());
    }

    #[test]
    fn custom_names_must_match_count() {
        let custom = NamingConvention::Custom(vec!["body".into(), "title".into()]);
        assert_eq!(names(2, custom.clone()), ["body", "title"]);
        assert!(NameAssigner::names(3, &Naming::new(custom)).is_err());
        let blank = NamingConvention::Custom(vec!["body".into(), " ".into()]);
        assert!(NameAssigner::names(2, &Naming::new(blank)).is_err());
    }

    #[test]
    fn zero_stops_is_rejected() {
        assert!(NameAssigner::names(0, &Naming::default()).is_err());
    }

    // ── Semantic labels ─────────────────────────────────────────────────────

    #[test]
    fn semantic_fixed_tables() {
        assert_eq!(semantic_labels_for_variations(1).unwrap(), ["base"]);
        assert_eq!(
            semantic_labels_for_variations(2).unwrap(),
            ["dark", "base", "light"]
        );
        assert_eq!(
            semantic_labels_for_variations(4).unwrap(),
            ["darker", "dark", "base", "light", "lighter"]
        );
        assert_eq!(
            semantic_labels_for_variations(6).unwrap(),
            ["darkest", "darker", "dark", "base", "light", "lighter", "lightest"]
        );
        assert_eq!(
            semantic_labels_for_variations(10).unwrap(),
            [
                "xx-darkest",
                "x-darkest",
                "darkest",
                "darker",
                "dark",
                "base",
                "light",
                "lighter",
                "lightest",
                "x-lightest",
                "xx-lightest",
            ]
        );
    }

    #[test]
    fn semantic_expansion_gives_the_extra_label_to_the_dark_side() {
        assert_eq!(
            semantic_labels_for_variations(3).unwrap(),
            ["darker", "dark", "base", "light"]
        );
        let widest = semantic_labels(MAX_SEMANTIC_LABELS).unwrap();
        assert_eq!(widest[0], "7x-darkest");
        assert_eq!(widest[10], "base");
        assert!(semantic_labels(22).is_err());
        assert!(semantic_labels_for_variations(0).is_err());
    }

    // ── Collisions ──────────────────────────────────────────────────────────

    #[test]
    fn different_variant_gets_suffixed() {
        let mut context = NameContext::new();
        context.record("shadow", "card", Some("outer"));

        let inner = NameTarget::new("shadow", "card", TokenType::BoxShadow).with_variant(Some("inner"));
        assert_eq!(NameAssigner::resolve("card", &inner, &context).unwrap(), "card-inner");

        let outer = NameTarget::new("shadow", "card", TokenType::BoxShadow).with_variant(Some("outer"));
        assert_eq!(NameAssigner::resolve("card", &outer, &context).unwrap(), "card");
    }

    #[test]
    fn unresolvable_collision_fails() {
        let mut context = NameContext::new();
        context.record("shadow", "card", Some("outer"));
        context.record("shadow", "card-inner", Some("focus"));

        let inner = NameTarget::new("shadow", "card", TokenType::BoxShadow).with_variant(Some("inner"));
        assert!(matches!(
            NameAssigner::resolve("card", &inner, &context),
            Err(DomainError::NameCollision { name, .. }) if name == "card-inner"
        ));

        let plain = NameTarget::new("shadow", "card", TokenType::BoxShadow);
        assert!(NameAssigner::resolve("card", &plain, &context).is_err());
    }

    #[test]
    fn include_type_always_qualifies() {
        let naming = with(NamingConvention::Tshirt, |o| o.include_type_in_name = true);
        let target = NameTarget::new("shadow.card", "card", TokenType::BoxShadow).with_variant(Some("inner"));
        let named = NameAssigner::assign(&points(2), &naming, &target, &NameContext::new()).unwrap();
        let got: Vec<_> = named.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(got, ["inner.card.md", "inner.card.lg"]);

        let untyped = NameTarget::new("space", "space", TokenType::Spacing);
        let named = NameAssigner::assign(&points(1), &naming, &untyped, &NameContext::new()).unwrap();
        assert_eq!(named[0].name, "spacing.space.md");
    }

    #[test]
    fn duplicates_in_one_batch_collide() {
        let naming = Naming::new(NamingConvention::Custom(vec!["a".into(), "a".into()]));
        let target = NameTarget::new("space", "space", TokenType::Spacing);
        assert!(matches!(
            NameAssigner::assign(&points(2), &naming, &target, &NameContext::new()),
            Err(DomainError::NameCollision { .. })
        ));
    }

    #[test]
    fn assign_keeps_point_values() {
        let target = NameTarget::new("space", "space", TokenType::Spacing);
        let named = NameAssigner::assign(&points(2), &Naming::default(), &target, &NameContext::new())
            .unwrap();
        assert_eq!(named[1].name, "2");
        assert_eq!(named[1].point.raw, RawValue::Number(2.0));
    }

    #[test]
    fn context_forgets_and_clears() {
        let mut context = NameContext::new();
        context.record("a", "x", None);
        context.record("b", "y", None);
        assert_eq!(context.names_at("a"), ["x"]);
        context.forget_node("a");
        assert_eq!(context.binding("a", "x"), None);
        assert_eq!(context.binding("b", "y"), Some(None));
        context.clear();
        assert!(context.is_empty());
    }

    // ── Midpoint elision ────────────────────────────────────────────────────

    fn named(labels: &[&str]) -> Vec<NamedPoint> {
        labels
            .iter()
            .zip(points(labels.len()))
            .map(|(l, p)| NamedPoint::new(*l, p))
            .collect()
    }

    #[test]
    fn elision_with_odd_remainder_uses_true_middle() {
        let out = elide_midpoint(named(&["1", "2", "base", "3", "4", "5"]), "base", None).unwrap();
        let got: Vec<_> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(got, ["1", "2", "base", "4", "5"]);
    }

    #[test]
    fn elision_with_even_remainder_needs_a_choice() {
        let stops = named(&["sm", "md", "base", "lg", "xl"]);
        assert!(elide_midpoint(stops.clone(), "base", None).is_err());

        let lower = elide_midpoint(stops.clone(), "base", Some(MidpointChoice::Lower)).unwrap();
        let got: Vec<_> = lower.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(got, ["sm", "base", "lg", "xl"]);

        let upper = elide_midpoint(stops, "base", Some(MidpointChoice::Upper)).unwrap();
        assert_eq!(upper[2].name, "base");
        assert_eq!(upper[2].point.index, 4);
    }

    #[test]
    fn elision_without_anchor_fails() {
        assert!(elide_midpoint(named(&["a", "b"]), "base", None).is_err());
        assert!(elide_midpoint(named(&["base"]), "base", None).is_err());
    }
}
