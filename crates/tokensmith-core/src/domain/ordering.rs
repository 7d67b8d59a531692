//! Sibling key ordering shared by every serializer.

use std::cmp::Ordering;

use crate::domain::naming::{BASE_LABEL, MAX_SEMANTIC_LABELS, TSHIRT_FULL, semantic_labels};
use crate::domain::presets::Preset;

/// A named, ordered list of known keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingTable {
    name: String,
    keys: Vec<String>,
}

impl OrderingTable {
    pub fn new(name: impl Into<String>, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    fn covers(&self, keys: &[&str]) -> bool {
        keys.iter().all(|k| self.position(k).is_some())
    }
}

/// Domain tables consulted in order; the first one covering every key wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingTables {
    tables: Vec<OrderingTable>,
}

impl OrderingTables {
    /// No tables: only the numeric and lexicographic rules apply.
    pub fn empty() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn with_table(mut self, table: OrderingTable) -> Self {
        self.tables.push(table);
        self
    }

    pub fn tables(&self) -> &[OrderingTable] {
        &self.tables
    }

    fn covering(&self, keys: &[&str]) -> Option<&OrderingTable> {
        self.tables.iter().find(|t| t.covers(keys))
    }
}

impl Default for OrderingTables {
    /// T-shirt sizes, the semantic ladder, then the typography presets.
    fn default() -> Self {
        let ladder = semantic_labels(MAX_SEMANTIC_LABELS).unwrap_or_default();
        let mut tables = Self::empty()
            .with_table(OrderingTable::new("tshirt", TSHIRT_FULL))
            .with_table(OrderingTable::new("semantic", ladder));
        for preset in Preset::ALL {
            tables = tables.with_table(OrderingTable::new(preset.as_str(), preset.keys()));
        }
        tables
    }
}

/// Order sibling keys for output.
///
/// Ignoring a literal `base` key, the first rule that fits decides:
/// 1. every key is in one known table: table order;
/// 2. every key is a two-digit numeral: numeric;
/// 3. every key is a number: numeric ascending;
/// 4. otherwise lexicographic.
///
/// `base`, if present, then goes first.
pub fn canonical_order<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    tables: &OrderingTables,
) -> Vec<&'a str> {
    let mut keys: Vec<&'a str> = keys.into_iter().collect();
    let had_base = keys.contains(&BASE_LABEL);
    keys.retain(|k| *k != BASE_LABEL);

    if !keys.is_empty() {
        sort_siblings(&mut keys, tables);
    }
    if had_base {
        keys.insert(0, BASE_LABEL);
    }
    keys
}

fn sort_siblings(keys: &mut Vec<&str>, tables: &OrderingTables) {
    if let Some(table) = tables.covering(keys) {
        keys.sort_by_key(|k| table.position(k));
    } else if keys.iter().all(|k| is_two_digit(k)) {
        keys.sort_by_key(|k| k.parse::<u8>().unwrap_or(u8::MAX));
    } else if let Some(numbers) = parse_all(keys) {
        let mut pairs: Vec<(f64, &str)> = numbers.into_iter().zip(keys.iter().copied()).collect();
        pairs.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        *keys = pairs.into_iter().map(|(_, k)| k).collect();
    } else {
        keys.sort_unstable();
    }
}

fn is_two_digit(key: &str) -> bool {
    key.len() == 2 && key.bytes().all(|b| b.is_ascii_digit())
}

fn parse_all(keys: &[&str]) -> Option<Vec<f64>> {
    keys.iter()
        .map(|k| k.parse::<f64>().ok().filter(|n| n.is_finite()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<'a>(keys: &[&'a str]) -> Vec<&'a str> {
        canonical_order(keys.iter().copied(), &OrderingTables::default())
    }

    #[test]
    fn tshirt_table_order() {
        assert_eq!(order(&["xl", "sm", "md", "2xl", "xs"]), ["xs", "sm", "md", "xl", "2xl"]);
    }

    #[test]
    fn semantic_ladder_with_base_first() {
        assert_eq!(
            order(&["lighter", "dark", "base", "light", "darker"]),
            ["base", "darker", "dark", "light", "lighter"]
        );
    }

    #[test]
    fn preset_tables_order_typography_names() {
        assert_eq!(order(&["bold", "regular", "thin"]), ["thin", "regular", "bold"]);
        assert_eq!(order(&["loose", "none", "normal"]), ["none", "normal", "loose"]);
        assert_eq!(order(&["widest", "tighter"]), ["tighter", "widest"]);
    }

    #[test]
    fn two_digit_numerals_sort_numerically() {
        assert_eq!(order(&["10", "02", "01"]), ["01", "02", "10"]);
    }

    #[test]
    fn numbers_sort_ascending_around_base() {
        assert_eq!(
            order(&["900", "base", "50", "100", "0.5"]),
            ["base", "0.5", "50", "100", "900"]
        );
    }

    #[test]
    fn mixed_keys_fall_back_to_lexicographic() {
        assert_eq!(order(&["card", "button", "10"]), ["10", "button", "card"]);
        assert_eq!(order(&["nan", "inf"]), ["inf", "nan"]);
    }

    #[test]
    fn base_alone_and_empty() {
        assert_eq!(order(&["base"]), ["base"]);
        assert!(order(&[]).is_empty());
    }

    #[test]
    fn empty_tables_skip_rule_one() {
        let keys = ["xl", "sm"];
        assert_eq!(
            canonical_order(keys.iter().copied(), &OrderingTables::empty()),
            ["sm", "xl"]
        );
    }
}
