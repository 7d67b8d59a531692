//! Tokens: a typed value plus optional metadata.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TokenType;

// ── CompositeValue ────────────────────────────────────────────────────────────

/// An ordered bundle of sub-properties, e.g. a text style.
///
/// Entries keep declaration order. A `None` entry is unset: renderers skip it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeValue {
    entries: Vec<(String, Option<String>)>,
}

impl CompositeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: Option<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set or replace a sub-property, keeping its original position.
    pub fn set(&mut self, property: impl Into<String>, value: Option<String>) {
        let property = property.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .and_then(|(_, v)| v.as_deref())
    }

    /// All entries, set or not, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_deref()))
    }

    /// Only the populated entries, in declaration order.
    pub fn populated(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(p, v)| v.as_deref().map(|v| (p.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── TokenValue ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Literal(String),
    Composite(CompositeValue),
}

impl TokenValue {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            Self::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeValue> {
        match self {
            Self::Composite(c) => Some(c),
            Self::Literal(_) => None,
        }
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<CompositeValue> for TokenValue {
    fn from(c: CompositeValue) -> Self {
        Self::Composite(c)
    }
}

// ── Token ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    value: TokenValue,
    #[serde(rename = "type")]
    token_type: TokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Token {
    pub fn new(value: impl Into<TokenValue>, token_type: TokenType) -> Self {
        Self {
            value: value.into(),
            token_type,
            description: None,
        }
    }

    pub fn composite(value: CompositeValue) -> Self {
        Self::new(value, TokenType::Composite)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A token paired with the stop name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedToken {
    pub name: String,
    pub token: Token,
}

impl NamedToken {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }
}

/// If `value` is a `{a.b.c}` reference, return the dotted path inside it.
pub fn reference_path(value: &str) -> Option<&str> {
    let inner = value.trim().strip_prefix('{')?.strip_suffix('}')?;
    let valid = !inner.is_empty()
        && !inner.starts_with('.')
        && !inner.ends_with('.')
        && !inner.contains(char::is_whitespace)
        && !inner.contains(['{', '}']);
    valid.then_some(inner)
}
