//! Fixed named tables: font weights, line heights, letter spacings.
//!
//! Each table is ordered smallest to largest, which is also the order the
//! serializers use when every sibling key belongs to it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::{NamedToken, Token};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::TokenType;

pub const FONT_WEIGHTS: [(&str, &str); 9] = [
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("regular", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

pub const LINE_HEIGHTS: [(&str, &str); 6] = [
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

pub const LETTER_SPACINGS: [(&str, &str); 6] = [
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    FontWeight,
    LineHeight,
    LetterSpacing,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::FontWeight, Self::LineHeight, Self::LetterSpacing];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FontWeight => "font_weight",
            Self::LineHeight => "line_height",
            Self::LetterSpacing => "letter_spacing",
        }
    }

    pub const fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::FontWeight => &FONT_WEIGHTS,
            Self::LineHeight => &LINE_HEIGHTS,
            Self::LetterSpacing => &LETTER_SPACINGS,
        }
    }

    pub const fn token_type(&self) -> TokenType {
        match self {
            Self::FontWeight => TokenType::FontWeight,
            Self::LineHeight => TokenType::LineHeight,
            Self::LetterSpacing => TokenType::LetterSpacing,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries().iter().map(|(name, _)| *name)
    }

    pub fn value_of(&self, name: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    /// Tokens for the `select`ed names, or for the whole table.
    pub fn tokens(&self, select: Option<&[String]>) -> DomainResult<Vec<NamedToken>> {
        let token = |name: &str, value: &str| NamedToken::new(name, Token::new(value, self.token_type()));
        match select {
            None => Ok(self.entries().iter().map(|&(n, v)| token(n, v)).collect()),
            Some(names) => names
                .iter()
                .map(|name| {
                    let value = self.value_of(name).ok_or_else(|| DomainError::Unrecognized {
                        what: self.label(),
                        value: name.clone(),
                    })?;
                    Ok(token(&name.to_ascii_lowercase(), value))
                })
                .collect(),
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::FontWeight => "font weight",
            Self::LineHeight => "line height",
            Self::LetterSpacing => "letter spacing",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_table_when_nothing_selected() {
        let tokens = Preset::LineHeight.tokens(None).unwrap();
        assert_eq!(tokens.len(), LINE_HEIGHTS.len());
        assert_eq!(tokens[0].name, "none");
        assert_eq!(tokens[0].token.token_type(), TokenType::LineHeight);
    }

    #[test]
    fn selected_weights_map_to_numbers() {
        let select = vec!["Bold".to_string(), "regular".to_string()];
        let tokens = Preset::FontWeight.tokens(Some(select.as_slice())).unwrap();
        assert_eq!(tokens[0].name, "bold");
        assert_eq!(tokens[0].token.value().as_literal(), Some("700"));
        assert_eq!(tokens[1].token.value().as_literal(), Some("400"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let select = vec!["heavy".to_string()];
        let err = Preset::FontWeight.tokens(Some(select.as_slice())).unwrap_err();
        assert!(matches!(err, DomainError::Unrecognized { what: "font weight", .. }));
    }
}
