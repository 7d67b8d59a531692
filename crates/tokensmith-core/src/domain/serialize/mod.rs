//! Rendering a [`TokenTree`] to JSON, CSS and SCSS.
//!
//! All three renderers walk the tree in [`canonical_order`], so the same
//! tree always produces byte-identical output.

mod css;
mod json;
mod scss;

use crate::domain::entities::token::{Token, reference_path};
use crate::domain::entities::tree::{Namespace, TokenTree, TreeNode};
use crate::domain::ordering::{OrderingTables, canonical_order};
use crate::domain::value_objects::ArtifactFormat;

#[derive(Debug, Clone, Default)]
pub struct CanonicalSerializer {
    tables: OrderingTables,
}

impl CanonicalSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: OrderingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &OrderingTables {
        &self.tables
    }

    pub fn to_json(&self, tree: &TokenTree) -> String {
        json::render(tree, &self.tables)
    }

    pub fn to_css(&self, tree: &TokenTree) -> String {
        css::render(tree, &self.tables)
    }

    pub fn to_scss(&self, tree: &TokenTree) -> String {
        scss::render(tree, &self.tables)
    }

    pub fn render(&self, tree: &TokenTree, format: ArtifactFormat) -> String {
        match format {
            ArtifactFormat::Json => self.to_json(tree),
            ArtifactFormat::Css => self.to_css(tree),
            ArtifactFormat::Scss => self.to_scss(tree),
        }
    }
}

// ── Shared flattening ─────────────────────────────────────────────────────────

/// A token with the path leading to it.
pub(crate) struct FlatToken<'t> {
    pub segments: Vec<&'t str>,
    pub token: &'t Token,
}

impl FlatToken<'_> {
    pub fn variable_name(&self) -> String {
        variable_name(&self.segments)
    }
}

/// Every token in depth-first canonical order.
pub(crate) fn flatten<'t>(tree: &'t TokenTree, tables: &OrderingTables) -> Vec<FlatToken<'t>> {
    let mut out = Vec::with_capacity(tree.leaf_count());
    walk(tree.root(), &mut Vec::new(), tables, &mut out);
    out
}

fn walk<'t>(
    namespace: &'t Namespace,
    prefix: &mut Vec<&'t str>,
    tables: &OrderingTables,
    out: &mut Vec<FlatToken<'t>>,
) {
    for key in canonical_order(namespace.keys().map(String::as_str), tables) {
        let Some(node) = namespace.get(key) else {
            continue;
        };
        prefix.push(key);
        match node {
            TreeNode::Leaf(token) => out.push(FlatToken {
                segments: prefix.clone(),
                token,
            }),
            TreeNode::Namespace(children) => walk(children, prefix, tables, out),
        }
        prefix.pop();
    }
}

/// Segments joined with `-`; a `.` inside a segment also becomes `-`.
pub(crate) fn variable_name<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref().replace('.', "-"))
        .collect::<Vec<_>>()
        .join("-")
}

/// Rewrite a `{a.b.c}` reference with `to_variable`; other values pass through.
pub(crate) fn rewrite_reference(value: &str, to_variable: impl Fn(&str) -> String) -> String {
    match reference_path(value) {
        Some(path) => {
            let segments: Vec<&str> = path.split('.').collect();
            to_variable(&variable_name(&segments))
        }
        None => value.to_string(),
    }
}

/// `fontFamily` → `font-family`.
pub(crate) fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for (i, c) in property.char_indices() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::{CompositeValue, NamedToken};
    use crate::domain::value_objects::TokenType;

    pub(super) fn sample_tree() -> TokenTree {
        let mut tree = TokenTree::new();
        tree.insert(
            &["primitives", "color"],
            "blue",
            vec![
                NamedToken::new("lightest", Token::new("#EAF1FD", TokenType::Color)),
                NamedToken::new("base", Token::new("#3B82F6", TokenType::Color)),
            ],
        )
        .unwrap();
        tree.insert(
            &["typography"],
            "font-family",
            vec![NamedToken::new(
                "sans",
                Token::new("Inter, sans-serif", TokenType::FontFamily),
            )],
        )
        .unwrap();
        tree.insert(
            &["typography"],
            "styles",
            vec![NamedToken::new(
                "body",
                Token::composite(
                    CompositeValue::new()
                        .with("fontFamily", Some("{typography.font-family.sans}".into()))
                        .with("fontSize", None)
                        .with("lineHeight", Some("1.5".into())),
                ),
            )],
        )
        .unwrap();
        tree
    }

    #[test]
    fn flatten_follows_canonical_order() {
        let tree = sample_tree();
        let names: Vec<String> = flatten(&tree, &OrderingTables::default())
            .iter()
            .map(FlatToken::variable_name)
            .collect();
        assert_eq!(
            names,
            [
                "primitives-color-blue-base",
                "primitives-color-blue-lightest",
                "typography-font-family-sans",
                "typography-styles-body",
            ]
        );
    }

    #[test]
    fn dots_in_names_become_dashes() {
        assert_eq!(variable_name(&["shadow", "card", "inner.card.md"]), "shadow-card-inner-card-md");
    }

    #[test]
    fn references_are_rewritten() {
        assert_eq!(
            rewrite_reference("{a.b.c}", |v| format!("var(--{v})")),
            "var(--a-b-c)"
        );
        assert_eq!(rewrite_reference("16px", |v| format!("${v}")), "16px");
    }

    #[test]
    fn kebab_case_properties() {
        assert_eq!(kebab_case("fontFamily"), "font-family");
        assert_eq!(kebab_case("letterSpacing"), "letter-spacing");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn render_dispatches_by_format() {
        let tree = sample_tree();
        let serializer = CanonicalSerializer::new();
        assert_eq!(serializer.render(&tree, ArtifactFormat::Css), serializer.to_css(&tree));
        assert_eq!(serializer.render(&tree, ArtifactFormat::Json), serializer.to_json(&tree));
        assert_eq!(serializer.render(&tree, ArtifactFormat::Scss), serializer.to_scss(&tree));
    }
}
