//! Ordered, 2-space indented JSON.
//!
//! Written by hand because the key order is part of the output contract:
//! namespaces follow `canonical_order`, leaves always read `value`, `type`,
//! then `description`.

use crate::domain::entities::token::{Token, TokenValue};
use crate::domain::entities::tree::{Namespace, TokenTree, TreeNode};
use crate::domain::ordering::{OrderingTables, canonical_order};

pub(super) fn render(tree: &TokenTree, tables: &OrderingTables) -> String {
    let mut out = String::new();
    write_namespace(&mut out, tree.root(), 0, tables);
    out.push('\n');
    out
}

fn write_namespace(out: &mut String, namespace: &Namespace, depth: usize, tables: &OrderingTables) {
    let keys = canonical_order(namespace.keys().map(String::as_str), tables);
    let entries = keys
        .into_iter()
        .filter_map(|key| namespace.get(key).map(|node| (key, node)));

    write_object(out, depth, entries, |out, node, depth| match node {
        TreeNode::Namespace(children) => write_namespace(out, children, depth, tables),
        TreeNode::Leaf(token) => write_token(out, token, depth),
    });
}

fn write_token(out: &mut String, token: &Token, depth: usize) {
    enum Field<'t> {
        Text(&'t str),
        Value(&'t TokenValue),
    }

    let mut fields = vec![
        ("value", Field::Value(token.value())),
        ("type", Field::Text(token.token_type().as_str())),
    ];
    if let Some(description) = token.description() {
        fields.push(("description", Field::Text(description)));
    }

    write_object(out, depth, fields, |out, field, depth| match field {
        Field::Text(text) => write_string(out, text),
        Field::Value(TokenValue::Literal(text)) => write_string(out, text),
        Field::Value(TokenValue::Composite(composite)) => {
            write_object(out, depth, composite.populated(), |out, value, _| {
                write_string(out, value)
            });
        }
    });
}

/// `{ "k": <v>, ... }` with one entry per line, or `{}` when empty.
fn write_object<'k, V>(
    out: &mut String,
    depth: usize,
    entries: impl IntoIterator<Item = (&'k str, V)>,
    mut write_value: impl FnMut(&mut String, V, usize),
) {
    let mut entries = entries.into_iter().peekable();
    if entries.peek().is_none() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    while let Some((key, value)) = entries.next() {
        indent(out, depth + 1);
        write_string(out, key);
        out.push_str(": ");
        write_value(out, value, depth + 1);
        if entries.peek().is_some() {
            out.push(',');
        }
        out.push('\n');
    }
    indent(out, depth);
    out.push('}');
}

fn write_string(out: &mut String, s: &str) {
    out.push_str(&serde_json::Value::from(s).to_string());
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_tree;
    use super::*;
    use crate::domain::entities::token::NamedToken;
    use crate::domain::value_objects::TokenType;

    fn json(tree: &TokenTree) -> String {
        render(tree, &OrderingTables::default())
    }

    #[test]
    fn leaf_fields_and_base_first() {
        let mut tree = TokenTree::new();
        tree.insert(
            &["color"],
            "blue",
            vec![
                NamedToken::new("light", Token::new("#EAF1FD", TokenType::Color)),
                NamedToken::new(
                    "base",
                    Token::new("#3B82F6", TokenType::Color).with_description("brand"),
                ),
            ],
        )
        .unwrap();

        assert_eq!(
            json(&tree),
            r##"{
  "color": {
    "blue": {
      "base": {
        "value": "#3B82F6",
        "type": "color",
        "description": "brand"
      },
      "light": {
        "value": "#EAF1FD",
        "type": "color"
      }
    }
  }
}
"##
        );
    }

    #[test]
    fn output_is_valid_json() {
        let text = json(&sample_tree());
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed["typography"]["styles"]["body"]["value"]["fontFamily"],
            "{typography.font-family.sans}"
        );
        // Unset composite entries are omitted.
        assert!(parsed["typography"]["styles"]["body"]["value"].get("fontSize").is_none());
        assert_eq!(parsed["typography"]["styles"]["body"]["type"], "composite");
    }

    #[test]
    fn rendering_is_idempotent() {
        let tree = sample_tree();
        assert_eq!(json(&tree), json(&tree));
    }

    #[test]
    fn strings_are_escaped() {
        let mut tree = TokenTree::new();
        tree.insert(
            &["font"],
            "family",
            vec![NamedToken::new(
                "serif",
                Token::new(r#""Georgia", serif"#, TokenType::FontFamily),
            )],
        )
        .unwrap();
        assert!(json(&tree).contains(r#""value": "\"Georgia\", serif""#));
    }

    #[test]
    fn empty_tree_is_an_empty_object() {
        assert_eq!(json(&TokenTree::new()), "{}\n");
    }
}
