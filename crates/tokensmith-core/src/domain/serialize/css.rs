//! CSS custom properties plus one class per composite token.

use super::{flatten, kebab_case, rewrite_reference};
use crate::domain::entities::token::TokenValue;
use crate::domain::entities::tree::TokenTree;
use crate::domain::ordering::OrderingTables;

pub(super) fn render(tree: &TokenTree, tables: &OrderingTables) -> String {
    let tokens = flatten(tree, tables);
    let css_value = |v: &str| rewrite_reference(v, |name| format!("var(--{name})"));

    let mut out = String::from(":root {\n");
    for flat in &tokens {
        if let TokenValue::Literal(value) = flat.token.value() {
            out.push_str(&format!("  --{}: {};\n", flat.variable_name(), css_value(value)));
        }
    }
    out.push_str("}\n");

    for flat in &tokens {
        if let TokenValue::Composite(composite) = flat.token.value() {
            out.push_str(&format!("\n.{} {{\n", flat.variable_name()));
            for (property, value) in composite.populated() {
                out.push_str(&format!("  {}: {};\n", kebab_case(property), css_value(value)));
            }
            out.push_str("}\n");
        }
    }
    out
}
