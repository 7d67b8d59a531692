//! SCSS variables plus one mixin per composite token.

use super::{flatten, kebab_case, rewrite_reference};
use crate::domain::entities::token::TokenValue;
use crate::domain::entities::tree::TokenTree;
use crate::domain::ordering::OrderingTables;

pub(super) fn render(tree: &TokenTree, tables: &OrderingTables) -> String {
    let tokens = flatten(tree, tables);
    let scss_value = |v: &str| rewrite_reference(v, |name| format!("${name}"));

    let mut out = String::new();
    for flat in &tokens {
        if let TokenValue::Literal(value) = flat.token.value() {
            out.push_str(&format!("${}: {};\n", flat.variable_name(), scss_value(value)));
        }
    }

    for flat in &tokens {
        if let TokenValue::Composite(composite) = flat.token.value() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("@mixin {} {{\n", flat.variable_name()));
            for (property, value) in composite.populated() {
                out.push_str(&format!("  {}: {};\n", kebab_case(property), scss_value(value)));
            }
            out.push_str("}\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_tree;
    use super::*;

    #[test]
    fn variables_then_mixins() {
        let scss = render(&sample_tree(), &OrderingTables::default());
        assert_eq!(
            scss,
            "$primitives-color-blue-base: #3B82F6;\n\
             $primitives-color-blue-lightest: #EAF1FD;\n\
             $typography-font-family-sans: Inter, sans-serif;\n\
             \n\
             @mixin typography-styles-body {\n  \
             font-family: $typography-font-family-sans;\n  \
             line-height: 1.5;\n\
             }\n"
        );
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render(&TokenTree::new(), &OrderingTables::default()), "");
    }
}
