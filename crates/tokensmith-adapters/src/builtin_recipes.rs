//! Recipes that ship with Tokensmith.
//!
//! The TOML sources are embedded at compile time, so the built-ins work
//! without any files on disk. `tokensmith init` can write them out as a
//! starting point for custom recipes.

use tracing::{debug, instrument};

use tokensmith_core::{application::Recipe, error::TokensmithResult};

use crate::recipe_loader::parse_recipe;

/// `(name, TOML source)` for every built-in recipe.
pub const BUILTIN: [(&str, &str); 2] = [
    ("minimal", include_str!("../recipes/minimal.toml")),
    ("starter", include_str!("../recipes/starter.toml")),
];

pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

/// The TOML source of a built-in recipe.
pub fn source(name: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, raw)| *raw)
}

/// Parse every built-in recipe.
///
/// A failure here means an embedded recipe is broken, which is a bug.
#[instrument]
pub fn all_recipes() -> TokensmithResult<Vec<Recipe>> {
    let recipes = BUILTIN
        .iter()
        .map(|(name, raw)| parse_recipe(raw, name))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = recipes.len(), "built-in recipes parsed");
    Ok(recipes)
}
