//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tokensmith-adapters` crate provides implementations.

use crate::application::recipe::Recipe;
use crate::domain::ArtifactFormat;
use crate::error::TokensmithResult;

/// Port for persisting rendered artifacts.
///
/// Implemented by:
/// - `tokensmith_adapters::sink::DirectorySink` (one file per format)
/// - `tokensmith_adapters::sink::MemorySink` (testing, previews)
///
/// ## Design Notes
///
/// - `family` names the artifact set, e.g. `tokens` → `tokens.css`
/// - Contents are complete; sinks never merge or rewrite them
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactSink: Send + Sync {
    /// Persist the rendering of one token family in one format.
    fn write_artifact(
        &self,
        family: &str,
        format: ArtifactFormat,
        contents: &str,
    ) -> TokensmithResult<()>;
}

/// Port for recipe lookup.
///
/// Implemented by:
/// - `tokensmith_adapters::RecipeCatalog` (built-in recipes plus a directory)
/// - `tokensmith_adapters::TomlRecipeLoader` (a directory of `.toml` files)
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource: Send + Sync {
    /// Get a recipe by name.
    fn get(&self, name: &str) -> TokensmithResult<Recipe>;

    /// List all available recipes.
    fn list(&self) -> TokensmithResult<Vec<Recipe>>;
}
