//! In-memory recipe catalog with built-in recipes.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::{debug, info};

use tokensmith_core::{
    application::{ApplicationError, Recipe, ports::RecipeSource},
    error::TokensmithResult,
};

use crate::{builtin_recipes, recipe_loader::TomlRecipeLoader};

/// Thread-safe recipe catalog keyed by recipe name.
///
/// Later insertions replace earlier ones, so recipes loaded from a directory
/// after [`load_builtin`](Self::load_builtin) override built-ins of the same
/// name.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    inner: Arc<RwLock<BTreeMap<String, Recipe>>>,
}

impl RecipeCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with built-in recipes loaded.
    pub fn with_builtin() -> TokensmithResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load built-in recipes.
    pub fn load_builtin(&self) -> TokensmithResult<()> {
        for recipe in builtin_recipes::all_recipes()? {
            self.insert(recipe)?;
        }
        Ok(())
    }

    /// Load every recipe under the loader's directory; returns how many.
    pub fn load_dir(&self, loader: &TomlRecipeLoader) -> TokensmithResult<usize> {
        let recipes = loader.load_all()?;
        let count = recipes.len();
        for recipe in recipes {
            self.insert(recipe)?;
        }
        info!(dir = %loader.dir().display(), count, "recipes loaded from directory");
        Ok(count)
    }

    /// Add or replace a recipe.
    pub fn insert(&self, recipe: Recipe) -> TokensmithResult<()> {
        recipe.validate()?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        if inner.contains_key(&recipe.name) {
            debug!(name = %recipe.name, "replacing recipe");
        }
        inner.insert(recipe.name.clone(), recipe);
        Ok(())
    }

    /// Get the number of recipes.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or_default()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recipes.
    pub fn clear(&self) -> TokensmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;
        inner.clear();
        Ok(())
    }
}

impl RecipeSource for RecipeCatalog {
    fn get(&self, name: &str) -> TokensmithResult<Recipe> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::RecipeNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> TokensmithResult<Vec<Recipe>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        Ok(inner.values().cloned().collect())
    }
}
