//! Recipe Service - recipe lookup and listing.
//!
//! Separated from `TokenSession` so a host can browse recipes without
//! generating anything.

use tracing::debug;

use crate::{
    application::{ports::RecipeSource, recipe::Recipe},
    error::TokensmithResult,
};

/// Information about a recipe for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInfo {
    pub name: String,
    pub description: String,
    pub family: String,
    pub steps: usize,
    /// Step kinds in order, e.g. `color_ramp`, `scale`.
    pub kinds: Vec<&'static str>,
}

impl From<&Recipe> for RecipeInfo {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            family: recipe.family.clone(),
            steps: recipe.steps.len(),
            kinds: recipe.steps.iter().map(|s| s.kind()).collect(),
        }
    }
}

/// Service for recipe operations.
pub struct RecipeService {
    source: Box<dyn RecipeSource>,
}

impl RecipeService {
    pub fn new(source: Box<dyn RecipeSource>) -> Self {
        Self { source }
    }

    /// Get a recipe by name.
    pub fn get(&self, name: &str) -> TokensmithResult<Recipe> {
        debug!(name, "Resolving recipe");
        self.source.get(name)
    }

    /// List all recipes, sorted by name.
    pub fn list(&self) -> TokensmithResult<Vec<RecipeInfo>> {
        let mut recipes: Vec<RecipeInfo> = self.source.list()?.iter().map(RecipeInfo::from).collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockRecipeSource;
    use crate::application::recipe::FontFamiliesStep;
    use crate::error::TokensmithError;

    fn recipe(name: &str) -> Recipe {
        Recipe::new(name).with_step(FontFamiliesStep {
            path: vec!["typography".into()],
            name: "family".into(),
            families: BTreeMap::from([("sans".into(), "Inter, sans-serif".into())]),
        })
    }

    #[test]
    fn list_is_sorted_and_summarized() {
        let mut source = MockRecipeSource::new();
        source
            .expect_list()
            .returning(|| Ok(vec![recipe("starter"), recipe("minimal")]));

        let service = RecipeService::new(Box::new(source));
        let infos = service.list().unwrap();

        assert_eq!(infos[0].name, "minimal");
        assert_eq!(infos[1].name, "starter");
        assert_eq!(infos[0].kinds, ["font_families"]);
        assert_eq!(infos[0].family, "tokens");
    }

    #[test]
    fn get_propagates_not_found() {
        let mut source = MockRecipeSource::new();
        source.expect_get().returning(|name| {
            Err(ApplicationError::RecipeNotFound {
                name: name.to_string(),
            }
            .into())
        });

        let service = RecipeService::new(Box::new(source));
        let err = service.get("missing").unwrap_err();
        assert!(matches!(
            err,
            TokensmithError::Application(ApplicationError::RecipeNotFound { ref name }) if name == "missing"
        ));
    }
}
