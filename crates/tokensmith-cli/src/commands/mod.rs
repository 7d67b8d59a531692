//! Subcommand handlers. Each translates arguments into calls on the core
//! services and adapters, then reports the result.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

use tracing::debug;

use tokensmith_adapters::{RecipeCatalog, TomlRecipeLoader};
use tokensmith_core::application::RecipeService;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Built-in recipes plus those under `recipes.dir`, which win on name clashes.
pub(crate) fn recipe_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<RecipeService> {
    let catalog = RecipeCatalog::with_builtin()?;

    if let Some(dir) = config.recipes_dir(&AppConfig::base_dir(global.config.as_ref())) {
        let loaded = catalog.load_dir(&TomlRecipeLoader::new(&dir))?;
        debug!(dir = %dir.display(), loaded, "Recipe directory merged");
    }

    Ok(RecipeService::new(Box::new(catalog)))
}
