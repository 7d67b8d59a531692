//! Filesystem-based recipe loader.
//!
//! Discovers and parses `*.toml` recipe files from a directory tree,
//! converting them into [`Recipe`] values ready for a `TokenSession`.
//!
//! # Directory layout expected
//!
//! ```text
//! recipes/
//! ├── brand.toml
//! ├── marketing/
//! │   └── campaign.toml
//! └── README.md            ← ignored
//! ```
//!
//! # Recipe format
//!
//! ```toml
//! name        = "brand"            # optional; defaults to the file stem
//! description = "Brand palette"    # optional
//! family      = "brand"            # optional; artifact file stem, default "tokens"
//!
//! [[steps]]
//! kind  = "color_ramp"             # color_ramp | color_stops | scale | font_weights
//!                                  # line_heights | letter_spacings | font_families
//!                                  # shadow | text_styles
//! path  = ["primitives", "color"]
//! name  = "blue"
//! base  = "#3B82F6"
//! count = 9
//! ```

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use tokensmith_core::{
    application::{ApplicationError, Recipe, ports::RecipeSource},
    error::{TokensmithError, TokensmithResult},
};

/// How deep below the recipes directory files are discovered.
const MAX_DEPTH: usize = 4;

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`Recipe`] values from a directory tree of `.toml` files.
///
/// Files that cannot be read or parsed emit a `WARN` log and are skipped;
/// they do not prevent other recipes from loading.
///
/// # Example
///
/// ```no_run
/// use tokensmith_adapters::TomlRecipeLoader;
///
/// let loader = TomlRecipeLoader::new("./recipes");
/// let recipes = loader.load_all()?;
/// println!("Loaded {} recipes", recipes.len());
/// # Ok::<(), tokensmith_core::error::TokensmithError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TomlRecipeLoader {
    recipes_dir: PathBuf,
}

impl TomlRecipeLoader {
    /// Create a loader pointed at `recipes_dir`.
    ///
    /// The directory does not need to exist yet; [`load_all`](Self::load_all)
    /// returns an error if it is missing when called.
    pub fn new(recipes_dir: impl Into<PathBuf>) -> Self {
        Self {
            recipes_dir: recipes_dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.recipes_dir
    }

    /// Load every valid recipe found under the recipes directory, in file
    /// name order.
    ///
    /// # Errors
    ///
    /// Returns [`TokensmithError::Configuration`] if the directory does not
    /// exist.
    #[instrument(skip(self), fields(dir = %self.recipes_dir.display()))]
    pub fn load_all(&self) -> TokensmithResult<Vec<Recipe>> {
        if !self.recipes_dir.is_dir() {
            return Err(TokensmithError::Configuration {
                message: format!(
                    "recipes directory not found: {}",
                    self.recipes_dir.display()
                ),
            });
        }

        let mut recipes = Vec::new();
        let walker = WalkDir::new(&self.recipes_dir)
            .min_depth(1)
            .max_depth(MAX_DEPTH)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_recipe_file(entry.path()) {
                continue;
            }

            match load_recipe_file(entry.path()) {
                Ok(recipe) => {
                    debug!(name = %recipe.name, steps = recipe.steps.len(), "loaded recipe");
                    recipes.push(recipe);
                }
                Err(e) => {
                    // One bad recipe must not block all others.
                    warn!(
                        path  = %entry.path().display(),
                        error = %e,
                        "skipping recipe file due to load error"
                    );
                }
            }
        }

        debug!(count = recipes.len(), "finished loading recipes");
        Ok(recipes)
    }
}

impl RecipeSource for TomlRecipeLoader {
    fn get(&self, name: &str) -> TokensmithResult<Recipe> {
        self.load_all()?
            .into_iter()
            .find(|r| r.name == name)
            .ok_or_else(|| {
                ApplicationError::RecipeNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }

    fn list(&self) -> TokensmithResult<Vec<Recipe>> {
        self.load_all()
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Read and parse one recipe file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_recipe_file(path: &Path) -> TokensmithResult<Recipe> {
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
    let raw = fs::read_to_string(path).map_err(|e| ApplicationError::RecipeInvalid {
        recipe: stem.to_string(),
        reason: format!("failed to read '{}': {e}", path.display()),
    })?;
    Ok(parse_recipe(&raw, stem)?)
}

/// Parse and validate a TOML recipe.
///
/// `fallback_name` names recipes that do not set `name`.
pub fn parse_recipe(raw: &str, fallback_name: &str) -> Result<Recipe, ApplicationError> {
    let mut recipe: Recipe = toml::from_str(raw).map_err(|e| ApplicationError::RecipeInvalid {
        recipe: fallback_name.to_string(),
        reason: e.message().to_string(),
    })?;
    if recipe.name.trim().is_empty() {
        recipe.name = fallback_name.to_string();
    }
    recipe.validate()?;
    Ok(recipe)
}

fn is_recipe_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokensmith_core::application::RecipeStep;

    const RAMP: &str = r##"
description = "Just blue"

[[steps]]
kind = "color_ramp"
path = ["primitives", "color"]
name = "blue"
base = "#3B82F6"
count = 9
"##;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let full = dir.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, contents).unwrap();
    }

    // ── load_all ──────────────────────────────────────────────────────────

    #[test]
    fn load_all_returns_error_for_missing_dir() {
        let loader = TomlRecipeLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_all(),
            Err(TokensmithError::Configuration { .. })
        ));
    }

    #[test]
    fn load_all_discovers_nested_files_and_ignores_others() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "blue.toml", RAMP);
        write(temp.path(), "brand/teal.toml", &RAMP.replace("#3B82F6", "#14B8A6"));
        write(temp.path(), "README.md", "# recipes");

        let recipes = TomlRecipeLoader::new(temp.path()).load_all().unwrap();
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["blue", "teal"]);
    }

    #[test]
    fn load_all_continues_when_one_recipe_is_invalid() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "bad.toml", "[[steps]]\nkind = \"gradient\"\n");
        write(temp.path(), "good.toml", RAMP);

        let recipes = TomlRecipeLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(recipes.len(), 1, "bad recipe should be skipped");
        assert_eq!(recipes[0].name, "good");
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn explicit_name_wins_over_file_stem() {
        let recipe = parse_recipe(&format!("name = \"ocean\"\n{RAMP}"), "file").unwrap();
        assert_eq!(recipe.name, "ocean");
        assert_eq!(recipe.description, "Just blue");
        assert!(matches!(recipe.steps[0], RecipeStep::ColorRamp(_)));
    }

    #[test]
    fn parse_errors_name_the_recipe() {
        let err = parse_recipe("steps = 3", "broken").unwrap_err();
        assert!(matches!(err, ApplicationError::RecipeInvalid { ref recipe, .. } if recipe == "broken"));
    }

    #[test]
    fn parsed_recipes_are_validated() {
        let raw = RAMP.replace("[\"primitives\", \"color\"]", "[\"\"]");
        assert!(parse_recipe(&raw, "blank").is_err());
    }

    #[test]
    fn source_get_finds_by_name() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "blue.toml", RAMP);
        let loader = TomlRecipeLoader::new(temp.path());

        assert_eq!(loader.get("blue").unwrap().steps.len(), 1);
        assert!(matches!(
            loader.get("red"),
            Err(TokensmithError::Application(ApplicationError::RecipeNotFound { .. }))
        ));
    }
}
