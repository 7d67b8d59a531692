//! Infrastructure adapters for Tokensmith.
//!
//! This crate implements the ports defined in `tokensmith-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_recipes;
pub mod catalog;
pub mod recipe_loader;
pub mod sink;

// Re-export commonly used adapters
pub use catalog::RecipeCatalog;
pub use recipe_loader::{TomlRecipeLoader, load_recipe_file};
pub use sink::{DirectorySink, MemorySink};
