//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "apply a recipe" or "export artifacts".

pub mod recipe_service;
pub mod session;

pub use recipe_service::{RecipeInfo, RecipeService};
pub use session::{ColorDefaults, Inserted, TokenSession};
