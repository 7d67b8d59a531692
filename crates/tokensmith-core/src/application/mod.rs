//! Application layer for Tokensmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TokenSession, RecipeService)
//! - **Recipes**: The serde model hosts hand to a session
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod recipe;
pub mod services;

// Re-export main services
pub use services::{
    ColorDefaults, Inserted,
    RecipeInfo, // DTO for recipe metadata
    RecipeService, TokenSession,
};

pub use recipe::{Recipe, RecipeStep};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactSink, RecipeSource};

pub use error::ApplicationError;
